//! # Codewords Viewer Client Library
//!
//! Presentation layer for the game: turns broadcast `GameState` snapshots
//! into a terminal rendering, and turns typed commands into protocol
//! messages. Contains no game logic of its own; score and game-over come
//! from the derived queries in `shared`.
//!
//! ## Module Organization
//!
//! - `commands` — stdin command parsing into `ClientMessage` values
//! - `render` — text rendering of a board snapshot

pub mod commands;
pub mod render;
