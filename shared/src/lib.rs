//! # Codewords Shared Library
//!
//! Types shared between the authoritative server and viewer clients:
//! the pure game model (board generation, state transitions, derived
//! queries) and the JSON wire protocol spoken over the connection.
//!
//! Everything in this crate is pure data and pure functions. All I/O,
//! scheduling, and state ownership live in the `server` and `client`
//! crates; keeping the rules here guarantees that every process in the
//! system agrees on what a legal board and a legal move look like.
//!
//! ## Module Organization
//!
//! ### Board Module (`board`)
//! The game model itself: teams, tile assignments, the 5x5 board,
//! random board generation, and the four pure state transitions. Also
//! the derived queries (per-team score, game-over detection) consumed
//! by presentation layers.
//!
//! ### Protocol Module (`protocol`)
//! The closed set of client-originated intents and the server's
//! full-state broadcast message, with serde definitions matching the
//! JSON text format exactly.

pub mod board;
pub mod protocol;

pub use board::{new_game, Assignment, BoardError, GameState, Team, TeamScore, Tile};
pub use protocol::{ClientMessage, ServerMessage, TileSelection};

/// Board edge length; every board is `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: usize = 5;
/// Total tiles per board.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Tiles assigned to the team that moves first.
pub const FIRST_TEAM_TILES: usize = 9;
/// Tiles assigned to the team that moves second.
pub const SECOND_TEAM_TILES: usize = 8;
/// Assassin tiles per board.
pub const ASSASSIN_TILES: usize = 1;
/// Neutral tiles make up the rest of the board.
pub const NEUTRAL_TILES: usize =
    TILE_COUNT - FIRST_TEAM_TILES - SECOND_TEAM_TILES - ASSASSIN_TILES;
