//! # Codewords Game Server Library
//!
//! Authoritative server for the two-team word-guessing game. It holds the
//! single source of truth for game state, applies viewer actions one at a
//! time through the pure transitions in `shared`, and keeps every
//! connected viewer consistent by broadcasting a full-state snapshot
//! after each accepted action.
//!
//! ## Core Responsibilities
//!
//! ### Authoritative State
//! Exactly one `GameState` exists per process, owned by the store inside
//! the server event loop. Viewers never mutate state directly; they send
//! intents, and the store decides. Illegal or unrecognized intents are
//! rejected silently with no state change and no broadcast.
//!
//! ### Viewer Management
//! Each TCP connection is one viewer. On connect the viewer immediately
//! receives the current state; on disconnect it is removed from the
//! registry and excluded from future broadcasts. A disconnect is a normal
//! lifecycle event, not an error.
//!
//! ### State Broadcasting
//! Every broadcast is a complete snapshot, never a diff. That keeps the
//! protocol self-healing: whatever a viewer missed, the next broadcast
//! brings it fully current.
//!
//! ## Architecture Design
//!
//! All connection tasks funnel events into a single mpsc channel consumed
//! by one event loop, which exclusively owns the store and the registry.
//! This serializes dispatches (no interleaved partial transitions) and
//! makes broadcasts causally ordered with the actions they reflect.
//!
//! ## Module Organization
//!
//! - `store` — the authoritative state cell and its dispatch path
//! - `registry` — live viewer handles and broadcast fan-out
//! - `network` — TCP accept loop, connection tasks, event loop
//! - `words` — the built-in candidate word pool

pub mod network;
pub mod registry;
pub mod store;
pub mod words;
