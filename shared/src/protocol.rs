//! JSON wire protocol.
//!
//! Messages travel as newline-delimited JSON text over a persistent
//! connection. The server speaks exactly one message: a full snapshot of
//! the game state, sent to a viewer when it joins and to every viewer
//! after each accepted action. There is no diffing; a full snapshot makes
//! the protocol self-healing, since any broadcast brings a late or
//! reconnecting viewer fully current.

use crate::board::GameState;
use serde::{Deserialize, Serialize};

/// Grid coordinates of a selected tile, 0-indexed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSelection {
    pub row: usize,
    pub column: usize,
}

/// The closed set of client-originated intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "TILE_SELECTED")]
    TileSelected { payload: TileSelection },
    #[serde(rename = "NEW_GAME_REQUESTED")]
    NewGameRequested,
    #[serde(rename = "NEW_CARDS_REQUESTED")]
    NewCardsRequested,
    #[serde(rename = "TURN_ENDED")]
    TurnEnded,
    /// Message types this build does not recognize decode to this variant,
    /// which the server treats as a guaranteed no-op. Newer clients can
    /// speak to older servers without being disconnected.
    #[serde(other)]
    Unknown,
}

/// Server-to-client messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "GAME_STATE")]
    GameState { payload: GameState },
}
