//! Maps typed viewer commands onto protocol messages.

use shared::{ClientMessage, TileSelection};

/// Parses one input line into a protocol message. Returns `None` for
/// anything unrecognized so the caller can print usage instead.
pub fn parse_command(line: &str) -> Option<ClientMessage> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "guess" | "g" => {
            let row = parts.next()?.parse().ok()?;
            let column = parts.next()?.parse().ok()?;
            Some(ClientMessage::TileSelected {
                payload: TileSelection { row, column },
            })
        }
        "end" | "e" => Some(ClientMessage::TurnEnded),
        "new" | "n" => Some(ClientMessage::NewGameRequested),
        "cards" | "c" => Some(ClientMessage::NewCardsRequested),
        _ => None,
    }
}

pub fn help() -> &'static str {
    "commands:\n  \
     guess <row> <column>  select a tile (0-4)\n  \
     end                   end the current team's turn\n  \
     new                   next game from the remaining words\n  \
     cards                 fresh game from the full word pool"
}
