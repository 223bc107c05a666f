//! Authoritative store: the single in-memory cell of truth for game state.
//!
//! Exactly one `Store` exists per process and exactly one task owns it (the
//! server event loop), so actions apply strictly one at a time in arrival
//! order. Each accepted action replaces the stored state with the successor
//! value produced by the pure transitions in `shared::board`.

use log::{info, warn};
use rand::Rng;
use shared::{new_game, BoardError, ClientMessage, GameState};

pub struct Store {
    /// The full startup word pool, used whenever a board is dealt from
    /// scratch (`NEW_CARDS_REQUESTED`, or a wrapped-around `NEW_GAME_REQUESTED`).
    pool: Vec<String>,
    state: GameState,
}

impl Store {
    /// Creates the store with an initial board dealt from the full pool.
    ///
    /// A pool below 25 words is a configuration error and fails startup.
    pub fn new(pool: Vec<String>) -> Result<Self, BoardError> {
        let state = new_game(&pool, &mut rand::thread_rng())?;
        Ok(Self { pool, state })
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one action and returns the new state, or `None` when the
    /// action is illegal or unrecognized. Rejected actions leave the state
    /// untouched and surface no error to the sender.
    pub fn dispatch(&mut self, action: &ClientMessage) -> Option<&GameState> {
        self.dispatch_with_rng(action, &mut rand::thread_rng())
    }

    /// `dispatch` with an explicit randomness source, for deterministic tests.
    pub fn dispatch_with_rng<R: Rng + ?Sized>(
        &mut self,
        action: &ClientMessage,
        rng: &mut R,
    ) -> Option<&GameState> {
        let next = match action {
            ClientMessage::TileSelected { payload } => {
                self.state.tile_selected(payload.row, payload.column)?
            }
            ClientMessage::TurnEnded => self.state.turn_ended(),
            ClientMessage::NewGameRequested => {
                // Carry the remainder pool into the next game; once it can
                // no longer fill a board, wrap around to the full pool.
                match new_game(&self.state.remaining_words, rng) {
                    Ok(state) => state,
                    Err(BoardError::PoolTooSmall { available }) => {
                        info!(
                            "Remainder pool exhausted ({} words left), dealing from the full pool",
                            available
                        );
                        self.deal_from_full_pool(rng)?
                    }
                }
            }
            ClientMessage::NewCardsRequested => self.deal_from_full_pool(rng)?,
            ClientMessage::Unknown => return None,
        };

        self.state = next;
        Some(&self.state)
    }

    fn deal_from_full_pool<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GameState> {
        // The pool was validated at startup, so this only fails if the
        // store was constructed by other means.
        match new_game(&self.pool, rng) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Failed to deal a fresh board: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Assignment, Team, TeamScore, Tile, TileSelection, GRID_SIZE, TILE_COUNT};
    use std::collections::HashSet;

    fn word_pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{}", i)).collect()
    }

    /// Store seeded with a known layout: red up first, red owns the first
    /// 9 tiles row-major, blue the next 8, then the assassin, then neutrals.
    fn fixed_store() -> Store {
        let mut assignments = Vec::new();
        assignments.extend(std::iter::repeat(Assignment::Red).take(9));
        assignments.extend(std::iter::repeat(Assignment::Blue).take(8));
        assignments.push(Assignment::Assassin);
        assignments.extend(std::iter::repeat(Assignment::Neutral).take(7));

        let tiles = assignments
            .chunks(GRID_SIZE)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, assignment)| Tile {
                        word: format!("tile{}{}", row, col),
                        assignment: *assignment,
                        guess: None,
                    })
                    .collect()
            })
            .collect();

        Store {
            pool: word_pool(60),
            state: GameState {
                current_team: Team::Red,
                remaining_words: word_pool(60).split_off(TILE_COUNT),
                tiles,
            },
        }
    }

    fn select(row: usize, column: usize) -> ClientMessage {
        ClientMessage::TileSelected {
            payload: TileSelection { row, column },
        }
    }

    #[test]
    fn test_startup_requires_full_pool() {
        assert!(Store::new(word_pool(TILE_COUNT - 1)).is_err());
        assert!(Store::new(word_pool(TILE_COUNT)).is_ok());
    }

    #[test]
    fn test_dispatch_turn_ended() {
        let mut store = fixed_store();
        let state = store.dispatch(&ClientMessage::TurnEnded).unwrap();
        assert_eq!(state.current_team, Team::Blue);
    }

    #[test]
    fn test_dispatch_correct_guess_keeps_turn() {
        let mut store = fixed_store();
        let state = store.dispatch(&select(0, 0)).unwrap();
        assert_eq!(state.tiles[0][0].guess, Some(Team::Red));
        assert_eq!(state.current_team, Team::Red);
    }

    #[test]
    fn test_dispatch_wrong_guess_flips_turn() {
        let mut store = fixed_store();
        let state = store.dispatch(&select(2, 0)).unwrap();
        assert_eq!(state.tiles[2][0].guess, Some(Team::Red));
        assert_eq!(state.current_team, Team::Blue);
    }

    #[test]
    fn test_dispatch_rejects_reguess() {
        let mut store = fixed_store();
        store.dispatch(&select(0, 0)).unwrap();
        let before = store.state().clone();
        assert!(store.dispatch(&select(0, 0)).is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_dispatch_rejects_out_of_range() {
        let mut store = fixed_store();
        let before = store.state().clone();
        assert!(store.dispatch(&select(5, 0)).is_none());
        assert!(store.dispatch(&select(0, 99)).is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let mut store = fixed_store();
        let before = store.state().clone();
        assert!(store.dispatch(&ClientMessage::Unknown).is_none());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_new_game_draws_from_remainder() {
        let mut store = Store::new(word_pool(60)).unwrap();
        let previous_remainder: HashSet<String> =
            store.state().remaining_words.iter().cloned().collect();
        assert_eq!(previous_remainder.len(), 60 - TILE_COUNT);

        let state = store.dispatch(&ClientMessage::NewGameRequested).unwrap();
        assert_eq!(state.remaining_words.len(), 60 - 2 * TILE_COUNT);
        for tile in state.tiles.iter().flatten() {
            assert!(previous_remainder.contains(&tile.word));
        }
    }

    #[test]
    fn test_new_cards_discards_remainder() {
        let mut store = Store::new(word_pool(60)).unwrap();
        store.dispatch(&ClientMessage::NewGameRequested).unwrap();
        assert_eq!(store.state().remaining_words.len(), 60 - 2 * TILE_COUNT);

        // A fresh deal comes from the full original pool again.
        let state = store.dispatch(&ClientMessage::NewCardsRequested).unwrap();
        assert_eq!(state.remaining_words.len(), 60 - TILE_COUNT);
    }

    #[test]
    fn test_new_game_wraps_when_remainder_exhausted() {
        // 25-word pool: the first board consumes everything, so the next
        // requested game must come from the full pool again.
        let mut store = Store::new(word_pool(TILE_COUNT)).unwrap();
        assert!(store.state().remaining_words.is_empty());

        let state = store.dispatch(&ClientMessage::NewGameRequested).unwrap();
        assert_eq!(
            state.tiles.iter().flatten().count(),
            TILE_COUNT
        );
        assert!(state.remaining_words.is_empty());
    }

    #[test]
    fn test_score_visible_through_store() {
        let mut store = fixed_store();
        store.dispatch(&select(0, 0)).unwrap();
        assert_eq!(
            store.state().score(Team::Red),
            TeamScore { total: 9, won: 1 }
        );
        assert!(!store.state().is_game_over());
    }
}
