//! Game model: teams, tiles, board generation and the pure state transitions.
//!
//! A `GameState` is an immutable value. Transitions never edit a state in
//! place; they clone it and return the successor, so any previously held
//! reference remains a valid historical snapshot. The state is small (25
//! tiles) so the clone is cheap and keeps broadcast code trivially safe
//! against concurrent reads.

use crate::{
    ASSASSIN_TILES, FIRST_TEAM_TILES, GRID_SIZE, NEUTRAL_TILES, SECOND_TEAM_TILES, TILE_COUNT,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two playing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The team whose turn comes after this one.
    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// Hidden ownership of a tile, fixed when the board is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
    Red,
    Blue,
    Assassin,
    Neutral,
}

impl From<Team> for Assignment {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => Assignment::Red,
            Team::Blue => Assignment::Blue,
        }
    }
}

/// A single board square.
///
/// `guess` starts as `None` and is set at most once, to the team that
/// selected the tile. A tile with a guess is permanently locked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub word: String,
    pub assignment: Assignment,
    pub guess: Option<Team>,
}

/// Revealed-tile tally for one team, for score displays and game-over checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamScore {
    /// Tiles on the board assigned to the team.
    pub total: usize,
    /// Of those, tiles that have been revealed by any guess.
    pub won: usize,
}

/// The complete authoritative state of one game.
///
/// Field names serialize camelCase to match the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_team: Team,
    /// Words not used on any board yet; the next game draws from these.
    pub remaining_words: Vec<String>,
    /// 5x5 grid, row-major.
    pub tiles: Vec<Vec<Tile>>,
}

/// Board generation failure: the supplied word pool cannot fill a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("word pool holds {available} words but a full board needs {}", TILE_COUNT)]
    PoolTooSmall { available: usize },
}

/// Generates a fresh board from `pool`.
///
/// Draws 25 words uniformly without replacement and places them on the
/// grid row-major in drawn order. The starting team is a coin flip and
/// receives 9 tiles; the other team gets 8, plus 1 assassin and 7 neutral
/// tiles. Assignment labels are shuffled independently of the words, so
/// every drawn word has equal probability of landing in every category.
///
/// The returned state's `remaining_words` is `pool` minus the 25 drawn
/// words. Fails if the pool holds fewer than 25 words.
pub fn new_game<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Result<GameState, BoardError> {
    if pool.len() < TILE_COUNT {
        return Err(BoardError::PoolTooSmall {
            available: pool.len(),
        });
    }

    let starting_team = if rng.gen_bool(0.5) {
        Team::Red
    } else {
        Team::Blue
    };

    let mut deck: Vec<String> = pool.to_vec();
    deck.shuffle(rng);
    let remaining_words = deck.split_off(TILE_COUNT);
    let chosen = deck;

    let mut assignments: Vec<Assignment> = Vec::with_capacity(TILE_COUNT);
    assignments.extend(std::iter::repeat(Assignment::from(starting_team)).take(FIRST_TEAM_TILES));
    assignments.extend(
        std::iter::repeat(Assignment::from(starting_team.opponent())).take(SECOND_TEAM_TILES),
    );
    assignments.extend(std::iter::repeat(Assignment::Assassin).take(ASSASSIN_TILES));
    assignments.extend(std::iter::repeat(Assignment::Neutral).take(NEUTRAL_TILES));
    assignments.shuffle(rng);

    let mut drawn = chosen.into_iter().zip(assignments);
    let mut tiles: Vec<Vec<Tile>> = Vec::with_capacity(GRID_SIZE);
    for _ in 0..GRID_SIZE {
        let row = drawn
            .by_ref()
            .take(GRID_SIZE)
            .map(|(word, assignment)| Tile {
                word,
                assignment,
                guess: None,
            })
            .collect();
        tiles.push(row);
    }

    Ok(GameState {
        current_team: starting_team,
        remaining_words,
        tiles,
    })
}

impl GameState {
    /// Applies a tile selection by the current team.
    ///
    /// Returns `None` when the selection is illegal: `row`/`column` outside
    /// the grid, or the tile already carries a guess. A legal selection
    /// marks the tile with the current team's guess; if the tile was not
    /// assigned to the current team (other team, neutral or assassin), the
    /// turn additionally ends.
    pub fn tile_selected(&self, row: usize, column: usize) -> Option<GameState> {
        let tile = self.tiles.get(row)?.get(column)?;
        if tile.guess.is_some() {
            return None;
        }
        let wrong_guess = tile.assignment != Assignment::from(self.current_team);

        let mut next = self.clone();
        next.tiles[row][column].guess = Some(self.current_team);
        if wrong_guess {
            Some(next.turn_ended())
        } else {
            Some(next)
        }
    }

    /// Hands the turn to the other team; no other field changes.
    pub fn turn_ended(&self) -> GameState {
        let mut next = self.clone();
        next.current_team = self.current_team.opponent();
        next
    }

    /// Revealed-tile tally for `team`.
    pub fn score(&self, team: Team) -> TeamScore {
        let assignment = Assignment::from(team);
        let mut score = TeamScore { total: 0, won: 0 };
        for tile in self.tiles.iter().flatten() {
            if tile.assignment == assignment {
                score.total += 1;
                if tile.guess.is_some() {
                    score.won += 1;
                }
            }
        }
        score
    }

    /// The game is over once the assassin is revealed or either team's
    /// tiles are all revealed. This is a derived signal for presentation;
    /// the transitions themselves keep accepting actions regardless.
    pub fn is_game_over(&self) -> bool {
        let assassin_revealed = self
            .tiles
            .iter()
            .flatten()
            .any(|tile| tile.assignment == Assignment::Assassin && tile.guess.is_some());
        if assassin_revealed {
            return true;
        }

        [Team::Red, Team::Blue].into_iter().any(|team| {
            let score = self.score(team);
            score.won == score.total
        })
    }
}
