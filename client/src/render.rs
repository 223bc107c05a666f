//! Text rendering of a board snapshot.
//!
//! A pure function of the broadcast state. Revealed tiles show their
//! assignment tag; hidden tiles show only the word, since this viewer
//! plays the guessing side.

use shared::{Assignment, GameState, Team};

fn tag(assignment: Assignment) -> char {
    match assignment {
        Assignment::Red => 'r',
        Assignment::Blue => 'b',
        Assignment::Assassin => 'x',
        Assignment::Neutral => '-',
    }
}

fn team_name(team: Team) -> &'static str {
    match team {
        Team::Red => "red",
        Team::Blue => "blue",
    }
}

/// Renders the full board with score line and turn or game-over banner.
pub fn render(state: &GameState) -> String {
    let width = state
        .tiles
        .iter()
        .flatten()
        .map(|tile| tile.word.len())
        .max()
        .unwrap_or(0)
        + 5;

    let mut out = String::new();
    for row in &state.tiles {
        for tile in row {
            let cell = match tile.guess {
                Some(_) => format!("{}[{}]", tile.word, tag(tile.assignment)),
                None => tile.word.clone(),
            };
            out.push_str(&format!("{:<width$}", cell, width = width));
        }
        out.push('\n');
    }

    let red = state.score(Team::Red);
    let blue = state.score(Team::Blue);
    out.push_str(&format!(
        "red {}/{}  blue {}/{}\n",
        red.won, red.total, blue.won, blue.total
    ));

    if state.is_game_over() {
        out.push_str("GAME OVER\n");
    } else {
        out.push_str(&format!("{}'s turn\n", team_name(state.current_team)));
    }

    out
}
