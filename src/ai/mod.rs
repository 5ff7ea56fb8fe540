//! Computer opponents.
//!
//! Three policies share a common preface: Medium and Hard first take any
//! immediate win, then block the first opponent win they can reach. Easy is
//! pure greed, Medium is a one-ply evaluation, and Hard runs the
//! iterative-deepening search in `crate::search`.

pub mod easy;
pub mod hard;
pub mod medium;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, PlacedCard};
use crate::game::player::Player;
use crate::game::state::GameState;
use crate::move_generation::{enumerate_placements, Placement};

/// Medium pauses briefly before answering so its moves read as considered
/// rather than instantaneous.
pub const MEDIUM_THINK_DELAY: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
#[error("unknown difficulty: {0} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Picks a placement for the current player at the state's difficulty.
/// Returns None when the player has no legal placement and must pass.
pub fn choose_move(state: &GameState) -> Option<Placement> {
    match state.difficulty {
        Difficulty::Easy => easy::choose(state),
        Difficulty::Medium => {
            thread::sleep(MEDIUM_THINK_DELAY);
            medium::choose(state)
        }
        Difficulty::Hard => hard::choose(state),
    }
}

/// Temporarily applies a placement to `board`, runs `f` against the result,
/// and restores the previous occupant. The trial card carries no identity;
/// only ownership and value matter to the callers.
pub(crate) fn with_trial_placement<T>(
    board: &mut Board,
    player: &Player,
    placement: &Placement,
    f: impl FnOnce(&Board) -> T,
) -> T {
    let displaced = board.set(
        placement.target,
        Some(PlacedCard {
            value: placement.value,
            id: String::new(),
            color: player.color,
            owner: player.id,
        }),
    );
    let result = f(board);
    board.set(placement.target, displaced);
    result
}

pub(crate) fn placement_wins(board: &mut Board, player: &Player, placement: &Placement) -> bool {
    with_trial_placement(board, player, placement, |b| {
        b.has_four_in_a_row(player.id)
    })
}

/// The current player's first placement that completes four-in-a-row, in
/// hand-then-row-major order.
pub(crate) fn find_immediate_win(state: &GameState) -> Option<Placement> {
    let current = state.current_player();
    let placements = enumerate_placements(
        &state.board,
        state.turn_number,
        current.id,
        state.hand(current.id),
    );

    let mut scratch = state.board.clone();
    placements
        .into_iter()
        .find(|placement| placement_wins(&mut scratch, current, placement))
}

/// Scans opponents in seat order for a placement that would win them the
/// game next turn, and returns the current player's first legal placement
/// onto that cell. None when no threat exists or none can be reached.
pub(crate) fn find_blocking_move(state: &GameState) -> Option<Placement> {
    let current = state.current_player();
    let my_placements = enumerate_placements(
        &state.board,
        state.turn_number,
        current.id,
        state.hand(current.id),
    );
    if my_placements.is_empty() {
        return None;
    }

    let mut scratch = state.board.clone();
    let player_count = state.players.len();
    for offset in 1..player_count {
        let seat = (state.current_player_index + offset) % player_count;
        let opponent = &state.players[seat];
        // The opponent's reply lands on the next turn. The turn number only
        // gates the turn-1 center rule, which can never hold a threat.
        let threats = enumerate_placements(
            &state.board,
            state.turn_number + 1,
            opponent.id,
            state.hand(opponent.id),
        );
        for threat in threats.iter() {
            if !placement_wins(&mut scratch, opponent, threat) {
                continue;
            }
            if let Some(block) = my_placements
                .iter()
                .find(|placement| placement.target == threat.target)
            {
                return Some(*block);
            }
        }
    }
    None
}
