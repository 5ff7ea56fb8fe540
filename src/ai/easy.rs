//! The greedy policy: take the richest capture available, otherwise play
//! the highest card. No lookahead at all, so it walks into traps.

use std::cmp::Reverse;

use crate::board::Board;
use crate::game::state::GameState;
use crate::move_generation::{enumerate_placements, Placement};

const CAPTURE_BONUS: i32 = 100;

pub fn choose(state: &GameState) -> Option<Placement> {
    let current = state.current_player();
    let mut placements = enumerate_placements(
        &state.board,
        state.turn_number,
        current.id,
        state.hand(current.id),
    );
    if placements.is_empty() {
        return None;
    }

    placements.sort_by_key(|placement| Reverse(greedy_score(placement, &state.board)));
    Some(placements[0])
}

/// Captured value dominates, played value breaks ties. Stable sort keeps
/// generation order among full ties so the choice is deterministic.
fn greedy_score(placement: &Placement, board: &Board) -> i32 {
    let mut score = 0;
    if let Some(occupant) = board.get(placement.target) {
        score += CAPTURE_BONUS + occupant.value as i32;
    }
    score + placement.value as i32
}
