//! One-ply policy: win now if possible, block an imminent opponent win,
//! otherwise take the placement with the best static evaluation.

use crate::evaluate;
use crate::game::state::GameState;
use crate::move_generation::{enumerate_placements, Placement};

pub fn choose(state: &GameState) -> Option<Placement> {
    if let Some(win) = super::find_immediate_win(state) {
        return Some(win);
    }
    if let Some(block) = super::find_blocking_move(state) {
        return Some(block);
    }

    let current = state.current_player();
    let placements = enumerate_placements(
        &state.board,
        state.turn_number,
        current.id,
        state.hand(current.id),
    );
    if placements.is_empty() {
        return None;
    }

    let mut scratch = state.board.clone();
    let mut best = placements[0];
    let mut best_score = f64::NEG_INFINITY;
    for &placement in placements.iter() {
        let score = super::with_trial_placement(&mut scratch, current, &placement, |board| {
            evaluate::score(board, current.id)
        });
        if score > best_score {
            best_score = score;
            best = placement;
        }
    }
    Some(best)
}
