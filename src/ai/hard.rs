//! The full-strength policy: immediate wins and blocks are taken without
//! searching; everything else goes through the iterative-deepening
//! alpha-beta search. If the search produces nothing (or runs out of time
//! before depth 1), the greedy policy stands in.

use crate::game::state::GameState;
use crate::move_generation::Placement;
use crate::search::{search_best_placement, SearchContext};

use super::easy;

pub fn choose(state: &GameState) -> Option<Placement> {
    choose_with_context(state, &mut SearchContext::new())
}

/// Like `choose`, but with caller-supplied search limits. The context also
/// reports statistics for the move it produced.
pub fn choose_with_context(
    state: &GameState,
    context: &mut SearchContext,
) -> Option<Placement> {
    if let Some(win) = super::find_immediate_win(state) {
        return Some(win);
    }
    if let Some(block) = super::find_blocking_move(state) {
        return Some(block);
    }
    search_best_placement(context, state).or_else(|| easy::choose(state))
}
