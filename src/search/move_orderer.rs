//! Move ordering for the alpha-beta search.
//!
//! Candidates are sorted by a cheap static heuristic so that likely-best
//! moves are searched first and produce early cutoffs. Between deepening
//! iterations, the previous iteration's best move is rotated to the front,
//! which is where most of the pruning benefit comes from.

use crate::board::Board;
use crate::move_generation::Placement;

const CAPTURE_BONUS: i32 = 100;
const CENTER_STEP_BONUS: i32 = 10;
const MAX_CENTER_DISTANCE: i32 = 4;

/// Sorts placements best-first. The sort is stable, so equal-scoring moves
/// keep their row-major generation order and search stays deterministic.
pub fn order_placements(placements: &mut [Placement], board: &Board) {
    placements.sort_by_key(|placement| std::cmp::Reverse(heuristic(placement, board)));
}

/// Captures first (cheapest winning card preferred), then proximity to the
/// center, then raw card value.
fn heuristic(placement: &Placement, board: &Board) -> i32 {
    let mut score = 0;
    if let Some(occupant) = board.get(placement.target) {
        score += CAPTURE_BONUS + occupant.value as i32 - placement.value as i32;
    }
    score += (MAX_CENTER_DISTANCE - placement.target.distance_from_center() as i32)
        * CENTER_STEP_BONUS;
    score + placement.value as i32
}

/// Moves `best` to the front of the list, preserving the relative order of
/// everything before it.
pub fn promote_to_front(placements: &mut [Placement], best: Placement) {
    if let Some(position) = placements.iter().position(|&p| p == best) {
        placements[..=position].rotate_right(1);
    }
}
