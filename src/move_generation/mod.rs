//! Board geometry: which cells a player may target this turn, and which
//! `(cell, hand index)` pairs are playable once capture rules are applied.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::card::Hand;
use crate::game::player::PlayerId;

/// A fully specified candidate move: where, and which card from the hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub target: Coordinate,
    pub hand_index: usize,
    pub value: u8,
}

/// Candidate move list, sized for the common case (frontier cells x 3 hand
/// cards).
pub type PlacementList = SmallVec<[Placement; 32]>;

/// Computes the frontier for the given turn and player.
///
/// Turn 1 of the whole game has exactly one legal move: the center cell.
/// Afterwards a cell is legal iff it is 8-adjacent to any occupied cell and
/// is either empty or holds an opponent's card; a player may never target
/// their own card. Cells are produced in row-major discovery order, which
/// keeps downstream tie-breaking deterministic.
pub fn compute_valid_moves(board: &Board, turn_number: u32, player: PlayerId) -> Vec<Coordinate> {
    if turn_number == 1 {
        return vec![Coordinate::CENTER];
    }

    let mut seen: FxHashSet<Coordinate> = FxHashSet::default();
    let mut moves = Vec::new();
    for (occupied, _) in board.occupied_cells() {
        for neighbor in occupied.neighbors() {
            let targetable = match board.get(neighbor) {
                None => true,
                Some(card) => card.owner != player,
            };
            if targetable && seen.insert(neighbor) {
                moves.push(neighbor);
            }
        }
    }
    moves
}

/// Enumerates every legal `(target, hand_index)` pair for the player:
/// frontier cells that are empty, or opponent-held with a strictly smaller
/// value than the candidate card.
pub fn enumerate_placements(
    board: &Board,
    turn_number: u32,
    player: PlayerId,
    hand: &Hand,
) -> PlacementList {
    let valid_moves = compute_valid_moves(board, turn_number, player);

    let mut placements = PlacementList::new();
    if valid_moves.is_empty() || hand.is_empty() {
        return placements;
    }

    for (hand_index, card) in hand.iter().enumerate() {
        for &target in valid_moves.iter() {
            let playable = match board.get(target) {
                None => true,
                Some(occupant) => occupant.owner != player && card.value > occupant.value,
            };
            if playable {
                placements.push(Placement {
                    target,
                    hand_index,
                    value: card.value,
                });
            }
        }
    }
    placements
}
