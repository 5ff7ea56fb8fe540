//! Static board evaluation from one player's perspective.
//!
//! Three components are combined: material (own minus opponents' card
//! values), position (a fixed center-peaked weight table), and line threats
//! (every 4-window on the board, scored for how close either side is to
//! completing it). Threats carry most of the weight so the AI both builds
//! lines and blocks them.

use crate::board::coordinate::Coordinate;
use crate::board::{Board, PlacedCard, BOARD_SIZE, LINE_LENGTH};
use crate::evaluate::evaluation_tables::POSITION_BONUS;
use crate::game::player::PlayerId;

mod evaluation_tables;

pub const MATERIAL_WEIGHT: f64 = 1.0;
pub const POSITIONAL_WEIGHT: f64 = 1.0;
pub const THREAT_WEIGHT: f64 = 7.5;

// Window scores. A completed window dwarfs any material difference, and an
// opponent three-in-a-row is nearly as urgent so blocking dominates quiet
// development moves.
pub const WIN_SCORE: f64 = 10_000.0;
const IMMINENT_WIN_BLOCK_SCORE: f64 = 9_000.0;
const THREE_IN_A_ROW_SCORE: f64 = 500.0;
const TWO_IN_A_ROW_SCORE: f64 = 50.0;
const OPEN_ENDS_MULTIPLIER: f64 = 2.5;

/// Scores the board from `perspective`'s point of view. Higher is better
/// for that player.
pub fn score(board: &Board, perspective: PlayerId) -> f64 {
    let mut material = 0.0;
    let mut positional = 0.0;
    for (coordinate, card) in board.occupied_cells() {
        let sign = if card.owner == perspective { 1.0 } else { -1.0 };
        material += sign * card.value as f64;
        positional += sign * POSITION_BONUS[coordinate.y as usize][coordinate.x as usize];
    }

    let mut threat = 0.0;
    for_each_window(board, |window| {
        threat += evaluate_window(&window, perspective);
    });

    material * MATERIAL_WEIGHT + positional * POSITIONAL_WEIGHT + threat * THREAT_WEIGHT
}

/// Scores a single 4-window. Mixed windows are dead and score zero; one-
/// sided windows score by how full they are, with a bonus for high card
/// values and for two-in-a-rows whose both ends are open.
fn evaluate_window(window: &[Option<&PlacedCard>; LINE_LENGTH], perspective: PlayerId) -> f64 {
    let mut own_count = 0usize;
    let mut own_sum = 0u32;
    let mut opponent_count = 0usize;
    let mut opponent_sum = 0u32;
    for cell in window.iter().flatten() {
        if cell.owner == perspective {
            own_count += 1;
            own_sum += cell.value as u32;
        } else {
            opponent_count += 1;
            opponent_sum += cell.value as u32;
        }
    }

    if own_count > 0 && opponent_count > 0 {
        return 0.0;
    }

    let empty_count = LINE_LENGTH - own_count - opponent_count;
    let open_ends = window[0].is_none() && window[LINE_LENGTH - 1].is_none();

    if own_count > 0 {
        let avg_value = own_sum as f64 / own_count as f64;
        match (own_count, empty_count) {
            (4, _) => WIN_SCORE,
            (3, 1) => THREE_IN_A_ROW_SCORE + avg_value * 10.0,
            (2, 2) => {
                let bonus = if open_ends { OPEN_ENDS_MULTIPLIER } else { 1.0 };
                TWO_IN_A_ROW_SCORE * bonus + avg_value * 5.0
            }
            _ => 0.0,
        }
    } else if opponent_count > 0 {
        let avg_value = opponent_sum as f64 / opponent_count as f64;
        match (opponent_count, empty_count) {
            (4, _) => -WIN_SCORE,
            (3, 1) => -(IMMINENT_WIN_BLOCK_SCORE + avg_value * 10.0),
            (2, 2) => {
                let penalty = if open_ends { OPEN_ENDS_MULTIPLIER } else { 1.0 };
                -(TWO_IN_A_ROW_SCORE * penalty + avg_value * 5.0)
            }
            _ => 0.0,
        }
    } else {
        0.0
    }
}

/// Visits every 4-window: rows, columns, and both diagonals, each starting
/// offset exactly once.
fn for_each_window<F: FnMut([Option<&PlacedCard>; LINE_LENGTH])>(board: &Board, mut f: F) {
    let size = BOARD_SIZE as i16;
    let span = LINE_LENGTH as i16 - 1;
    // (start range x, start range y, step)
    let scans: [(std::ops::Range<i16>, std::ops::Range<i16>, (i16, i16)); 4] = [
        (0..size - span, 0..size, (1, 0)),
        (0..size, 0..size - span, (0, 1)),
        (0..size - span, 0..size - span, (1, 1)),
        (span..size, 0..size - span, (-1, 1)),
    ];

    for (x_range, y_range, (dx, dy)) in scans.iter().cloned() {
        for y in y_range {
            for x in x_range.clone() {
                let mut window: [Option<&PlacedCard>; LINE_LENGTH] = [None; LINE_LENGTH];
                for (step, slot) in window.iter_mut().enumerate() {
                    let cx = x + dx * step as i16;
                    let cy = y + dy * step as i16;
                    *slot = board.get(Coordinate::new(cx as u8, cy as u8));
                }
                f(window);
            }
        }
    }
}
