use serde::{Deserialize, Serialize};
use std::fmt;

use super::BOARD_SIZE;

/// A zero-indexed `(x, y)` cell on the 9x9 board. `x` is the column,
/// `y` is the row, matching the layout the presentation layer renders.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

/// The eight king-step directions used for frontier adjacency.
pub const ADJACENT_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

impl Coordinate {
    /// The center cell, the only legal placement on turn 1.
    pub const CENTER: Coordinate = Coordinate { x: 4, y: 4 };

    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Coordinate> {
        let nx = self.x as i16 + dx as i16;
        let ny = self.y as i16 + dy as i16;
        if nx < 0 || nx >= BOARD_SIZE as i16 || ny < 0 || ny >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Coordinate {
            x: nx as u8,
            y: ny as u8,
        })
    }

    /// In-bounds 8-neighborhood of this cell.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        ADJACENT_DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev (king-move) distance from the center cell. Used by the
    /// search move-ordering heuristic.
    pub fn distance_from_center(self) -> u8 {
        let dx = (Self::CENTER.x as i16 - self.x as i16).abs();
        let dy = (Self::CENTER.y as i16 - self.y as i16).abs();
        dx.max(dy) as u8
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
