pub mod color;
pub mod coordinate;

mod display;

use serde::{Deserialize, Serialize};

use crate::game::player::PlayerId;
use color::PlayerColor;
use coordinate::Coordinate;

pub const BOARD_SIZE: usize = 9;

/// Number of consecutive same-owner cells that wins the game.
pub const LINE_LENGTH: usize = 4;

/// A card that has been placed on the board. The card's value and identity
/// are fixed at deal time; `color` and `owner` track the current owner and
/// change when the position is captured.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PlacedCard {
    pub value: u8,
    pub id: String,
    pub color: PlayerColor,
    pub owner: PlayerId,
}

/// The fixed 9x9 grid. Cells are mutated only through the placement
/// transition; the board is never resized.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<PlacedCard>; BOARD_SIZE]; BOARD_SIZE],
}

/// Line directions scanned for four-in-a-row: right, down, down-right,
/// down-left. Every 4-window is covered exactly once by scanning each
/// starting cell in each direction.
const LINE_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&PlacedCard> {
        self.cells[coordinate.y as usize][coordinate.x as usize].as_ref()
    }

    /// Replaces the cell contents, returning the previous occupant. This is
    /// the single mutation point; placement, capture, and the AI's scoped
    /// mutate-and-restore blocks all go through it.
    pub fn set(
        &mut self,
        coordinate: Coordinate,
        cell: Option<PlacedCard>,
    ) -> Option<PlacedCard> {
        std::mem::replace(
            &mut self.cells[coordinate.y as usize][coordinate.x as usize],
            cell,
        )
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_cells().next().is_none()
    }

    /// All occupied cells in row-major order. Row-major iteration keeps
    /// every consumer (frontier computation, score rescans) deterministic.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coordinate, &PlacedCard)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.as_ref()
                    .map(|card| (Coordinate::new(x as u8, y as u8), card))
            })
        })
    }

    fn owner_at(&self, x: i16, y: i16) -> Option<PlayerId> {
        if x < 0 || x >= BOARD_SIZE as i16 || y < 0 || y >= BOARD_SIZE as i16 {
            return None;
        }
        self.cells[y as usize][x as usize]
            .as_ref()
            .map(|card| card.owner)
    }

    /// Returns true if `owner` holds four consecutive cells in any row,
    /// column, or diagonal.
    pub fn has_four_in_a_row(&self, owner: PlayerId) -> bool {
        for y in 0..BOARD_SIZE as i16 {
            for x in 0..BOARD_SIZE as i16 {
                if self.owner_at(x, y) != Some(owner) {
                    continue;
                }
                for &(dx, dy) in LINE_DIRECTIONS.iter() {
                    let complete = (1..LINE_LENGTH as i16).all(|step| {
                        self.owner_at(x + dx as i16 * step, y + dy as i16 * step) == Some(owner)
                    });
                    if complete {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_grid;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_occupied(Coordinate::CENTER));
    }

    #[test]
    fn test_set_returns_previous_occupant() {
        let mut board = Board::new();
        let card = PlacedCard {
            value: 5,
            id: "player1-card-0".to_string(),
            color: PlayerColor::Red,
            owner: PlayerId(0),
        };
        assert_eq!(board.set(Coordinate::CENTER, Some(card.clone())), None);
        let displaced = board.set(Coordinate::CENTER, None);
        assert_eq!(displaced, Some(card));
        assert!(board.is_empty());
    }

    #[test]
    fn test_four_in_a_row_horizontal() {
        let board = card_grid! {
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . r1 r2 r3 r4 . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(board.has_four_in_a_row(PlayerId(0)));
        assert!(!board.has_four_in_a_row(PlayerId(1)));
    }

    #[test]
    fn test_four_in_a_row_vertical_and_diagonals() {
        let vertical = card_grid! {
            . . . . . . . . .
            . . b1 . . . . . .
            . . b2 . . . . . .
            . . b3 . . . . . .
            . . b4 . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(vertical.has_four_in_a_row(PlayerId(1)));

        let down_right = card_grid! {
            . . . . . . . . .
            . g1 . . . . . . .
            . . g2 . . . . . .
            . . . g3 . . . . .
            . . . . g4 . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(down_right.has_four_in_a_row(PlayerId(2)));

        let down_left = card_grid! {
            . . . . . . . . .
            . . . . . y1 . . .
            . . . . y2 . . . .
            . . . y3 . . . . .
            . . y4 . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(down_left.has_four_in_a_row(PlayerId(3)));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = card_grid! {
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . r1 r2 b9 r4 r5 . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(!board.has_four_in_a_row(PlayerId(0)));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = card_grid! {
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . r1 r2 r3 . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        assert!(!board.has_four_in_a_row(PlayerId(0)));
    }
}
