use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed palette of player colors. Seats are assigned colors in
/// `PALETTE` order, so the palette also caps the player count at six.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlayerColor {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
    Purple = 4,
    Orange = 5,
}

impl PlayerColor {
    pub const PALETTE: [PlayerColor; 6] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Orange,
    ];

    pub fn palette_index(self) -> usize {
        self as usize
    }

    /// Single-letter abbreviation used by the board display and the
    /// `card_grid!` test macro.
    pub fn letter(self) -> char {
        match self {
            PlayerColor::Red => 'r',
            PlayerColor::Blue => 'b',
            PlayerColor::Green => 'g',
            PlayerColor::Yellow => 'y',
            PlayerColor::Purple => 'p',
            PlayerColor::Orange => 'o',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::PALETTE
            .iter()
            .copied()
            .find(|color| color.letter() == letter)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Purple => "purple",
            PlayerColor::Orange => "orange",
        };
        write!(f, "{}", color_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_matches_indices() {
        for (i, color) in PlayerColor::PALETTE.iter().enumerate() {
            assert_eq!(color.palette_index(), i);
        }
    }

    #[test]
    fn test_letter_round_trip() {
        for &color in PlayerColor::PALETTE.iter() {
            assert_eq!(PlayerColor::from_letter(color.letter()), Some(color));
        }
        assert_eq!(PlayerColor::from_letter('x'), None);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(PlayerColor::Red.to_string(), "red");
        assert_eq!(PlayerColor::Orange.to_string(), "orange");
    }
}
