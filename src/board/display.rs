use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    0  1  2  3  4  5  6  7  8")?;
        for y in 0..super::BOARD_SIZE {
            write!(f, " {} ", y)?;
            for x in 0..super::BOARD_SIZE {
                let coordinate = super::Coordinate::new(x as u8, y as u8);
                match self.get(coordinate) {
                    Some(card) => write!(f, " {}{}", card.color.letter(), card.value)?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `Board` from a 9x9 grid literal for tests and benches. Each cell
/// is either `.` (empty) or a color letter followed by a card value, e.g.
/// `r5` for a red 5. Owners are derived from palette order (red is player 1,
/// blue player 2, and so on).
///
/// ```
/// use quadline::card_grid;
///
/// let board = card_grid! {
///     . . . . . . . . .
///     . . . . . . . . .
///     . . . . . . . . .
///     . . . . . . . . .
///     . . . . r5 b3 . . .
///     . . . . . . . . .
///     . . . . . . . . .
///     . . . . . . . . .
///     . . . . . . . . .
/// };
/// assert!(!board.is_empty());
/// ```
#[macro_export]
macro_rules! card_grid {
    ($($cell:tt)*) => {{
        let tokens: Vec<&str> = vec![$(stringify!($cell)),*];
        assert_eq!(
            tokens.len(),
            $crate::board::BOARD_SIZE * $crate::board::BOARD_SIZE,
            "Invalid number of cells. Expected 81, got {}",
            tokens.len()
        );
        let mut board = $crate::board::Board::new();
        for (i, token) in tokens.iter().enumerate() {
            if *token == "." {
                continue;
            }
            let mut chars = token.chars();
            let color_letter = chars.next().expect("empty cell token");
            let value = chars
                .next()
                .and_then(|c| c.to_digit(10))
                .expect("cell token must be a color letter followed by a value") as u8;
            assert!((1..=9).contains(&value), "card value must be 1-9");
            let color = $crate::board::color::PlayerColor::from_letter(color_letter)
                .expect("invalid color letter in card_grid");
            let owner = $crate::game::player::PlayerId(color.palette_index() as u8);
            let x = (i % $crate::board::BOARD_SIZE) as u8;
            let y = (i / $crate::board::BOARD_SIZE) as u8;
            board.set(
                $crate::board::coordinate::Coordinate::new(x, y),
                Some($crate::board::PlacedCard {
                    value,
                    id: format!("{}-grid-{}", color, i),
                    color,
                    owner,
                }),
            );
        }
        board
    }};
}
