use thiserror::Error;

use crate::board::color::PlayerColor;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(
        "a game requires between 2 and {max} players, got {count}",
        max = PlayerColor::PALETTE.len()
    )]
    InvalidPlayerCount { count: usize },
}
