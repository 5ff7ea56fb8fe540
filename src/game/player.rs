use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::color::PlayerColor;

/// A player's seat index. Turn order is seat order, and seats double as
/// indices into the per-player hands and decks.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.0 + 1)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub is_computer: bool,
    /// Derived value: the sum of board cell values this player owns,
    /// recomputed by a full rescan after every placement.
    pub score: u32,
}
