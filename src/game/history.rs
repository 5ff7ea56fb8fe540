use serde::{Deserialize, Serialize};

use crate::board::color::PlayerColor;
use crate::board::coordinate::Coordinate;

/// What a capture took off the board, kept for the history log.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CapturedInfo {
    pub name: String,
    pub value: u8,
    pub color: PlayerColor,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum HistoryAction {
    Placed {
        value: u8,
        position: Coordinate,
        captured: Option<CapturedInfo>,
    },
    Passed,
}

/// Immutable record of one action, tagged with the turn number and the
/// acting player.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub turn: u32,
    pub player_name: String,
    pub player_color: PlayerColor,
    pub action: HistoryAction,
}
