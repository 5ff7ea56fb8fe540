//! Parses turn commands typed at the terminal.

use std::io;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PLACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^place\s+([0-8])\s+([0-8])\s+([1-3])$").unwrap());

/// A parsed turn command. `Place` carries the 0-based hand index even
/// though the typed form is 1-based.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveInput {
    /// `place X Y N`: place the Nth hand card at column X, row Y.
    Place { x: u8, y: u8, hand_index: usize },
    Pass,
    Quit,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid input: {0} (try `place X Y N`, `pass`, or `quit`)")]
    Invalid(String),
}

pub fn parse_input(raw: &str) -> Result<MoveInput, InputError> {
    let trimmed = raw.trim();
    match trimmed {
        "pass" => return Ok(MoveInput::Pass),
        "quit" | "exit" => return Ok(MoveInput::Quit),
        _ => {}
    }

    let caps = PLACE_RE
        .captures(trimmed)
        .ok_or_else(|| InputError::Invalid(trimmed.to_string()))?;
    // The regex admits single digits only, so these parses cannot fail.
    let x: u8 = caps[1].parse().unwrap();
    let y: u8 = caps[2].parse().unwrap();
    let slot: usize = caps[3].parse().unwrap();

    Ok(MoveInput::Place {
        x,
        y,
        hand_index: slot - 1,
    })
}

/// Reads one line from stdin and parses it.
pub fn read_move() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    parse_input(&input)
}
