use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::board::color::PlayerColor;
use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::card::{self, Deck, Hand};
use crate::game::error::GameError;
use crate::game::history::HistoryEntry;
use crate::game::player::{Player, PlayerId};
use crate::move_generation::compute_valid_moves;

/// The card the current player has picked from their hand, pending
/// placement. Transient; cleared by every transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SelectedCard {
    pub hand_index: usize,
    pub value: u8,
}

/// The single aggregate of game state. Created once per game and thereafter
/// produced only by the pure transition functions in `game::transitions`;
/// callers never observe in-place mutation.
///
/// `valid_moves` is a cache for the *current* player and turn only, and is
/// recomputed whenever the board, turn number, or current player changes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Ordered by seat; turn order is array order.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// Indexed by seat, parallel to `players`.
    pub hands: Vec<Hand>,
    pub decks: Vec<Deck>,
    pub selected_card: Option<SelectedCard>,
    pub is_game_over: bool,
    /// None means a draw once `is_game_over` is set.
    pub winner: Option<PlayerId>,
    pub history: Vec<HistoryEntry>,
    pub message: String,
    /// Starts at 1 and increments on every turn advance, shared by all
    /// players (it is not a round counter).
    pub turn_number: u32,
    pub difficulty: Difficulty,
    pub valid_moves: Vec<Coordinate>,
}

impl GameState {
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn hand(&self, id: PlayerId) -> &Hand {
        &self.hands[id.index()]
    }

    pub fn deck(&self, id: PlayerId) -> &Deck {
        &self.decks[id.index()]
    }

    /// Accessor over the cached frontier for the current player/turn.
    pub fn valid_moves(&self) -> &[Coordinate] {
        &self.valid_moves
    }

    /// Selects a card from the current player's hand by index, returning
    /// the updated state, or None if the index is out of range.
    pub fn select_card(&self, hand_index: usize) -> Option<GameState> {
        let hand = self.hand(self.current_player().id);
        let card = hand.get(hand_index)?;
        let mut next = self.clone();
        next.selected_card = Some(SelectedCard {
            hand_index,
            value: card.value,
        });
        Some(next)
    }
}

/// Creates the initial state for a new game. Human players come first in
/// seat order, followed by the computer players; colors are assigned in
/// palette order.
pub fn initialize_game(
    player_names: &[String],
    num_computers: usize,
    difficulty: Difficulty,
) -> Result<GameState, GameError> {
    initialize_game_with_rng(
        player_names,
        num_computers,
        difficulty,
        &mut StdRng::from_entropy(),
    )
}

/// Like `initialize_game`, but with a caller-supplied RNG so tests can make
/// the deal deterministic.
pub fn initialize_game_with_rng<R: Rng>(
    player_names: &[String],
    num_computers: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let num_humans = player_names.len();
    let total_players = num_humans + num_computers;
    if total_players < 2 || total_players > PlayerColor::PALETTE.len() {
        return Err(GameError::InvalidPlayerCount {
            count: total_players,
        });
    }

    let mut players = Vec::with_capacity(total_players);
    let mut hands = Vec::with_capacity(total_players);
    let mut decks = Vec::with_capacity(total_players);
    for i in 0..total_players {
        let id = PlayerId(i as u8);
        let is_computer = i >= num_humans;
        let name = if is_computer {
            format!("Comp {} ({})", i - num_humans + 1, difficulty)
        } else {
            player_names[i].clone()
        };
        players.push(Player {
            id,
            name,
            color: PlayerColor::PALETTE[i],
            is_computer,
            score: 0,
        });

        let (hand, deck) = card::deal(id, rng);
        hands.push(hand);
        decks.push(deck);
    }

    let board = Board::new();
    let valid_moves = compute_valid_moves(&board, 1, PlayerId(0));
    let message = format!("{}, it's your turn!", players[0].name);

    Ok(GameState {
        board,
        players,
        current_player_index: 0,
        hands,
        decks,
        selected_card: None,
        is_game_over: false,
        winner: None,
        history: Vec::new(),
        message,
        turn_number: 1,
        difficulty,
        valid_moves,
    })
}
