//! Cards, hands, and per-player decks.
//!
//! Each player owns 18 cards: two of each value 1 through 9. The opening
//! hand of three is dealt from the shuffled low cards (value <= 3) so no one
//! starts with unplayable heavy cards; the leftover low cards are merged
//! back with the rest and shuffled into the deck.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::player::PlayerId;

pub const MAX_HAND_SIZE: usize = 3;
pub const MAX_CARD_VALUE: u8 = 9;
pub const CARD_COPIES: usize = 2;

/// Opening hands are dealt only from cards of this value or lower.
pub const OPENING_VALUE_CEILING: u8 = 3;

/// A card as dealt. Immutable once created; capturing a placed card changes
/// ownership, never the card itself.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Card {
    pub value: u8,
    pub id: String,
}

/// An ordered hand of at most three cards, addressed by index for selection.
pub type Hand = SmallVec<[Card; MAX_HAND_SIZE]>;

/// A player's remaining cards, consumed front-to-back.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws the front card, or None if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Puts a card back at the front. Used by search internals to restore a
    /// scratch deck after a simulated draw.
    pub fn undraw(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Deals the opening hand and deck for one player.
pub fn deal<R: Rng>(player: PlayerId, rng: &mut R) -> (Hand, Deck) {
    let mut card_id_counter = 0;
    let mut full_set = Vec::with_capacity(MAX_CARD_VALUE as usize * CARD_COPIES);
    for value in 1..=MAX_CARD_VALUE {
        for _ in 0..CARD_COPIES {
            full_set.push(Card {
                value,
                id: format!("{}-card-{}", player, card_id_counter),
            });
            card_id_counter += 1;
        }
    }

    let (mut small_cards, other_cards): (Vec<Card>, Vec<Card>) = full_set
        .into_iter()
        .partition(|card| card.value <= OPENING_VALUE_CEILING);

    small_cards.shuffle(rng);
    let hand: Hand = small_cards.drain(..MAX_HAND_SIZE).collect();

    let mut deck_cards = small_cards;
    deck_cards.extend(other_cards);
    deck_cards.shuffle(rng);

    (hand, Deck::new(deck_cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deal_hand_is_three_low_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let (hand, deck) = deal(PlayerId(0), &mut rng);

        assert_eq!(hand.len(), MAX_HAND_SIZE);
        assert!(hand.iter().all(|card| card.value <= OPENING_VALUE_CEILING));
        assert_eq!(deck.len(), 15);
    }

    #[test]
    fn test_deal_preserves_the_full_card_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let (hand, deck) = deal(PlayerId(1), &mut rng);

        let mut counts = [0usize; MAX_CARD_VALUE as usize + 1];
        for card in hand.iter().chain(deck.cards().iter()) {
            counts[card.value as usize] += 1;
        }
        for value in 1..=MAX_CARD_VALUE as usize {
            assert_eq!(counts[value], CARD_COPIES, "value {} miscounted", value);
        }
    }

    #[test]
    fn test_card_ids_are_unique_and_scoped_to_player() {
        let mut rng = StdRng::seed_from_u64(3);
        let (hand, deck) = deal(PlayerId(2), &mut rng);

        let mut ids: Vec<&str> = hand
            .iter()
            .chain(deck.cards().iter())
            .map(|card| card.id.as_str())
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert!(ids.iter().all(|id| id.starts_with("player3-card-")));
    }

    #[test]
    fn test_draw_consumes_front_to_back() {
        let mut deck = Deck::new(vec![
            Card {
                value: 4,
                id: "player1-card-0".to_string(),
            },
            Card {
                value: 8,
                id: "player1-card-1".to_string(),
            },
        ]);

        assert_eq!(deck.draw().unwrap().value, 4);
        assert_eq!(deck.draw().unwrap().value, 8);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_undraw_restores_draw_order() {
        let card = Card {
            value: 6,
            id: "player1-card-9".to_string(),
        };
        let mut deck = Deck::new(vec![Card {
            value: 2,
            id: "player1-card-3".to_string(),
        }]);

        deck.undraw(card.clone());
        assert_eq!(deck.draw(), Some(card));
        assert_eq!(deck.draw().unwrap().value, 2);
    }
}
