use std::collections::{HashSet, VecDeque};
use std::collections::vec_deque;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, FULL_DECK_SIZE, full_deck};
use crate::error::DeckError;

/// Ordered pile of cards. Index 0 is the top of the deck.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a deck from cards listed top to bottom.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Replaces the contents with the full 52-card set in enumeration order.
    ///
    /// Any cards already present are discarded first, so this always yields
    /// exactly one card per (rank, suit).
    pub fn initialize_full(&mut self) {
        self.cards.clear();
        self.cards.reserve(FULL_DECK_SIZE);
        self.cards.extend(full_deck());
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Consumes the deck and returns `[0, n/2)` and `[n/2, n)` in original order.
    pub fn split_in_half(mut self) -> (Deck, Deck) {
        let half = self.cards.len() / 2;
        let second = self.cards.split_off(half);
        (Deck { cards: self.cards }, Deck { cards: second })
    }

    /// Removes the top card. `None` signals an exhausted deck.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Appends cards to the bottom, keeping their relative order.
    pub fn push_bottom_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Moves every card out of the deck, top first.
    pub fn drain_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

/// Checks that no (rank, suit) pair appears twice.
pub fn ensure_unique<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), DeckError> {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(card.face()) {
            return Err(DeckError::DuplicateCard(*card));
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
