use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const RANK_COUNT: usize = 13;
pub const SUIT_COUNT: usize = 4;
pub const FULL_DECK_SIZE: usize = RANK_COUNT * SUIT_COUNT;

/// Card rank, ordered from lowest to highest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Upper-case name, e.g. `QUEEN`.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }

    /// Short index label used by the compact card form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Card suit. Suits carry no ordering in War.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Heart => "HEART",
            Suit::Diamond => "DIAMOND",
            Suit::Club => "CLUB",
            Suit::Spade => "SPADE",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// A playing card.
///
/// Equality and ordering look at the rank only: `KING of HEART == KING of CLUB`.
/// Use [`Card::face`] when the exact (rank, suit) identity matters.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Full identity of the card, suit included.
    #[inline]
    pub fn face(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Compact form such as `10♦`.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Builds the 52-card set in deterministic rank-major order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(FULL_DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_every_face_once() {
        let deck = full_deck();
        assert_eq!(deck.len(), FULL_DECK_SIZE);
        let faces: HashSet<_> = deck.iter().map(Card::face).collect();
        assert_eq!(faces.len(), FULL_DECK_SIZE);
        assert_eq!(deck[0].face(), (Rank::Two, Suit::Heart));
        assert_eq!(deck[51].face(), (Rank::Ace, Suit::Spade));
    }

    #[test]
    fn ranks_are_strictly_ascending() {
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            let low = Card::new(pair[0], Suit::Spade);
            let high = Card::new(pair[1], Suit::Heart);
            assert_eq!(low.cmp(&high), Ordering::Less);
            assert_eq!(high.cmp(&low), Ordering::Greater);
        }
    }

    #[test]
    fn comparison_is_antisymmetric_and_ignores_suit() {
        let deck = full_deck();
        for a in &deck {
            for b in &deck {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                assert_eq!(a.cmp(b), a.rank().cmp(&b.rank()));
            }
        }
        let king_heart = Card::new(Rank::King, Suit::Heart);
        let king_club = Card::new(Rank::King, Suit::Club);
        assert_eq!(king_heart, king_club);
        assert_ne!(king_heart.face(), king_club.face());
    }

    #[test]
    fn display_uses_rank_and_suit_names() {
        let card = Card::new(Rank::Ten, Suit::Diamond);
        assert_eq!(card.to_string(), "TEN of DIAMOND");
        assert_eq!(card.short(), "10♦");
    }
}
