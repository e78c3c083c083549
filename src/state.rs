use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::round::{Outcome, Side};

pub const DEFAULT_WAR_STAKES: usize = 2;

/// Position of the round state machine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Fresh game, nothing dealt yet.
    Idle,
    /// At least one battle has been decided; the next advance deals.
    RoundInProgress,
    /// A tie is being escalated.
    WarChain,
    GameOver { winner: Option<Side> },
}

/// Everything a running game owns.
///
/// Only the round logic in [`crate::game`] mutates the decks after setup.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) player_name: String,
    pub(crate) pool: Deck,
    pub(crate) player: Deck,
    pub(crate) opponent: Deck,
    pub(crate) last_player_card: Option<Card>,
    pub(crate) last_opponent_card: Option<Card>,
    pub(crate) war_pending: bool,
    pub(crate) last_outcome: Option<Outcome>,
    pub(crate) phase: Phase,
    pub(crate) war_stakes: usize,
    pub(crate) war_staged: usize,
}

impl GameState {
    pub(crate) fn new(player_name: String, player: Deck, opponent: Deck, war_stakes: usize) -> Self {
        Self {
            player_name,
            pool: Deck::new(),
            player,
            opponent,
            last_player_card: None,
            last_opponent_card: None,
            war_pending: false,
            last_outcome: None,
            phase: Phase::Idle,
            war_stakes,
            war_staged: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn player_cards(&self) -> usize {
        self.player.len()
    }

    pub fn opponent_cards(&self) -> usize {
        self.opponent.len()
    }

    pub fn pool_cards(&self) -> usize {
        self.pool.len()
    }

    pub fn player_deck(&self) -> &Deck {
        &self.player
    }

    pub fn opponent_deck(&self) -> &Deck {
        &self.opponent
    }

    pub fn pool(&self) -> &Deck {
        &self.pool
    }

    pub fn last_player_card(&self) -> Option<Card> {
        self.last_player_card
    }

    pub fn last_opponent_card(&self) -> Option<Card> {
        self.last_opponent_card
    }

    pub fn war_pending(&self) -> bool {
        self.war_pending
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn war_stakes(&self) -> usize {
        self.war_stakes
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Total number of cards across the three decks.
    pub fn total_cards(&self) -> usize {
        self.pool.len() + self.player.len() + self.opponent.len()
    }

    pub fn view(&self) -> GameStateView {
        GameStateView {
            player_name: self.player_name.clone(),
            phase: self.phase,
            player_cards: self.player.len(),
            opponent_cards: self.opponent.len(),
            pool_cards: self.pool.len(),
            last_player_card: self.last_player_card,
            last_opponent_card: self.last_opponent_card,
            last_outcome: self.last_outcome,
            war_pending: self.war_pending,
            war_staged: self.war_staged,
        }
    }
}

/// Read-only snapshot handed to renderers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStateView {
    pub player_name: String,
    pub phase: Phase,
    pub player_cards: usize,
    pub opponent_cards: usize,
    pub pool_cards: usize,
    pub last_player_card: Option<Card>,
    pub last_opponent_card: Option<Card>,
    pub last_outcome: Option<Outcome>,
    pub war_pending: bool,
    /// Face-down pairs drawn so far in the current war.
    pub war_staged: usize,
}
