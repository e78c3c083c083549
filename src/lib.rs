//! Two-player War card game engine with a pull-based, one-step-per-call round API.

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod round;
pub mod state;
pub mod visualize;

pub use crate::card::{Card, FULL_DECK_SIZE, Rank, Suit, full_deck};
pub use crate::deck::Deck;
pub use crate::error::{DeckError, GameError};
pub use crate::game::{GameBuilder, GameEngine, GameSummary, advance_round, compare, new_game};
pub use crate::round::{Outcome, RoundResult, Side};
pub use crate::state::{DEFAULT_WAR_STAKES, GameState, GameStateView, Phase};
pub use crate::visualize::{VisualOptions, describe_round, game_over_message, render_state};
