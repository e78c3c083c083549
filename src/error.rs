use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("invalid deck: {0}")]
    InvalidDeck(#[from] DeckError),
}

/// Problems with an injected card layout.
#[derive(Debug, Error, Clone)]
pub enum DeckError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}
