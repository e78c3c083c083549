use serde::{Deserialize, Serialize};

use crate::card::Card;

/// One of the two seats at the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Result of comparing the two face-up cards of a battle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    /// Equal ranks. The pool stays staged and a war begins.
    Tie,
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::Tie => None,
        }
    }
}

/// What a single `advance_round` call did.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Face-up cards were compared.
    Battle {
        player_card: Card,
        opponent_card: Card,
        outcome: Outcome,
    },
    /// One face-down pair was staged into the pool during a war.
    WarDrawn {
        player_card: Card,
        opponent_card: Card,
    },
    /// A draw failed. `winner` is `None` when both sides ran out together.
    GameOver { winner: Option<Side> },
}

impl RoundResult {
    pub fn is_game_over(&self) -> bool {
        matches!(self, RoundResult::GameOver { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundResult::Battle { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}
