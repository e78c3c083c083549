use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::{Deck, ensure_unique};
use crate::error::GameError;
use crate::round::{Outcome, RoundResult, Side};
use crate::state::{DEFAULT_WAR_STAKES, GameState, Phase};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
struct GameConfig {
    seed: u64,
    /// Face-down cards each side adds to the pool before a war's deciding battle.
    war_stakes: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            war_stakes: DEFAULT_WAR_STAKES,
        }
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    player_name: String,
    config: GameConfig,
    decks: Option<(Vec<Card>, Vec<Card>)>,
}

impl GameBuilder {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            config: GameConfig::default(),
            decks: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_war_stakes(mut self, war_stakes: usize) -> Self {
        self.config.war_stakes = war_stakes;
        self
    }

    /// Skip the shuffle and deal exactly these cards, listed top to bottom.
    pub fn with_decks(mut self, player: Vec<Card>, opponent: Vec<Card>) -> Self {
        self.decks = Some((player, opponent));
        self
    }

    pub fn build(self) -> Result<GameState, GameError> {
        let GameBuilder {
            player_name,
            config,
            decks,
        } = self;
        let player_name = player_name.trim().to_string();
        if player_name.is_empty() {
            return Err(GameError::InvalidConfiguration("player name must not be empty"));
        }
        if config.war_stakes == 0 {
            return Err(GameError::InvalidConfiguration("war stakes must be positive"));
        }

        let (player, opponent) = match decks {
            Some((player, opponent)) => {
                ensure_unique(player.iter().chain(opponent.iter()))?;
                (Deck::from_cards(player), Deck::from_cards(opponent))
            }
            None => {
                let mut rng = StdRng::seed_from_u64(config.seed);
                let mut main = Deck::new();
                main.initialize_full();
                main.shuffle(&mut rng);
                main.split_in_half()
            }
        };
        log::debug!(
            "dealt {} cards to {} and {} to the opponent (seed {:#x})",
            player.len(),
            player_name,
            opponent.len(),
            config.seed
        );
        Ok(GameState::new(player_name, player, opponent, config.war_stakes))
    }
}

/// Shuffles and splits a fresh 52-card deck with a random seed.
pub fn new_game(player_name: &str) -> Result<GameState, GameError> {
    GameBuilder::new(player_name)
        .with_seed(rand::random())
        .build()
}

/// Performs exactly one step: a battle, one face-down war draw, or the terminal check.
///
/// Once the game is over, further calls return the same `GameOver` and touch nothing.
pub fn advance_round(state: &mut GameState) -> RoundResult {
    match state.phase {
        Phase::GameOver { winner } => RoundResult::GameOver { winner },
        Phase::WarChain if state.war_staged < state.war_stakes => stage_war_pair(state),
        _ => battle(state),
    }
}

fn battle(state: &mut GameState) -> RoundResult {
    state.war_pending = false;
    let (player_card, opponent_card) = match draw_pair(state) {
        Ok(pair) => pair,
        Err(winner) => return finish(state, winner),
    };

    let outcome = compare(&player_card, &opponent_card);
    match outcome.winner() {
        Some(side) => {
            let winnings = state.pool.drain_all();
            log::debug!(
                "{player_card} vs {opponent_card}: {side:?} takes {} cards",
                winnings.len()
            );
            match side {
                Side::Player => state.player.push_bottom_many(winnings),
                Side::Opponent => state.opponent.push_bottom_many(winnings),
            }
            state.phase = Phase::RoundInProgress;
        }
        None => {
            log::debug!(
                "{player_card} vs {opponent_card}: war declared with {} cards staged",
                state.pool.len()
            );
            state.war_pending = true;
            state.war_staged = 0;
            state.phase = Phase::WarChain;
        }
    }
    state.last_outcome = Some(outcome);

    RoundResult::Battle {
        player_card,
        opponent_card,
        outcome,
    }
}

fn stage_war_pair(state: &mut GameState) -> RoundResult {
    let (player_card, opponent_card) = match draw_pair(state) {
        Ok(pair) => pair,
        Err(winner) => return finish(state, winner),
    };
    state.war_staged += 1;
    log::trace!(
        "war pair {}/{} staged face down, pool holds {}",
        state.war_staged,
        state.war_stakes,
        state.pool.len()
    );
    RoundResult::WarDrawn {
        player_card,
        opponent_card,
    }
}

/// Draws one card per side into the pool.
///
/// On exhaustion the cards that were drawn still land in the pool and the
/// would-be winner is returned as the error: the side that could still draw,
/// or `None` if neither could.
fn draw_pair(state: &mut GameState) -> Result<(Card, Card), Option<Side>> {
    let player_card = state.player.draw_top();
    let opponent_card = state.opponent.draw_top();
    state.pool.push_bottom_many(player_card.into_iter().chain(opponent_card));
    state.last_player_card = player_card;
    state.last_opponent_card = opponent_card;
    match (player_card, opponent_card) {
        (Some(player), Some(opponent)) => Ok((player, opponent)),
        (Some(_), None) => Err(Some(Side::Player)),
        (None, Some(_)) => Err(Some(Side::Opponent)),
        (None, None) => Err(None),
    }
}

fn finish(state: &mut GameState, winner: Option<Side>) -> RoundResult {
    state.war_pending = false;
    state.phase = Phase::GameOver { winner };
    log::debug!(
        "game over, winner {winner:?}, {} cards left in the pool",
        state.pool.len()
    );
    RoundResult::GameOver { winner }
}

/// Rank-only comparison from the player's point of view.
pub fn compare(player_card: &Card, opponent_card: &Card) -> Outcome {
    match player_card.cmp(opponent_card) {
        std::cmp::Ordering::Greater => Outcome::PlayerWins,
        std::cmp::Ordering::Less => Outcome::OpponentWins,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Tally of a game driven by [`GameEngine::play_out`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: Option<Side>,
    /// False when the round limit stopped the game first.
    pub finished: bool,
    pub rounds: usize,
    pub wars: usize,
    pub player_cards: usize,
    pub opponent_cards: usize,
}

/// Owns a [`GameState`] and counts battles and wars as it advances.
pub struct GameEngine {
    state: GameState,
    rounds: usize,
    wars: usize,
}

impl GameEngine {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            rounds: 0,
            wars: 0,
        }
    }

    pub fn advance_round(&mut self) -> RoundResult {
        let result = advance_round(&mut self.state);
        if let RoundResult::Battle { outcome, .. } = result {
            self.rounds += 1;
            if outcome == Outcome::Tie {
                self.wars += 1;
            }
        }
        result
    }

    /// Advances until game over, or until `max_rounds` battles have been fought.
    pub fn play_out(&mut self, max_rounds: Option<usize>) -> GameSummary {
        self.play_out_with(max_rounds, |_, _| {})
    }

    /// Like [`GameEngine::play_out`], calling `on_step` after every advance.
    pub fn play_out_with<F>(&mut self, max_rounds: Option<usize>, mut on_step: F) -> GameSummary
    where
        F: FnMut(&RoundResult, &GameState),
    {
        loop {
            if let Some(limit) = max_rounds {
                if self.rounds >= limit && !self.state.is_finished() {
                    log::info!("round limit {limit} reached, stopping");
                    break;
                }
            }
            let result = self.advance_round();
            on_step(&result, &self.state);
            if result.is_game_over() {
                break;
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner(),
            finished: self.state.is_finished(),
            rounds: self.rounds,
            wars: self.wars,
            player_cards: self.state.player_cards(),
            opponent_cards: self.state.opponent_cards(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state.phase() {
            Phase::GameOver { winner } => winner,
            _ => None,
        }
    }
}
