use std::fmt::Write;

use crate::card::Card;
use crate::round::{Outcome, RoundResult, Side};
use crate::state::{GameStateView, Phase};

pub const OPPONENT_NAME: &str = "PC";
const WAR_DRAW_MESSAGE: &str = "Cards were drawn!";

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Print cards as `K♥` instead of `KING of HEART`.
    pub compact_cards: bool,
    pub show_pool: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            compact_cards: false,
            show_pool: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let phase = match state.phase {
        Phase::Idle => String::from("Waiting for the first deal"),
        Phase::RoundInProgress => String::from("In progress"),
        Phase::WarChain => String::from("WAR"),
        Phase::GameOver { winner } => {
            format!("Finished ({})", winner_label(winner, &state.player_name))
        }
    };
    let _ = writeln!(out, "Game status: {phase}");
    let _ = writeln!(
        out,
        "{}: {} cards  |  {}: {} cards",
        state.player_name, state.player_cards, OPPONENT_NAME, state.opponent_cards
    );
    if options.show_pool {
        let _ = writeln!(out, "Cards at stake: {}", state.pool_cards);
    }
    if state.phase == Phase::WarChain && state.war_staged > 0 {
        // Face-down cards are never shown.
        let _ = writeln!(out, "{WAR_DRAW_MESSAGE}");
        return out;
    }
    if let Some(card) = state.last_player_card {
        let _ = writeln!(
            out,
            "{}",
            card_line(&state.player_name, card, options.compact_cards)
        );
    }
    if let Some(card) = state.last_opponent_card {
        let _ = writeln!(out, "{}", card_line(OPPONENT_NAME, card, options.compact_cards));
    }
    if let Some(outcome) = state.last_outcome {
        let _ = writeln!(out, "{}", outcome_message(outcome, &state.player_name));
    }
    out
}

/// Text shown after one `advance_round` call.
pub fn describe_round(result: &RoundResult, player_name: &str) -> String {
    match result {
        RoundResult::Battle {
            player_card,
            opponent_card,
            outcome,
        } => format!(
            "{}\n{}\n{}",
            card_line(player_name, *player_card, false),
            card_line(OPPONENT_NAME, *opponent_card, false),
            outcome_message(*outcome, player_name)
        ),
        RoundResult::WarDrawn { .. } => String::from(WAR_DRAW_MESSAGE),
        RoundResult::GameOver { winner } => {
            let (header, detail) = game_over_message(*winner, player_name);
            format!("{header}\n{detail}")
        }
    }
}

pub fn outcome_message(outcome: Outcome, player_name: &str) -> String {
    match outcome {
        Outcome::PlayerWins => format!("{player_name} wins battle!"),
        Outcome::OpponentWins => format!("{OPPONENT_NAME} wins battle!"),
        Outcome::Tie => String::from("It's a tie!\nWAR declared"),
    }
}

/// Header and detail line announcing the end of the game.
pub fn game_over_message(winner: Option<Side>, player_name: &str) -> (String, String) {
    match winner {
        Some(Side::Player) => (
            format!("{player_name} wins the game!"),
            format!("{OPPONENT_NAME} has no cards left."),
        ),
        Some(Side::Opponent) => (
            format!("{OPPONENT_NAME} wins the game!"),
            format!("{player_name} has no cards left."),
        ),
        None => (
            String::from("The game is a draw!"),
            String::from("Both players ran out of cards."),
        ),
    }
}

fn winner_label(winner: Option<Side>, player_name: &str) -> String {
    match winner {
        Some(Side::Player) => format!("winner: {player_name}"),
        Some(Side::Opponent) => format!("winner: {OPPONENT_NAME}"),
        None => String::from("draw"),
    }
}

fn card_line(owner: &str, card: Card, compact: bool) -> String {
    if compact {
        format!("{owner}'s card: {}", card.short())
    } else {
        format!("{owner}'s card: {card}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::game::{GameBuilder, advance_round};

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let mut state = GameBuilder::new("Dana")
            .with_decks(
                vec![Card::new(Rank::Two, Suit::Spade)],
                vec![Card::new(Rank::Ace, Suit::Diamond)],
            )
            .build()
            .expect("game");
        let result = advance_round(&mut state);
        let desc = describe_round(&result, state.player_name());
        assert!(desc.contains("Dana's card: TWO of SPADE"));
        assert!(desc.contains("PC's card: ACE of DIAMOND"));
        assert!(desc.contains("PC wins battle!"));

        let text = render_state(&state.view());
        assert!(text.contains("Dana: 0 cards  |  PC: 2 cards"));
        assert!(text.contains("Cards at stake: 0"));

        let compact = render_state_with_options(
            &state.view(),
            VisualOptions {
                compact_cards: true,
                show_pool: false,
            },
        );
        assert!(compact.contains("Dana's card: 2♠"));
        assert!(!compact.contains("Cards at stake"));
    }

    #[test]
    fn game_over_messages_name_the_empty_side() {
        let over = RoundResult::GameOver {
            winner: Some(Side::Opponent),
        };
        let text = describe_round(&over, "Dana");
        assert!(text.contains("PC wins the game!"));
        assert!(text.contains("Dana has no cards left."));
        let (header, _) = game_over_message(None, "Dana");
        assert!(header.contains("draw"));
    }

    #[test]
    fn war_staging_hides_face_down_cards() {
        let mut state = GameBuilder::new("Dana")
            .with_decks(
                vec![
                    Card::new(Rank::Five, Suit::Heart),
                    Card::new(Rank::Two, Suit::Club),
                    Card::new(Rank::Nine, Suit::Club),
                    Card::new(Rank::King, Suit::Club),
                ],
                vec![
                    Card::new(Rank::Five, Suit::Spade),
                    Card::new(Rank::Four, Suit::Diamond),
                    Card::new(Rank::Six, Suit::Diamond),
                    Card::new(Rank::Seven, Suit::Diamond),
                ],
            )
            .build()
            .expect("game");

        advance_round(&mut state);
        let after_tie = render_state(&state.view());
        assert!(after_tie.contains("Dana's card: FIVE of HEART"));
        assert!(after_tie.contains("WAR declared"));

        let staged = advance_round(&mut state);
        assert!(matches!(staged, RoundResult::WarDrawn { .. }));
        let text = render_state(&state.view());
        assert!(text.contains("Cards were drawn!"));
        assert!(text.contains("Cards at stake: 4"));
        assert!(!text.contains("card:"), "face-down cards leaked: {text}");
        assert!(!text.contains("tie"), "stale tie message: {text}");

        advance_round(&mut state);
        let decided = advance_round(&mut state);
        assert_eq!(decided.outcome(), Some(Outcome::PlayerWins));
        let text = render_state(&state.view());
        assert!(text.contains("Dana's card: KING of CLUB"));
        assert!(text.contains("Dana wins battle!"));
    }

    #[test]
    fn tie_declares_war() {
        assert_eq!(outcome_message(Outcome::Tie, "Dana"), "It's a tie!\nWAR declared");
        let staged = RoundResult::WarDrawn {
            player_card: Card::new(Rank::Six, Suit::Club),
            opponent_card: Card::new(Rank::Nine, Suit::Heart),
        };
        assert_eq!(describe_round(&staged, "Dana"), "Cards were drawn!");
    }
}
