use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use warbot::visualize::{describe_round, game_over_message, render_state};
use warbot::{DEFAULT_WAR_STAKES, GameBuilder, GameEngine, Side};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play seeded games of War against the PC.")]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed; game i is dealt with seed + i
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Name shown for the human side
    #[arg(short = 'n', long = "name", default_value = "Player")]
    name: String,

    /// Face-down cards each side stakes when a war is declared
    #[arg(long = "war-stakes", default_value_t = DEFAULT_WAR_STAKES)]
    war_stakes: usize,

    /// Safety cap on battles per game; games exceeding this are aborted
    #[arg(long = "max-rounds", default_value_t = 10_000)]
    max_rounds: usize,

    /// Print every battle and the table state
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("--games must be at least 1".into());
    }

    let mut player_wins = 0usize;
    let mut opponent_wins = 0usize;
    let mut draws = 0usize;
    let mut aborted = 0usize;
    let mut total_rounds = 0usize;
    let mut total_wars = 0usize;

    for index in 0..args.games {
        let seed = args.seed.wrapping_add(index as u64);
        let state = GameBuilder::new(args.name.as_str())
            .with_seed(seed)
            .with_war_stakes(args.war_stakes)
            .build()?;
        let player_name = state.player_name().to_string();
        let mut engine = GameEngine::new(state);
        log::info!("game {index}: dealt with seed {seed:#x}");

        let summary = if args.visualize {
            engine.play_out_with(Some(args.max_rounds), |result, state| {
                println!("{}\n", describe_round(result, state.player_name()));
                if !result.is_game_over() {
                    println!("{}", render_state(&state.view()));
                }
            })
        } else {
            engine.play_out(Some(args.max_rounds))
        };

        total_rounds += summary.rounds;
        total_wars += summary.wars;
        if !summary.finished {
            aborted += 1;
            println!(
                "Game {index}: stopped after {} rounds ({} vs {} cards).",
                summary.rounds, summary.player_cards, summary.opponent_cards
            );
            continue;
        }
        match summary.winner {
            Some(Side::Player) => player_wins += 1,
            Some(Side::Opponent) => opponent_wins += 1,
            None => draws += 1,
        }
        let (header, detail) = game_over_message(summary.winner, &player_name);
        println!(
            "Game {index}: {header} {detail} ({} rounds, {} wars)",
            summary.rounds, summary.wars
        );
    }

    if args.games > 1 {
        println!();
        println!("Summary over {} games:", args.games);
        println!("  {:<12} {player_wins}", format!("{}:", args.name.trim()));
        println!("  {:<12} {opponent_wins}", "PC:");
        println!("  {:<12} {draws}", "Draws:");
        println!("  {:<12} {aborted}", "Aborted:");
        println!(
            "  {:<12} {:.1}",
            "Avg rounds:",
            total_rounds as f64 / args.games as f64
        );
        println!(
            "  {:<12} {:.1}",
            "Avg wars:",
            total_wars as f64 / args.games as f64
        );
    }

    Ok(())
}
