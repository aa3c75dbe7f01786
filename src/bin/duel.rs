//! Play Gods from the command line.
//!
//! Each seat is a human at the terminal or one of the AIs. With two AIs the
//! game is narrated to stdout; several games in a row report a tally.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use gods_engine::agents::{Agent, DuelAgent, RandomAgent, TerminalAgent};
use gods_engine::cards::{BuiltinCatalog, CardSource, JsonCardFile};
use gods_engine::choice::{Action, Choice};
use gods_engine::core::{GameState, PlayerId};
use gods_engine::mcts::{MctsAgent, MctsConfig};
use gods_engine::rules::{run_game, GameResult, GameSetup};
use gods_engine::search::{MinimaxAgent, MinimaxConfig, StochasticConfig, StochasticMinimaxAgent};

#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Play a game of Gods between two seats")]
struct Args {
    /// Agent for player 1
    #[arg(long, default_value = "human")]
    first: Seat,

    /// Agent for player 2
    #[arg(long, default_value = "minimax")]
    second: Seat,

    /// Game seed; game N of a series uses seed + N
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Card file (JSON); the built-in catalog if omitted
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Minimax depth
    #[arg(long, default_value = "5")]
    depth: u32,

    /// Seconds per AI decision
    #[arg(long, default_value = "10")]
    time: f64,

    /// Redeals per stochastic minimax decision
    #[arg(long, default_value = "20")]
    samples: u32,

    /// MCTS iteration cap (0 = time only)
    #[arg(long, default_value = "0")]
    iterations: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    Human,
    Random,
    Minimax,
    Stochastic,
    Mcts,
}

impl Args {
    fn agent(&self, seat: Seat, salt: u64) -> Box<dyn Agent> {
        let time_limit = Duration::from_secs_f64(self.time.max(0.0));
        let minimax = MinimaxConfig::default()
            .with_max_depth(self.depth)
            .with_time_limit(time_limit);
        match seat {
            Seat::Human => Box::new(TerminalAgent::stdio()),
            Seat::Random => Box::new(RandomAgent::new(self.seed ^ salt)),
            Seat::Minimax => Box::new(MinimaxAgent::new(minimax)),
            Seat::Stochastic => Box::new(StochasticMinimaxAgent::new(
                StochasticConfig::default()
                    .with_minimax(minimax)
                    .with_samples(self.samples.max(1))
                    .with_seed(self.seed ^ salt),
            )),
            Seat::Mcts => Box::new(MctsAgent::new(
                MctsConfig::default()
                    .with_time_limit(time_limit)
                    .with_max_iterations(self.iterations)
                    .with_seed(self.seed ^ salt),
            )),
        }
    }
}

/// Prints the narration that AI seats swallow.
struct Narrated(DuelAgent);

impl Agent for Narrated {
    fn message(&mut self, text: &str) {
        println!("{text}");
    }

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        self.0.choose_action(state, choice, actions)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let source: Box<dyn CardSource> = match &args.cards {
        Some(path) => Box::new(JsonCardFile::new(path.clone())),
        None => Box::new(BuiltinCatalog),
    };
    let setup = GameSetup::default();
    let has_human = args.first == Seat::Human || args.second == Seat::Human;

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for game in 0..u64::from(args.games) {
        let mut state = setup.build(source.as_ref(), args.seed + game)?;
        let duel = DuelAgent::new(args.agent(args.first, 1), args.agent(args.second, 2));

        let result = if has_human {
            let mut agent = duel;
            run_game(&mut state, &mut agent)?
        } else {
            let mut agent = Narrated(duel);
            run_game(&mut state, &mut agent)?
        };
        log::info!("game {game}: {result}");

        match result {
            GameResult::Winner(player) => wins[player.index()] += 1,
            GameResult::Draw => draws += 1,
        }
    }

    if args.games > 1 {
        println!(
            "{}: {} wins, {}: {} wins, {draws} draws",
            PlayerId::ZERO,
            wins[0],
            PlayerId::ONE,
            wins[1]
        );
    }
    Ok(())
}
