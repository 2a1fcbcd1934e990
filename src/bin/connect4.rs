//! connect4 - pick a Connect Four move, or run a tournament
//!
//! `connect4 decide <INPUT> <VERBOSITY> <SIMULATIONS>` reads a decision
//! request (algorithm, player to move, six board rows) and prints the
//! report. `connect4 tournament` plays agents against each other and prints
//! the win matrix.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use connect_four_mcts::{
    decide,
    report::write_report,
    tournament::{DEFAULT_THREADS, GAMES_PER_MATCHUP},
    Agent, DecisionRequest, SearchConfig, Tournament, Verbosity,
};

#[derive(Debug, Parser)]
#[command(name = "connect4", version, about = "Simulation-based Connect Four move selection")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose a move for the position in a request file
    Decide {
        /// Request file: algorithm, player to move, six board rows
        input: PathBuf,

        /// None, Brief or Verbose
        verbosity: Verbosity,

        /// Simulation budget (0 for UR)
        simulations: usize,

        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,

        /// UCB1 exploration constant
        #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
        exploration_constant: f64,
    },

    /// Play every agent against every other agent
    Tournament {
        /// Games per ordered pairing
        #[arg(long, default_value_t = GAMES_PER_MATCHUP)]
        games: usize,

        /// Seed for the tournament
        #[arg(long)]
        seed: Option<u64>,

        /// Games played at once (0 uses every core)
        #[arg(long, default_value_t = DEFAULT_THREADS)]
        threads: usize,

        /// Agent as NAME:SIMS, e.g. UCT:500 (repeatable; defaults to the standard line-up)
        #[arg(long = "agent")]
        agents: Vec<Agent>,
    },
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("using seed {}", seed);
    seed
}

fn run_decide(
    input: PathBuf,
    verbosity: Verbosity,
    simulations: usize,
    seed: Option<u64>,
    exploration_constant: f64,
) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let request: DecisionRequest = text
        .parse()
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let config = SearchConfig::default()
        .with_algorithm(request.algorithm)
        .with_simulations(simulations)
        .with_exploration_constant(exploration_constant)
        .with_verbosity(verbosity);

    let mut rng = StdRng::seed_from_u64(resolve_seed(seed));
    let decision = decide(&request.state, &config, &mut rng)?;
    info!("{}", decision.statistics.summary());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &request.state, &decision, verbosity)?;
    out.flush()?;
    Ok(())
}

fn run_tournament(
    games: usize,
    seed: Option<u64>,
    threads: usize,
    agents: Vec<Agent>,
) -> Result<()> {
    let agents = if agents.is_empty() {
        Agent::default_lineup()
    } else {
        agents
    };

    let tournament = Tournament::new(agents)
        .with_games_per_matchup(games)
        .with_threads(threads);
    let matrix = tournament.run(resolve_seed(seed))?;

    println!();
    println!("{}", matrix.header());
    print!("{}", matrix);
    for line in matrix.reference_comparisons() {
        println!("{}", line);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Decide {
            input,
            verbosity,
            simulations,
            seed,
            exploration_constant,
        } => run_decide(input, verbosity, simulations, seed, exploration_constant),
        Command::Tournament {
            games,
            seed,
            threads,
            agents,
        } => run_tournament(games, seed, threads, agents),
    }
}
