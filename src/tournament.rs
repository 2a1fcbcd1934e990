//! Round-robin tournaments between decision algorithms
//!
//! Every ordered pair of distinct agents plays a fixed number of games from
//! the empty board, the first agent as Red (moving first). The games of a
//! pairing run in parallel on a rayon pool. Each game draws from its own
//! generator, whose seed is taken from a tournament-level generator in loop
//! order, so a seed reproduces the whole win matrix at any thread count.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    config::{Algorithm, SearchConfig, Verbosity},
    decision::decide,
    game_state::{GameState, Player, Winner},
    EngineError, Result,
};

/// Default number of games per ordered pairing
pub const GAMES_PER_MATCHUP: usize = 20;

/// Default number of games played at once
pub const DEFAULT_THREADS: usize = 4;

/// Agents whose results against [`reference_agent`] are summarised
pub fn improved_agents() -> [Agent; 2] {
    [
        Agent::new(Algorithm::UctHeuristicRollout, 500),
        Agent::new(Algorithm::UctBiasedSelection, 500),
    ]
}

/// The strong baseline the improved agents are measured against
pub fn reference_agent() -> Agent {
    Agent::new(Algorithm::Uct, 10_000)
}

/// A tournament entrant: an algorithm and its simulation budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// Decision algorithm
    pub algorithm: Algorithm,

    /// Simulation budget (0 for the uniform-random player)
    pub simulations: usize,
}

impl Agent {
    /// Creates an agent
    pub fn new(algorithm: Algorithm, simulations: usize) -> Self {
        Agent {
            algorithm,
            simulations,
        }
    }

    /// The standard seven-agent line-up
    pub fn default_lineup() -> Vec<Agent> {
        vec![
            Agent::new(Algorithm::UniformRandom, 0),
            Agent::new(Algorithm::FlatMonteCarlo, 500),
            Agent::new(Algorithm::FlatMonteCarlo, 10_000),
            Agent::new(Algorithm::Uct, 500),
            Agent::new(Algorithm::Uct, 10_000),
            Agent::new(Algorithm::UctHeuristicRollout, 500),
            Agent::new(Algorithm::UctBiasedSelection, 500),
        ]
    }

    /// Search configuration for this agent, silent
    pub fn config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_algorithm(self.algorithm)
            .with_simulations(self.simulations)
            .with_verbosity(Verbosity::None)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.algorithm, self.simulations)
    }
}

impl FromStr for Agent {
    type Err = EngineError;

    /// Parses `NAME:SIMS`, or just `NAME` for a zero budget
    fn from_str(s: &str) -> Result<Self> {
        let (name, simulations) = match s.split_once(':') {
            Some((name, sims)) => {
                let sims = sims.trim().parse::<usize>().map_err(|_| {
                    EngineError::InvalidConfiguration(format!("bad simulation count in '{}'", s))
                })?;
                (name, sims)
            }
            None => (s, 0),
        };

        Ok(Agent::new(name.parse()?, simulations))
    }
}

/// Plays one game from the empty board and returns its result
pub fn play_match<R: Rng>(red: &Agent, yellow: &Agent, rng: &mut R) -> Result<Winner> {
    let red_config = red.config();
    let yellow_config = yellow.config();
    let mut state = GameState::empty(Player::Red);

    loop {
        if let Some(winner) = state.winner() {
            return Ok(winner);
        }

        let config = match state.current_player() {
            Player::Red => &red_config,
            Player::Yellow => &yellow_config,
        };

        let Some(mv) = decide(&state, config, rng)?.chosen else {
            return Ok(Winner::Draw);
        };
        state.play(mv)?;
    }
}

/// Win counts: `wins[i][j]` is the number of games agent i won against agent j
#[derive(Debug, Clone, PartialEq)]
pub struct WinMatrix {
    /// The agents, in row/column order
    pub agents: Vec<Agent>,

    /// Games played per ordered pairing
    pub games_per_matchup: usize,

    /// Win counts
    pub wins: Vec<Vec<usize>>,

    /// Drawn games per ordered pairing (Red agent first)
    pub draws: Vec<Vec<usize>>,
}

impl WinMatrix {
    fn new(agents: Vec<Agent>, games_per_matchup: usize) -> Self {
        let n = agents.len();
        WinMatrix {
            agents,
            games_per_matchup,
            wins: vec![vec![0; n]; n],
            draws: vec![vec![0; n]; n],
        }
    }

    /// Total wins of one agent across all opponents
    pub fn total_wins(&self, agent: usize) -> usize {
        self.wins[agent].iter().sum()
    }

    /// Games `winner` won against `loser`, if both took part
    pub fn wins_against(&self, winner: &Agent, loser: &Agent) -> Option<usize> {
        let i = self.agents.iter().position(|agent| agent == winner)?;
        let j = self.agents.iter().position(|agent| agent == loser)?;
        Some(self.wins[i][j])
    }

    /// Title line printed above the table
    pub fn header(&self) -> String {
        format!(
            "Tournament Win Matrix (out of {} games):",
            self.games_per_matchup
        )
    }

    /// `<improved> vs UCT(10000): W wins / N games (x% win rate)` for every
    /// improved agent in the line-up, when the reference agent is present
    pub fn reference_comparisons(&self) -> Vec<String> {
        let reference = reference_agent();

        improved_agents()
            .iter()
            .filter_map(|improved| {
                let wins = self.wins_against(improved, &reference)?;
                let rate = if self.games_per_matchup > 0 {
                    wins as f64 / self.games_per_matchup as f64 * 100.0
                } else {
                    0.0
                };
                Some(format!(
                    "{} vs {}: {} wins / {} games ({:.1}% win rate)",
                    improved, reference, wins, self.games_per_matchup, rate
                ))
            })
            .collect()
    }
}

impl fmt::Display for WinMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.agents.iter().map(Agent::to_string).collect();
        let width = names.iter().map(String::len).max().unwrap_or(0).max(4);

        write!(f, "{:width$}", "", width = width)?;
        for name in &names {
            write!(f, " {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for (i, name) in names.iter().enumerate() {
            write!(f, "{:width$}", name, width = width)?;
            for j in 0..names.len() {
                if i == j {
                    write!(f, " {:>width$}", "-", width = width)?;
                } else {
                    write!(f, " {:>width$}", self.wins[i][j], width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A round-robin tournament
#[derive(Debug, Clone)]
pub struct Tournament {
    agents: Vec<Agent>,
    games_per_matchup: usize,
    threads: usize,
}

impl Tournament {
    /// Creates a tournament with the default number of games per pairing
    pub fn new(agents: Vec<Agent>) -> Self {
        Tournament {
            agents,
            games_per_matchup: GAMES_PER_MATCHUP,
            threads: DEFAULT_THREADS,
        }
    }

    /// Sets the number of games per ordered pairing
    pub fn with_games_per_matchup(mut self, games: usize) -> Self {
        self.games_per_matchup = games;
        self
    }

    /// Sets how many games run at once (0 lets rayon pick)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Plays every pairing and returns the win matrix
    pub fn run(&self, seed: u64) -> Result<WinMatrix> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| EngineError::InvalidConfiguration(format!("thread pool: {}", e)))?;

        let mut matrix = WinMatrix::new(self.agents.clone(), self.games_per_matchup);
        let mut seeder = StdRng::seed_from_u64(seed);

        for (i, red) in self.agents.iter().enumerate() {
            for (j, yellow) in self.agents.iter().enumerate() {
                if i == j {
                    continue;
                }

                info!("Running: {} vs {}", red, yellow);
                let seeds: Vec<u64> = (0..self.games_per_matchup)
                    .map(|_| seeder.gen())
                    .collect();

                let results: Vec<Winner> = pool.install(|| {
                    seeds
                        .into_par_iter()
                        .map(|game_seed| {
                            let mut rng = StdRng::seed_from_u64(game_seed);
                            play_match(red, yellow, &mut rng)
                        })
                        .collect::<Result<Vec<Winner>>>()
                })?;

                for result in results {
                    match result {
                        Winner::Player(Player::Red) => matrix.wins[i][j] += 1,
                        Winner::Player(Player::Yellow) => matrix.wins[j][i] += 1,
                        Winner::Draw => matrix.draws[i][j] += 1,
                    }
                }
                debug!(
                    "{} vs {}: {}-{}",
                    red, yellow, matrix.wins[i][j], matrix.wins[j][i]
                );
            }
        }

        Ok(matrix)
    }
}
