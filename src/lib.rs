//! # connect-four-mcts
//!
//! Simulation-based move selection for Connect Four.
//!
//! Three decision drivers share one rules engine and one set of rollout
//! policies:
//!
//! - **UCT**: Monte Carlo Tree Search with UCB1 selection, in three flavours
//!   (random rollouts, center-first heuristic rollouts, and a selection
//!   score with a fading per-column prior)
//! - **Flat Monte Carlo**: independent rollouts per candidate move, no tree
//! - **Uniform random**: plays the whole game at random for both sides
//!
//! All randomness comes from a generator passed in by the caller, so a
//! seeded generator reproduces a decision exactly, and separate decisions
//! can run on separate threads without sharing anything.
//!
//! ## Basic Usage
//!
//! ```
//! use connect_four_mcts::{decide, Algorithm, GameState, Player, SearchConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() -> Result<(), connect_four_mcts::EngineError> {
//!     let state = GameState::empty(Player::Red);
//!
//!     let config = SearchConfig::default()
//!         .with_algorithm(Algorithm::Uct)
//!         .with_simulations(200);
//!
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let decision = decide(&state, &config, &mut rng)?;
//!
//!     println!("Best column: {:?}", decision.chosen);
//!     println!("{}", decision.statistics.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Customizing Policies
//!
//! The UCT driver can also be assembled by hand:
//!
//! ```
//! use connect_four_mcts::{
//!     policy::{selection::BiasedUCB1Policy, simulation::CenterBiasedPolicy},
//!     GameState, MCTS, Player, SearchConfig,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = SearchConfig::default().with_simulations(100);
//! let mut mcts = MCTS::new(GameState::empty(Player::Yellow), config)
//!     .with_selection_policy(BiasedUCB1Policy::new(1.0))
//!     .with_simulation_policy(CenterBiasedPolicy::new());
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let best = mcts.search(&mut rng).unwrap();
//! assert!(best.is_some());
//! assert_eq!(mcts.root().visits(), 100);
//! ```

pub mod config;
pub mod decision;
pub mod flat;
pub mod game_state;
pub mod mcts;
pub mod notation;
pub mod policy;
pub mod report;
pub mod stats;
pub mod tournament;
pub mod tree;
pub mod uniform;
pub mod utils;

pub use config::{Algorithm, SearchConfig, Verbosity};
pub use decision::{decide, Decision, TraceEvent};
pub use flat::{FlatEvaluation, FlatMonteCarlo};
pub use game_state::{Board, GameState, Move, Player, Winner, COLS, ROWS};
pub use mcts::{SearchPhase, MCTS};
pub use notation::DecisionRequest;
pub use policy::{BackpropagationPolicy, SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tournament::{Agent, Tournament, WinMatrix};
pub use tree::{Expansion, NodePath, SearchNode};
pub use uniform::{GameRecord, UniformRandomPlayer};

/// Error types for the decision engine
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A piece was dropped into a full or nonexistent column
    #[error("Illegal move: column {} is full or out of range", .column + 1)]
    IllegalMove {
        /// Zero-based column index
        column: usize,
    },

    /// A decision request or board could not be parsed
    #[error("Malformed input: {0}")]
    Format(String),

    /// The algorithm selector names no known algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
