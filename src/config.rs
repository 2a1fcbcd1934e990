//! Configuration options for move selection
//!
//! This module defines which algorithm picks the move, how much simulation
//! effort it may spend, and how much it reports.

use std::fmt;
use std::str::FromStr;

use crate::{EngineError, Result};

/// Decision algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Uniform-random play for both sides until the game ends
    UniformRandom,

    /// One-ply lookahead averaging independent random rollouts per move
    FlatMonteCarlo,

    /// UCT with uniform-random rollouts
    Uct,

    /// UCT whose rollouts follow the center-first column preference
    UctHeuristicRollout,

    /// UCT whose selection adds a fading per-column prior
    UctBiasedSelection,
}

impl Algorithm {
    /// All algorithms, in tournament order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::UniformRandom,
        Algorithm::FlatMonteCarlo,
        Algorithm::Uct,
        Algorithm::UctHeuristicRollout,
        Algorithm::UctBiasedSelection,
    ];

    /// Legacy selector token used in request files
    pub fn selector(self) -> &'static str {
        match self {
            Algorithm::UniformRandom => "UR",
            Algorithm::FlatMonteCarlo => "PMCGS",
            Algorithm::Uct => "UCT",
            Algorithm::UctHeuristicRollout => "Improved_UCT_Heuristic",
            Algorithm::UctBiasedSelection => "Improved_UCT_UCB",
        }
    }

    /// Returns true if this algorithm builds a search tree
    pub fn is_tree_search(self) -> bool {
        matches!(
            self,
            Algorithm::Uct | Algorithm::UctHeuristicRollout | Algorithm::UctBiasedSelection
        )
    }

    /// Returns true if this algorithm consumes a simulation budget
    pub fn uses_simulations(self) -> bool {
        self != Algorithm::UniformRandom
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "UR" | "UniformRandom" => Ok(Algorithm::UniformRandom),
            "PMCGS" | "FlatMonteCarlo" => Ok(Algorithm::FlatMonteCarlo),
            "UCT" => Ok(Algorithm::Uct),
            "Improved_UCT_Heuristic" | "UCT-with-heuristic-rollout" => {
                Ok(Algorithm::UctHeuristicRollout)
            }
            "Improved_UCT_UCB" | "UCT-with-biased-selection" => Ok(Algorithm::UctBiasedSelection),
            other => Err(EngineError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// How much a decision reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only the final move
    None,

    /// Per-column values and the final move
    Brief,

    /// Everything in `Brief` plus a per-iteration search trace
    Verbose,
}

impl FromStr for Verbosity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "None" => Ok(Verbosity::None),
            "Brief" => Ok(Verbosity::Brief),
            "Verbose" => Ok(Verbosity::Verbose),
            other => Err(EngineError::InvalidConfiguration(format!(
                "unknown verbosity '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::None => "None",
            Verbosity::Brief => "Brief",
            Verbosity::Verbose => "Verbose",
        };
        f.write_str(name)
    }
}

/// Configuration for a single move decision
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use connect_four_mcts::config::{Algorithm, SearchConfig, Verbosity};
///
/// let config = SearchConfig::default()
///     .with_algorithm(Algorithm::UctHeuristicRollout)
///     .with_simulations(2_000)
///     .with_exploration_constant(1.0)
///     .with_verbosity(Verbosity::None);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Which driver picks the move
    pub algorithm: Algorithm,

    /// Simulation budget.
    ///
    /// For tree search this is the number of select/expand/simulate/backpropagate
    /// iterations, for flat Monte Carlo the number of rollouts per legal move.
    /// Ignored by the uniform-random player.
    pub simulations: usize,

    /// Exploration constant for UCB1. The standard value is sqrt(2).
    pub exploration_constant: f64,

    /// Reporting level
    pub verbosity: Verbosity,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::Uct,
            simulations: 500,
            exploration_constant: std::f64::consts::SQRT_2,
            verbosity: Verbosity::Brief,
        }
    }
}

impl SearchConfig {
    /// Sets the algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the simulation budget
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the verbosity
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Checks that the configuration can drive a decision
    pub fn validate(&self) -> Result<()> {
        if self.algorithm.uses_simulations() && self.simulations == 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "{} needs a positive simulation budget",
                self.algorithm
            )));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }

        Ok(())
    }
}
