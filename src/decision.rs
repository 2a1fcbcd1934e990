//! Top-level move decisions
//!
//! [`decide`] routes a position to exactly one of the three drivers and
//! collects what it found into a [`Decision`].

use std::fmt;

use log::debug;
use rand::Rng;

use crate::{
    config::{Algorithm, SearchConfig, Verbosity},
    flat::FlatMonteCarlo,
    game_state::{GameState, Move, COLS},
    mcts::MCTS,
    stats::SearchStatistics,
    uniform::{GameRecord, UniformRandomPlayer},
    Result,
};

/// One line of the verbose search trace
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// Selection score of a child while descending
    SelectionScore {
        /// The child's move
        mv: Move,
        /// Its score under the selection policy
        score: f64,
    },

    /// Selection stopped below the root at this move
    MoveSelected(Move),

    /// A child was added to the tree
    NodeAdded(Move),

    /// Canonical result of a rollout
    TerminalValue(i8),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::SelectionScore { mv, score } => write!(f, "V{}: {:.2}", mv, score),
            TraceEvent::MoveSelected(mv) => write!(f, "Move selected: {}", mv),
            TraceEvent::NodeAdded(_) => write!(f, "NODE ADDED"),
            TraceEvent::TerminalValue(value) => write!(f, "TERMINAL NODE VALUE: {}", value),
        }
    }
}

/// The outcome of a move decision
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Algorithm that made the decision
    pub algorithm: Algorithm,

    /// Chosen move, None if the position was already decided
    pub chosen: Option<Move>,

    /// Aggregate value per column from the mover's perspective; None means no data
    pub column_values: [Option<f64>; COLS],

    /// Effort spent
    pub statistics: SearchStatistics,

    /// Verbose trace, empty unless verbosity is `Verbose`
    pub trace: Vec<TraceEvent>,

    /// The game played by the uniform-random player
    pub game: Option<GameRecord>,
}

impl Decision {
    /// A decision for a position with nothing left to play
    pub fn no_move(algorithm: Algorithm) -> Self {
        Decision {
            algorithm,
            chosen: None,
            column_values: [None; COLS],
            statistics: SearchStatistics::new(),
            trace: Vec::new(),
            game: None,
        }
    }
}

/// Picks a move for the player to move in `state`
///
/// `state` is never modified; every driver works on copies. A position
/// that is already won or drawn yields a decision without a move and runs
/// no simulations.
pub fn decide<R: Rng>(state: &GameState, config: &SearchConfig, rng: &mut R) -> Result<Decision> {
    config.validate()?;

    if state.is_terminal() {
        debug!("{}: position is already decided", config.algorithm);
        return Ok(Decision::no_move(config.algorithm));
    }

    match config.algorithm {
        Algorithm::UniformRandom => {
            let record = UniformRandomPlayer::new().play_game(state, rng)?;
            let mut statistics = SearchStatistics::new();
            statistics.rollouts = 1;

            Ok(Decision {
                algorithm: config.algorithm,
                chosen: record.first_move(),
                column_values: [None; COLS],
                statistics,
                trace: Vec::new(),
                game: Some(record),
            })
        }
        Algorithm::FlatMonteCarlo => {
            let evaluation = FlatMonteCarlo::new(config.simulations).evaluate(state, rng)?;

            Ok(Decision {
                algorithm: config.algorithm,
                chosen: evaluation.best_move,
                column_values: evaluation.column_values,
                statistics: evaluation.statistics,
                trace: Vec::new(),
                game: None,
            })
        }
        Algorithm::Uct | Algorithm::UctHeuristicRollout | Algorithm::UctBiasedSelection => {
            let mut mcts = MCTS::for_algorithm(state.clone(), config.clone())?;
            let chosen = mcts.search(rng)?;
            let trace = if config.verbosity == Verbosity::Verbose {
                mcts.take_trace()
            } else {
                Vec::new()
            };

            Ok(Decision {
                algorithm: config.algorithm,
                chosen,
                column_values: mcts.column_values(),
                statistics: mcts.get_statistics().clone(),
                trace,
                game: None,
            })
        }
    }
}
