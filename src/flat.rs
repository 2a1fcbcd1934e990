//! Flat Monte Carlo evaluation
//!
//! For every legal move, play that move on a fresh copy of the position and
//! run a fixed number of independent rollouts from there. The move with the
//! best average outcome, seen from the player to move, wins. No tree is
//! built.

use std::time::Instant;

use log::{debug, trace};
use rand::Rng;

use crate::{
    game_state::{GameState, Move, COLS},
    policy::simulation::{RandomPolicy, SimulationPolicy},
    stats::SearchStatistics,
    utils::best_column,
    Result,
};

/// Result of a flat evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEvaluation {
    /// Average outcome per column from the root player's perspective.
    ///
    /// Full columns have no value.
    pub column_values: [Option<f64>; COLS],

    /// Best column, lowest on ties. None if the position has no legal move.
    pub best_move: Option<Move>,

    /// Rollout counts and timing
    pub statistics: SearchStatistics,
}

/// One-ply Monte Carlo evaluator
pub struct FlatMonteCarlo {
    /// Rollouts per legal move
    simulations: usize,

    /// Policy used for every rollout
    simulation_policy: Box<dyn SimulationPolicy>,
}

impl FlatMonteCarlo {
    /// Creates an evaluator that runs `simulations` random rollouts per move
    pub fn new(simulations: usize) -> Self {
        FlatMonteCarlo {
            simulations,
            simulation_policy: Box::new(RandomPolicy::new()),
        }
    }

    /// Sets the rollout policy
    pub fn with_simulation_policy<P: SimulationPolicy + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Evaluates every legal move of `state`
    pub fn evaluate<R: Rng>(&self, state: &GameState, rng: &mut R) -> Result<FlatEvaluation> {
        let mut statistics = SearchStatistics::new();
        let mut column_values = [None; COLS];

        if state.is_terminal() {
            debug!("position is terminal, nothing to evaluate");
            return Ok(FlatEvaluation {
                column_values,
                best_move: None,
                statistics,
            });
        }

        let player = state.current_player();
        let start_time = Instant::now();

        for mv in state.legal_moves() {
            let mut total = 0.0;

            for _ in 0..self.simulations {
                let mut rollout_state = state.clone();
                rollout_state.play(mv)?;
                let winner = self.simulation_policy.simulate(&rollout_state, rng)?;
                total += winner.value_for(player);
                statistics.rollouts += 1;
            }

            let average = if self.simulations > 0 {
                total / self.simulations as f64
            } else {
                0.0
            };
            trace!("column {}: average {:.3}", mv, average);
            column_values[mv.column] = Some(average);
        }

        statistics.total_time = start_time.elapsed();
        let best_move = best_column(&column_values).map(Move::new);
        debug!(
            "flat evaluation finished: {} rollouts, best move {:?}",
            statistics.rollouts, best_move
        );

        Ok(FlatEvaluation {
            column_values,
            best_move,
            statistics,
        })
    }
}
