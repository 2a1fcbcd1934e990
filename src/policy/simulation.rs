//! Simulation (rollout) policies
//!
//! A simulation policy picks one move at a time; [`SimulationPolicy::simulate`]
//! uses it to play a private copy of the state to the end and report the
//! canonical result. Randomness always comes from the generator passed in,
//! so a seeded generator replays the same rollout.

use rand::{seq::SliceRandom, RngCore};

use crate::{
    game_state::{GameState, Move, Winner, COLS},
    Result,
};

/// Trait for policies that play games to completion
pub trait SimulationPolicy: Send + Sync {
    /// Chooses the next move for the player to move, or None if there is no legal move
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Move>;

    /// Plays a copy of `state` to the end and returns the result.
    ///
    /// The turn alternates after every move. A state that is already
    /// terminal returns its result immediately.
    fn simulate(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<Winner> {
        let mut state = state.clone();

        loop {
            if let Some(winner) = state.winner() {
                return Ok(winner);
            }

            let Some(mv) = self.choose_move(&state, rng) else {
                return Ok(Winner::Draw);
            };
            state.play(mv)?;
        }
    }

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SimulationPolicy>;
}

/// Random simulation policy
///
/// This policy plays uniformly random legal moves until the game ends.
#[derive(Debug, Clone)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationPolicy for RandomPolicy {
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Move> {
        state.legal_moves().choose(rng).copied()
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy> {
        Box::new(self.clone())
    }
}

/// Column preference of [`CenterBiasedPolicy`]
pub const CENTER_FIRST: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Center-first heuristic simulation policy
///
/// Plays the first open column in the order 3, 2, 4, 1, 5, 0, 6. The
/// random fallback only runs if the preference list misses every open
/// column, which cannot happen while it lists all seven.
#[derive(Debug, Clone)]
pub struct CenterBiasedPolicy {
    preference: Vec<usize>,
}

impl CenterBiasedPolicy {
    /// Creates the policy with the center-first order
    pub fn new() -> Self {
        Self::with_preference(CENTER_FIRST.to_vec())
    }

    /// Creates the policy with a custom column order
    pub fn with_preference(preference: Vec<usize>) -> Self {
        CenterBiasedPolicy { preference }
    }
}

impl Default for CenterBiasedPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationPolicy for CenterBiasedPolicy {
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Move> {
        self.preference
            .iter()
            .map(|&column| Move::new(column))
            .find(|&mv| state.is_legal_move(mv))
            .or_else(|| state.legal_moves().choose(rng).copied())
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy> {
        Box::new(self.clone())
    }
}

// Implement SimulationPolicy for Box<dyn SimulationPolicy>
impl SimulationPolicy for Box<dyn SimulationPolicy> {
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<Move> {
        (**self).choose_move(state, rng)
    }

    fn simulate(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<Winner> {
        (**self).simulate(state, rng)
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy> {
        (**self).clone_box()
    }
}
