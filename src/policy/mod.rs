//! Policies for different phases of the MCTS algorithm
//!
//! This module contains implementations of various policies used in MCTS:
//! - Selection policies: How to choose which child to descend into
//! - Simulation policies: How to play out games from a position
//! - Backpropagation policies: How to update node statistics

pub mod backpropagation;
pub mod selection;
pub mod simulation;

pub use backpropagation::{BackpropagationPolicy, StandardPolicy};
pub use selection::{BiasedUCB1Policy, SelectionPolicy, UCB1Policy};
pub use simulation::{CenterBiasedPolicy, RandomPolicy, SimulationPolicy};
