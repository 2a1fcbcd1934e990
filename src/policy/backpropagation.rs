//! Backpropagation policies for the MCTS algorithm
//!
//! Backpropagation policies determine how a single node's statistics change
//! when a simulation result passes through it. The driver decides which
//! value each node on the path receives.

use crate::tree::SearchNode;

/// Trait for policies that backpropagate simulation results
pub trait BackpropagationPolicy: Send + Sync {
    /// Updates statistics for a node based on a simulation result
    fn update_stats(&self, node: &mut SearchNode, value: f64);

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn BackpropagationPolicy>;
}

/// Standard backpropagation policy
///
/// This policy increments the visit count and adds the value to the
/// node's total.
#[derive(Debug, Clone)]
pub struct StandardPolicy;

impl StandardPolicy {
    /// Creates a new standard policy
    pub fn new() -> Self {
        StandardPolicy
    }
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl BackpropagationPolicy for StandardPolicy {
    fn update_stats(&self, node: &mut SearchNode, value: f64) {
        node.record(value);
    }

    fn clone_box(&self) -> Box<dyn BackpropagationPolicy> {
        Box::new(self.clone())
    }
}

// Implement BackpropagationPolicy for Box<dyn BackpropagationPolicy>
impl BackpropagationPolicy for Box<dyn BackpropagationPolicy> {
    fn update_stats(&self, node: &mut SearchNode, value: f64) {
        (**self).update_stats(node, value)
    }

    fn clone_box(&self) -> Box<dyn BackpropagationPolicy> {
        (**self).clone_box()
    }
}
