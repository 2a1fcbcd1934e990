//! Selection policies for the MCTS algorithm
//!
//! Selection policies score the children of a fully expanded node during
//! the selection phase, balancing exploration and exploitation.

use crate::{
    game_state::COLS,
    tree::SearchNode,
    utils::ucb1_value,
};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy: Send + Sync {
    /// Scores a child of a node that has been visited `parent_visits` times
    fn score(&self, child: &SearchNode, parent_visits: u64) -> f64;

    /// Selects the index of the highest scoring child.
    ///
    /// Children are stored in ascending column order, so ties go to the
    /// lowest column.
    fn select_child(&self, node: &SearchNode) -> usize {
        let parent_visits = node.visits();
        let mut best_score = f64::NEG_INFINITY;
        let mut best_index = 0;

        for (i, child) in node.children.iter().enumerate() {
            let score = self.score(child, parent_visits);
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }

        best_index
    }

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SelectionPolicy>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// This is the classic selection policy for MCTS:
///
/// ```text
/// UCB1 = mean_value + exploration_constant * sqrt(ln(parent_visits) / child_visits)
/// ```
///
/// A child that has never been visited scores +inf, so every child is
/// tried once before statistics decide. Higher exploration constants
/// favor less-visited nodes; the default is sqrt(2).
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(std::f64::consts::SQRT_2)
    }
}

impl SelectionPolicy for UCB1Policy {
    fn score(&self, child: &SearchNode, parent_visits: u64) -> f64 {
        ucb1_value(
            child.total_value(),
            child.visits(),
            parent_visits,
            self.exploration_constant,
        )
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}

/// Static column weights used by [`BiasedUCB1Policy`], highest in the center
pub const CENTER_WEIGHTS: [f64; COLS] = [0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25];

/// UCB1 with a per-column prior
///
/// Adds `weight(column) / (1 + visits)` to the UCB1 score. The bonus steers
/// the first visits towards central columns and fades as a child collects
/// visits, so the asymptotic behaviour is that of plain UCB1.
#[derive(Debug, Clone)]
pub struct BiasedUCB1Policy {
    /// Exploration constant for the UCB1 part of the score
    pub exploration_constant: f64,

    /// Prior weight per column
    pub weights: [f64; COLS],
}

impl BiasedUCB1Policy {
    /// Creates a policy with the center-first weights
    pub fn new(exploration_constant: f64) -> Self {
        Self::with_weights(exploration_constant, CENTER_WEIGHTS)
    }

    /// Creates a policy with custom column weights
    pub fn with_weights(exploration_constant: f64, weights: [f64; COLS]) -> Self {
        BiasedUCB1Policy {
            exploration_constant,
            weights,
        }
    }

    /// The prior bonus for a child, given its visit count
    pub fn bias(&self, column: usize, visits: u64) -> f64 {
        self.weights.get(column).copied().unwrap_or(0.0) / (1.0 + visits as f64)
    }
}

impl SelectionPolicy for BiasedUCB1Policy {
    fn score(&self, child: &SearchNode, parent_visits: u64) -> f64 {
        let base = ucb1_value(
            child.total_value(),
            child.visits(),
            parent_visits,
            self.exploration_constant,
        );

        match child.mv {
            Some(mv) => base + self.bias(mv.column, child.visits()),
            None => base,
        }
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}

// Implement SelectionPolicy for Box<dyn SelectionPolicy>
impl SelectionPolicy for Box<dyn SelectionPolicy> {
    fn score(&self, child: &SearchNode, parent_visits: u64) -> f64 {
        (**self).score(child, parent_visits)
    }

    fn select_child(&self, node: &SearchNode) -> usize {
        (**self).select_child(node)
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy> {
        (**self).clone_box()
    }
}
