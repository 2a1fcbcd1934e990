//! Statistics collection for move decisions
//!
//! This module provides structures for collecting and reporting statistics
//! about a search or evaluation run.

use std::time::Duration;

/// Statistics collected during a decision
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of search iterations performed (tree search only)
    pub iterations: usize,

    /// Number of complete rollouts played
    pub rollouts: usize,

    /// Total time spent
    pub total_time: Duration,

    /// Total number of nodes in the tree
    pub tree_size: usize,

    /// Maximum depth reached in the tree
    pub max_depth: usize,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            rollouts: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1, // Start with root node
            max_depth: 0,
        }
    }

    /// Returns the average time per rollout in microseconds
    pub fn avg_time_per_rollout_us(&self) -> f64 {
        if self.rollouts == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.rollouts as f64
    }

    /// Returns the number of rollouts per second
    pub fn rollouts_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.rollouts as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Search Statistics:\n\
             - Iterations: {}\n\
             - Rollouts: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Avg time per rollout: {:.3} µs\n\
             - Rollouts per second: {:.1}",
            self.iterations,
            self.rollouts,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.avg_time_per_rollout_us(),
            self.rollouts_per_second(),
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
