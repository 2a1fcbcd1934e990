//! Arithmetic helpers shared by the selection policies and drivers

use crate::game_state::COLS;

/// Calculates the exploitation term for UCB1
///
/// This is simply the mean value of a node.
pub fn exploitation_term(total_value: f64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    total_value / visits as f64
}

/// Calculates the exploration term for UCB1
///
/// This is the term that encourages exploration of less-visited nodes.
pub fn exploration_term(parent_visits: u64, child_visits: u64, exploration_constant: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }

    exploration_constant * ((parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// Calculates the UCB1 value for a node
///
/// Unvisited nodes score +inf so every child is tried once before any
/// statistics are compared.
pub fn ucb1_value(
    total_value: f64,
    visits: u64,
    parent_visits: u64,
    exploration_constant: f64,
) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    exploitation_term(total_value, visits)
        + exploration_term(parent_visits, visits, exploration_constant)
}

/// Picks the column with the highest value, ignoring columns without data.
///
/// Ties go to the lowest column.
pub fn best_column(values: &[Option<f64>; COLS]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (column, value) in values.iter().enumerate() {
        let Some(value) = *value else { continue };
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((column, value)),
        }
    }

    best.map(|(column, _)| column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvisited_node_is_infinite() {
        assert_eq!(ucb1_value(0.0, 0, 10, 1.414), f64::INFINITY);
    }

    #[test]
    fn ucb1_matches_formula() {
        let expected = 0.5 + 2f64.sqrt() * ((100f64).ln() / 10.0).sqrt();
        let actual = ucb1_value(5.0, 10, 100, 2f64.sqrt());
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn best_column_prefers_lowest_on_ties() {
        let values = [None, Some(0.5), Some(0.75), None, Some(0.75), Some(-1.0), None];
        assert_eq!(best_column(&values), Some(2));
        assert_eq!(best_column(&[None; COLS]), None);
    }
}
