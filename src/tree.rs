//! Tree data structures for Monte Carlo Tree Search
//!
//! Nodes own their children outright. There are no parent pointers: the
//! search records the indices it followed in a [`NodePath`] and walks that
//! path again to backpropagate.

use std::fmt;

use crate::game_state::{GameState, Move};

/// Whether a node still has moves to turn into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// At least one legal move has no child yet
    HasUntriedMoves,
    /// Every legal move has a child (or the position is terminal)
    FullyExpanded,
}

/// A node in the search tree
///
/// Statistics are stored from the perspective of the player who made the
/// move leading into this node, so a parent picks the child whose mean
/// value is highest.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The move that led here (None for the root)
    pub mv: Option<Move>,

    /// Number of simulations that passed through this node
    pub visits: u64,

    /// Sum of backpropagated values
    pub total_value: f64,

    /// Children in the order they were expanded, which is ascending column
    pub children: Vec<SearchNode>,

    /// Legal moves without a child yet, in ascending column order.
    ///
    /// Empty for terminal positions.
    pub untried_moves: Vec<Move>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl SearchNode {
    /// Creates a node for the position `state`, reached via `mv`
    pub fn new(mv: Option<Move>, state: &GameState, depth: usize) -> Self {
        let untried_moves = if state.is_terminal() {
            Vec::new()
        } else {
            state.legal_moves()
        };

        SearchNode {
            mv,
            visits: 0,
            total_value: 0.0,
            children: Vec::new(),
            untried_moves,
            depth,
        }
    }

    /// Creates the root node for a search from `state`
    pub fn root(state: &GameState) -> Self {
        Self::new(None, state, 0)
    }

    /// Number of visits to this node
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Total value accumulated at this node
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Mean value, or None before the first visit
    pub fn mean_value(&self) -> Option<f64> {
        (self.visits > 0).then(|| self.total_value / self.visits as f64)
    }

    /// Records one simulation result
    pub fn record(&mut self, value: f64) {
        self.visits += 1;
        self.total_value += value;
    }

    /// Expansion state of this node
    pub fn expansion(&self) -> Expansion {
        if self.untried_moves.is_empty() {
            Expansion::FullyExpanded
        } else {
            Expansion::HasUntriedMoves
        }
    }

    /// Returns true if this node has no children yet
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The lowest untried column, left in place until a child is added for it
    pub fn next_untried(&self) -> Option<Move> {
        self.untried_moves.first().copied()
    }

    /// Attaches a child for `mv`, where `state` is the position after the move.
    ///
    /// `mv` is removed from the untried moves, so the children and the
    /// untried moves always partition the legal moves. Returns the index of
    /// the new child.
    pub fn add_child(&mut self, mv: Move, state: &GameState) -> usize {
        self.untried_moves.retain(|&untried| untried != mv);
        self.children.push(SearchNode::new(Some(mv), state, self.depth + 1));
        self.children.len() - 1
    }

    /// Finds the child created for `mv`
    pub fn child(&self, mv: Move) -> Option<&SearchNode> {
        self.children.iter().find(|child| child.mv == Some(mv))
    }

    /// Total number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::subtree_size).sum::<usize>()
    }
}

/// Represents a path through the search tree
///
/// A path is a sequence of child indices that can be used to navigate from
/// the root node to a specific node in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    /// Indices of children to follow from the root
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Creates a new empty path (pointing to the root)
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    /// Extends the path with a new index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Follows the path from `root` and returns the node at its end
    pub fn resolve<'a>(&self, root: &'a SearchNode) -> &'a SearchNode {
        self.indices
            .iter()
            .fold(root, |node, &index| &node.children[index])
    }

    /// Mutable variant of [`NodePath::resolve`]
    pub fn resolve_mut<'a>(&self, root: &'a mut SearchNode) -> &'a mut SearchNode {
        let mut node = root;
        for &index in &self.indices {
            node = &mut node.children[index];
        }
        node
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}
