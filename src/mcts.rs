//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module contains the UCT driver, orchestrating the four phases of
//! selection, expansion, simulation, and backpropagation for a fixed
//! number of iterations.
//!
//! Each iteration works on a private copy of the root state: selection
//! replays the moves of the nodes it descends through, expansion adds one
//! child for the lowest untried column, the simulation policy plays the
//! copy to the end, and the result is credited to every node on the path
//! with alternating sign.

use std::time::Instant;

use log::{debug, trace};
use rand::Rng;

use crate::{
    config::{Algorithm, SearchConfig, Verbosity},
    decision::TraceEvent,
    game_state::{GameState, Move, Winner, COLS},
    policy::{
        backpropagation::{BackpropagationPolicy, StandardPolicy},
        selection::{BiasedUCB1Policy, SelectionPolicy, UCB1Policy},
        simulation::{CenterBiasedPolicy, RandomPolicy, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{Expansion, NodePath, SearchNode},
    utils::best_column,
    EngineError, Result,
};

/// Phase of the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search has run yet, or between iterations
    Idle,
    /// Descending through fully expanded nodes
    Selecting,
    /// Adding a child for an untried move
    Expanding,
    /// Playing a rollout from the new node
    Simulating,
    /// Crediting the rollout result along the path
    Backpropagating,
    /// The budget is spent and the move has been chosen
    Done,
}

/// The main Monte Carlo Tree Search implementation
///
/// The tree belongs to this value and is rebuilt from scratch by every
/// call to [`MCTS::search`]; nothing carries over between decisions.
pub struct MCTS {
    /// Root node of the search tree
    root: SearchNode,

    /// Position the search starts from
    root_state: GameState,

    /// Configuration for the search
    config: SearchConfig,

    /// Statistics gathered during search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy>,

    /// Policy for simulating games during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy>,

    /// Policy for backpropagating results
    backpropagation_policy: Box<dyn BackpropagationPolicy>,

    /// Current phase of the search loop
    phase: SearchPhase,

    /// Verbose-mode trace of the last search
    trace: Vec<TraceEvent>,
}

impl MCTS {
    /// Creates a new MCTS instance with UCB1 selection and random rollouts
    pub fn new(initial_state: GameState, config: SearchConfig) -> Self {
        let selection_policy: Box<dyn SelectionPolicy> =
            Box::new(UCB1Policy::new(config.exploration_constant));

        let simulation_policy: Box<dyn SimulationPolicy> = Box::new(RandomPolicy::new());

        let backpropagation_policy: Box<dyn BackpropagationPolicy> =
            Box::new(StandardPolicy::new());

        MCTS {
            root: SearchNode::root(&initial_state),
            root_state: initial_state,
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            simulation_policy,
            backpropagation_policy,
            phase: SearchPhase::Idle,
            trace: Vec::new(),
        }
    }

    /// Creates an instance with the policies matching `config.algorithm`
    ///
    /// Only the tree-search algorithms have a tree to build; the others are
    /// rejected with `InvalidConfiguration`.
    pub fn for_algorithm(initial_state: GameState, config: SearchConfig) -> Result<Self> {
        let algorithm = config.algorithm;
        let exploration_constant = config.exploration_constant;

        match algorithm {
            Algorithm::Uct => Ok(Self::new(initial_state, config)),
            Algorithm::UctHeuristicRollout => Ok(Self::new(initial_state, config)
                .with_simulation_policy(CenterBiasedPolicy::new())),
            Algorithm::UctBiasedSelection => Ok(Self::new(initial_state, config)
                .with_selection_policy(BiasedUCB1Policy::new(exploration_constant))),
            Algorithm::UniformRandom | Algorithm::FlatMonteCarlo => {
                Err(EngineError::InvalidConfiguration(format!(
                    "{} does not build a search tree",
                    algorithm
                )))
            }
        }
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Sets the backpropagation policy to use
    pub fn with_backpropagation_policy<P: BackpropagationPolicy + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.backpropagation_policy = Box::new(policy);
        self
    }

    /// Runs the configured number of iterations and returns the best move
    ///
    /// Returns `Ok(None)` without searching when the root position is
    /// already terminal.
    pub fn search<R: Rng>(&mut self, rng: &mut R) -> Result<Option<Move>> {
        self.search_for_iterations(self.config.simulations, rng)
    }

    /// Runs the search for the specified number of iterations
    pub fn search_for_iterations<R: Rng>(
        &mut self,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        self.root = SearchNode::root(&self.root_state);
        self.statistics = SearchStatistics::new();
        self.trace.clear();

        if self.root_state.is_terminal() {
            debug!("root position is terminal, skipping search");
            self.phase = SearchPhase::Done;
            return Ok(None);
        }

        debug!(
            "starting search: {} iterations, {} to move",
            iterations,
            self.root_state.current_player()
        );
        let start_time = Instant::now();

        for i in 0..iterations {
            self.execute_iteration(rng)?;
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start_time.elapsed();
        self.phase = SearchPhase::Done;

        let best = self.best_move();
        debug!(
            "search finished after {} iterations, best move {:?}",
            self.statistics.iterations, best
        );
        Ok(best)
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let mut state = self.root_state.clone();

        self.phase = SearchPhase::Selecting;
        let mut path = self.selection(&mut state)?;

        self.phase = SearchPhase::Expanding;
        self.expansion(&mut path, &mut state)?;

        self.phase = SearchPhase::Simulating;
        let winner = self.simulation(&state, rng)?;

        self.phase = SearchPhase::Backpropagating;
        self.backpropagation(&path, &state, winner);

        self.phase = SearchPhase::Idle;
        Ok(())
    }

    /// Selection phase: descend while the current node is fully expanded
    fn selection(&mut self, state: &mut GameState) -> Result<NodePath> {
        let verbose = self.config.verbosity == Verbosity::Verbose;
        let mut path = NodePath::new();
        let mut current = &self.root;

        while current.expansion() == Expansion::FullyExpanded && !current.is_leaf() {
            if verbose {
                let parent_visits = current.visits();
                for child in &current.children {
                    if let Some(mv) = child.mv {
                        self.trace.push(TraceEvent::SelectionScore {
                            mv,
                            score: self.selection_policy.score(child, parent_visits),
                        });
                    }
                }
            }

            let index = self.selection_policy.select_child(current);
            current = &current.children[index];
            if let Some(mv) = current.mv {
                state.play(mv)?;
            }

            path.push(index);
            self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        }

        if verbose {
            if let Some(mv) = current.mv {
                self.trace.push(TraceEvent::MoveSelected(mv));
            }
        }

        trace!("selected {}", path);
        Ok(path)
    }

    /// Expansion phase: add a child for the lowest untried column
    fn expansion(&mut self, path: &mut NodePath, state: &mut GameState) -> Result<Option<Move>> {
        let node = path.resolve_mut(&mut self.root);

        let Some(mv) = node.next_untried() else {
            return Ok(None);
        };

        state.play(mv)?;
        // add_child moves mv out of the untried list
        let index = node.add_child(mv, state);
        path.push(index);

        self.statistics.tree_size += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(path.len());

        if self.config.verbosity == Verbosity::Verbose {
            self.trace.push(TraceEvent::NodeAdded(mv));
        }

        Ok(Some(mv))
    }

    /// Simulation phase: play out the game from the expanded node
    fn simulation<R: Rng>(&mut self, state: &GameState, rng: &mut R) -> Result<Winner> {
        let winner = self.simulation_policy.simulate(state, rng)?;
        self.statistics.rollouts += 1;

        if self.config.verbosity == Verbosity::Verbose {
            self.trace.push(TraceEvent::TerminalValue(winner.canonical()));
        }

        Ok(winner)
    }

    /// Backpropagation phase: update statistics in all nodes along the path
    ///
    /// The node at the end of the path receives the result from the
    /// perspective of the player who moved into it; the sign flips at every
    /// level above it.
    fn backpropagation(&mut self, path: &NodePath, leaf_state: &GameState, winner: Winner) {
        let leaf_mover = leaf_state.current_player().opponent();
        let leaf_value = winner.value_for(leaf_mover);

        let mut value = if path.len() % 2 == 0 {
            leaf_value
        } else {
            -leaf_value
        };

        let policy = &self.backpropagation_policy;
        let mut node = &mut self.root;
        policy.update_stats(node, value);

        for &index in &path.indices {
            value = -value;
            node = &mut node.children[index];
            policy.update_stats(node, value);
        }
    }

    /// Mean value of each root child from the perspective of the player to
    /// move at the root. Unvisited columns have no value.
    pub fn column_values(&self) -> [Option<f64>; COLS] {
        let mut values = [None; COLS];
        for child in &self.root.children {
            if let Some(mv) = child.mv {
                values[mv.column] = child.mean_value();
            }
        }
        values
    }

    /// Column with the highest mean value, lowest column on ties
    pub fn best_move(&self) -> Option<Move> {
        best_column(&self.column_values()).map(Move::new)
    }

    /// Returns the root of the search tree
    pub fn root(&self) -> &SearchNode {
        &self.root
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the current phase of the search loop
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Verbose-mode events recorded by the last search
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Moves the recorded events out of the searcher
    pub fn take_trace(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.trace)
    }

    /// Returns a visualization of the search tree
    pub fn visualize_tree(&self) -> String {
        let mut result = String::new();
        Self::visualize_node(&self.root, &mut result);
        result
    }

    /// Helper method to visualize a node and its children
    fn visualize_node(node: &SearchNode, output: &mut String) {
        let indent = "  ".repeat(node.depth);
        let move_str = match node.mv {
            Some(mv) => format!("Column {}", mv),
            None => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, value: {:.3})\n",
            indent,
            move_str,
            node.visits(),
            node.mean_value().unwrap_or(0.0)
        ));

        for child in &node.children {
            Self::visualize_node(child, output);
        }
    }
}
