//! Uniform-random player
//!
//! Plays a whole game from the given position, both sides choosing
//! uniformly among the legal moves. Its first move is the move it would
//! make in the position; the rest of the game serves as a reference result.

use log::debug;
use rand::Rng;

use crate::{
    game_state::{GameState, Move, Player, Winner},
    policy::simulation::{RandomPolicy, SimulationPolicy},
    Result,
};

/// A game played to completion
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Every move in order, with the player who made it
    pub moves: Vec<(Player, Move)>,

    /// How the game ended
    pub result: Winner,
}

impl GameRecord {
    /// The first move of the game, if any was made
    pub fn first_move(&self) -> Option<Move> {
        self.moves.first().map(|&(_, mv)| mv)
    }

    /// The last move of the game, if any was made
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().map(|&(_, mv)| mv)
    }
}

/// Baseline player choosing every move uniformly at random
#[derive(Debug, Clone, Default)]
pub struct UniformRandomPlayer {
    policy: RandomPolicy,
}

impl UniformRandomPlayer {
    /// Creates a new uniform-random player
    pub fn new() -> Self {
        UniformRandomPlayer {
            policy: RandomPolicy::new(),
        }
    }

    /// Picks one legal move uniformly at random
    pub fn choose_move<R: Rng>(&self, state: &GameState, rng: &mut R) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        self.policy.choose_move(state, rng)
    }

    /// Plays a copy of `state` to the end, recording every move
    pub fn play_game<R: Rng>(&self, state: &GameState, rng: &mut R) -> Result<GameRecord> {
        let mut game = state.clone();
        let mut moves = Vec::new();

        let result = loop {
            if let Some(winner) = game.winner() {
                break winner;
            }

            let Some(mv) = self.policy.choose_move(&game, rng) else {
                break Winner::Draw;
            };
            moves.push((game.current_player(), mv));
            game.play(mv)?;
        };

        debug!("random game finished after {} moves: {}", moves.len(), result);
        Ok(GameRecord { moves, result })
    }
}
