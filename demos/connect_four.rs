//! Play Connect Four against the UCT engine
//!
//! You play Red and move first; enter columns 1-7.

use std::io::{self, Write};

use connect_four_mcts::{
    decide, Algorithm, GameState, Move, Player, SearchConfig, Verbosity, Winner, COLS,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("MCTS Connect Four Example");
    println!("=========================");
    println!();

    let mut game = GameState::empty(Player::Red);

    let config = SearchConfig::default()
        .with_algorithm(Algorithm::UctHeuristicRollout)
        .with_simulations(20_000)
        .with_verbosity(Verbosity::None);

    let mut rng = StdRng::from_entropy();

    while !game.is_terminal() {
        print!("{}", game.board());
        println!("1234567");

        if game.current_player() == Player::Red {
            print!("Your move (enter column 1-7): ");
            io::stdout().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                break;
            }

            let column = match input.trim().parse::<usize>() {
                Ok(col) if (1..=COLS).contains(&col) => col - 1,
                _ => {
                    println!("Invalid column! Please enter a number between 1 and 7.");
                    continue;
                }
            };

            let mv = Move::new(column);
            if let Err(e) = game.play(mv) {
                println!("{}", e);
            }
        } else {
            println!("AI is thinking...");

            match decide(&game, &config, &mut rng) {
                Ok(decision) => {
                    let Some(mv) = decision.chosen else { break };
                    println!("AI chooses column: {}", mv);
                    if let Err(e) = game.play(mv) {
                        println!("Error: {}", e);
                        break;
                    }
                    println!("{}", decision.statistics.summary());
                }
                Err(e) => {
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    }

    print!("{}", game.board());

    match game.winner() {
        Some(Winner::Player(Player::Red)) => println!("You win!"),
        Some(Winner::Player(Player::Yellow)) => println!("AI wins!"),
        _ => println!("The game is a draw!"),
    }
}
