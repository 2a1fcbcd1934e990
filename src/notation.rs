//! Text format for decision requests and boards
//!
//! A request is eight lines: the algorithm selector, the player to move
//! (`R` or `Y`), then six rows of seven cells, top row first. `O` marks an
//! empty cell.
//!
//! ```text
//! UCT
//! R
//! OOOOOOO
//! OOOOOOO
//! OOOOOOO
//! OOOOOOO
//! OOOYOOO
//! OORRYOO
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{
    config::Algorithm,
    game_state::{Board, GameState, Player, COLS, ROWS},
    EngineError, Result,
};

/// Character for an empty cell
pub const EMPTY: char = 'O';

/// A parsed decision request
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRequest {
    /// Algorithm that should pick the move
    pub algorithm: Algorithm,

    /// Board and player to move
    pub state: GameState,
}

impl FromStr for DecisionRequest {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim);

        let selector = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or_else(|| EngineError::Format("missing algorithm line".to_string()))?;
        let algorithm = selector.parse::<Algorithm>()?;

        let player_line = lines
            .next()
            .ok_or_else(|| EngineError::Format("missing player line".to_string()))?;
        let player = parse_player(player_line)?;

        let rows: Vec<&str> = lines.collect();
        let board = parse_rows(&rows)?;

        Ok(DecisionRequest {
            algorithm,
            state: GameState::new(board, player),
        })
    }
}

fn parse_player(line: &str) -> Result<Player> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Player::from_symbol(symbol)
            .ok_or_else(|| EngineError::Format(format!("unknown player '{}'", symbol))),
        _ => Err(EngineError::Format(format!(
            "player line must be a single character, got '{}'",
            line
        ))),
    }
}

/// Parses six board rows, top row first. Trailing blank lines are ignored.
pub fn parse_rows(rows: &[&str]) -> Result<Board> {
    let mut rows = rows.to_vec();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    if rows.len() != ROWS {
        return Err(EngineError::Format(format!(
            "expected {} board rows, found {}",
            ROWS,
            rows.len()
        )));
    }

    let mut cells = [[None; COLS]; ROWS];
    for (r, row) in rows.iter().enumerate() {
        let symbols: Vec<char> = row.chars().collect();
        if symbols.len() != COLS {
            return Err(EngineError::Format(format!(
                "row {} has {} cells, expected {}",
                r + 1,
                symbols.len(),
                COLS
            )));
        }

        for (c, &symbol) in symbols.iter().enumerate() {
            cells[r][c] = match symbol {
                EMPTY => None,
                other => Some(Player::from_symbol(other).ok_or_else(|| {
                    EngineError::Format(format!(
                        "unknown cell '{}' at row {}, column {}",
                        other,
                        r + 1,
                        c + 1
                    ))
                })?),
            };
        }
    }

    Ok(Board::from_cells(cells))
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().map(str::trim).collect();
        parse_rows(&rows)
    }
}

impl fmt::Display for Board {
    /// One line per row, top row first, in the request format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for column in 0..COLS {
                let symbol = self.get(row, column).map_or(EMPTY, Player::symbol);
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for DecisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.algorithm.selector())?;
        writeln!(f, "{}", self.state.current_player())?;
        write!(f, "{}", self.state.board())
    }
}
