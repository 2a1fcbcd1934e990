//! Connect Four rules engine.
//!
//! This module holds the board representation, legal-move enumeration,
//! move application and terminal/winner detection. Every search driver in
//! the crate is built on top of these types.
//!
//! Moves never flip the turn on their own: [`GameState::apply_move`] places
//! the current player's piece and [`GameState::switch_turn`] hands the move
//! to the opponent. [`GameState::play`] does both for callers that want the
//! usual alternation.

use std::fmt;

use crate::{EngineError, Result};

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of columns on the board
pub const COLS: usize = 7;

/// Length of a winning run
const CONNECT: usize = 4;

/// Direction vectors scanned for a winning run, as (row step, column step).
///
/// Rows grow downwards, so `(1, 1)` runs down-right and `(-1, 1)` up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A Connect Four player
///
/// Yellow is the canonical maximizing player: outcome values are +1 for a
/// Yellow win and -1 for a Red win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The minimizing player, written `R`
    Red,
    /// The maximizing player, written `Y`
    Yellow,
}

impl Player {
    /// Returns the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Character used for this player's pieces in the text format
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }

    /// Parses a player from its text symbol
    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol {
            'R' => Some(Player::Red),
            'Y' => Some(Player::Yellow),
            _ => None,
        }
    }

    /// Converts a canonical value into this player's perspective
    pub fn orient(self, canonical: f64) -> f64 {
        match self {
            Player::Yellow => canonical,
            Player::Red => -canonical,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A Connect Four move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// Column to drop the piece into (0-6)
    pub column: usize,
}

impl Move {
    /// Creates a move for the given column
    pub fn new(column: usize) -> Self {
        Move { column }
    }

    /// Every column in ascending order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..COLS).map(Move::new)
    }
}

impl fmt::Display for Move {
    /// Columns are shown 1-indexed, as in the report format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column + 1)
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Four in a row for this player
    Player(Player),
    /// Full board without four in a row
    Draw,
}

impl Winner {
    /// Canonical outcome: +1 Yellow win, -1 Red win, 0 draw
    pub fn canonical(self) -> i8 {
        match self {
            Winner::Player(Player::Yellow) => 1,
            Winner::Player(Player::Red) => -1,
            Winner::Draw => 0,
        }
    }

    /// Canonical outcome as a float, ready for accumulation
    pub fn value(self) -> f64 {
        f64::from(self.canonical())
    }

    /// Outcome from the perspective of `player`
    pub fn value_for(self, player: Player) -> f64 {
        player.orient(self.value())
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "{} wins", player),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

/// The 6x7 grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Builds a board from raw cells, top row first.
    ///
    /// The cells are taken as given; no gravity check is made.
    pub fn from_cells(cells: [[Option<Player>; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Returns the contents of a cell
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[row][column]
    }

    /// Returns true if a piece can still be dropped into the column
    pub fn is_open(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column].is_none()
    }

    /// Columns whose top cell is empty, in ascending order
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::all().filter(|mv| self.is_open(mv.column)).collect()
    }

    /// Returns true if every column is full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| !self.is_open(column))
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Drops a piece into the lowest empty cell of a column.
    ///
    /// Returns the row the piece landed in.
    pub fn drop_piece(&mut self, mv: Move, player: Player) -> Result<usize> {
        if mv.column >= COLS {
            return Err(EngineError::IllegalMove { column: mv.column });
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][mv.column].is_none())
            .ok_or(EngineError::IllegalMove { column: mv.column })?;

        self.cells[row][mv.column] = Some(player);
        Ok(row)
    }

    /// Returns the owner of a four-in-a-row, if any.
    ///
    /// Cells are scanned bottom row first, left to right.
    pub fn four_in_a_row(&self) -> Option<Player> {
        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                let Some(player) = self.cells[row][column] else {
                    continue;
                };

                for &(dr, dc) in &DIRECTIONS {
                    if self.run_length(row, column, dr, dc, player) >= CONNECT {
                        return Some(player);
                    }
                }
            }
        }
        None
    }

    /// Counts consecutive `player` cells starting at (row, column), capped at four
    fn run_length(&self, row: usize, column: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize, column as isize);

        while count < CONNECT
            && (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == Some(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }

    /// Returns the left-right mirror image of this board
    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Board { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Board plus the player to move.
///
/// Terminal status is recomputed from the board on every call and never
/// cached. Simulations work on clones, so the state handed to a driver is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Creates a state from a board and the player to move
    pub fn new(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    /// Empty board with `first` to move
    pub fn empty(first: Player) -> Self {
        Self::new(Board::new(), first)
    }

    /// The board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose piece the next `apply_move` places
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Legal moves in ascending column order
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    /// Returns true if the move's column is open
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.board.is_open(mv.column)
    }

    /// Places the current player's piece. The turn is left unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        self.board.drop_piece(mv, self.current_player)?;
        Ok(())
    }

    /// Hands the move to the opponent
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Applies a move and switches the turn
    pub fn play(&mut self, mv: Move) -> Result<()> {
        self.apply_move(mv)?;
        self.switch_turn();
        Ok(())
    }

    /// Winner of the game, `Draw` on a full board, `None` while it continues
    pub fn winner(&self) -> Option<Winner> {
        if let Some(player) = self.board.four_in_a_row() {
            return Some(Winner::Player(player));
        }
        if self.board.is_full() {
            return Some(Winner::Draw);
        }
        None
    }

    /// Returns true if the game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty(Player::Red)
    }
}
