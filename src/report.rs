//! Text report of a decision
//!
//! Downstream scripts parse these lines, so the prefixes, 1-indexed columns
//! and two-decimal formatting are fixed:
//!
//! ```text
//! Column 1: 0.25
//! Column 2: Null
//! ...
//! FINAL Move selected: 4
//! ```

use std::io::{self, Write};

use crate::{
    config::{Algorithm, Verbosity},
    decision::Decision,
    game_state::{GameState, Move, Winner},
};

/// Writes the report for `decision`, made from `initial`, at the given verbosity
pub fn write_report<W: Write>(
    out: &mut W,
    initial: &GameState,
    decision: &Decision,
    verbosity: Verbosity,
) -> io::Result<()> {
    if decision.algorithm == Algorithm::UniformRandom {
        return write_game_report(out, initial, decision, verbosity);
    }

    if verbosity == Verbosity::Verbose {
        for event in &decision.trace {
            writeln!(out, "{}", event)?;
        }
    }

    if verbosity >= Verbosity::Brief {
        write_column_values(out, decision)?;
    }

    write_final_move(out, decision.chosen)
}

/// One `Column <n>: <value>` line per column
pub fn write_column_values<W: Write>(out: &mut W, decision: &Decision) -> io::Result<()> {
    for (column, value) in decision.column_values.iter().enumerate() {
        match value {
            Some(value) => writeln!(out, "Column {}: {}", column + 1, format_value(*value))?,
            None => writeln!(out, "Column {}: Null", column + 1)?,
        }
    }
    Ok(())
}

/// Two decimals, with negative zero shown as `0.00`
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

fn write_final_move<W: Write>(out: &mut W, chosen: Option<Move>) -> io::Result<()> {
    match chosen {
        Some(mv) => writeln!(out, "FINAL Move selected: {}", mv),
        None => writeln!(out, "FINAL Move selected: None"),
    }
}

fn write_game_report<W: Write>(
    out: &mut W,
    initial: &GameState,
    decision: &Decision,
    verbosity: Verbosity,
) -> io::Result<()> {
    if verbosity >= Verbosity::Brief {
        writeln!(out, "Starting Connect Four game with Uniform Random strategy...")?;
        write!(out, "{}", initial.board())?;
    }

    let Some(record) = &decision.game else {
        return write_final_move(out, decision.chosen);
    };

    if verbosity == Verbosity::Verbose {
        let mut game = initial.clone();
        for &(player, mv) in &record.moves {
            if game.play(mv).is_err() {
                break;
            }
            // the winning move is reported only through the result line
            if matches!(game.winner(), Some(Winner::Player(_))) {
                break;
            }
            writeln!(out)?;
            writeln!(out, "{} played column {}", player, mv)?;
            write!(out, "{}", game.board())?;
        }
    }

    write_final_move(out, decision.chosen)?;
    writeln!(out, "Total moves played: {}", record.moves.len())?;
    writeln!(out, "Final result: {}", record.result)
}
