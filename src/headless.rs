//! Scripted play without a terminal UI: feed a list of columns through a
//! fresh engine and write a plain-text transcript.

use std::io::Write;

use anyhow::{Context, Result};

use crate::game::{Engine, Outcome};

/// Play `moves` (Red first) and write one line per outcome followed by the
/// final board. Moves after a win are not played. An out-of-range column
/// aborts with an error once the lines for earlier moves are written.
///
/// Returns the engine in its final state.
pub fn replay<W: Write>(moves: &[usize], out: &mut W) -> Result<Engine> {
    let mut engine = Engine::new();

    for (turn, &column) in moves.iter().enumerate() {
        let player = engine.current_player();
        let outcome = engine
            .drop_token(column)
            .with_context(|| format!("move {} (column {})", turn + 1, column))?;

        match outcome {
            Outcome::Placed { row, col } => {
                writeln!(out, "{:>3}. {} -> ({}, {})", turn + 1, player, row, col)?;
            }
            Outcome::Win { player, row, col } => {
                writeln!(out, "{:>3}. {} -> ({}, {})", turn + 1, player, row, col)?;
                writeln!(out, "{} wins!", player)?;
                break;
            }
            Outcome::ColumnFull => {
                writeln!(out, "{:>3}. {} -> column {} is full", turn + 1, player, column)?;
            }
            Outcome::Rejected => {
                writeln!(out, "{:>3}. {} -> rejected, game is over", turn + 1, player)?;
            }
        }
    }

    writeln!(out, "{}", engine.board())?;
    Ok(engine)
}
