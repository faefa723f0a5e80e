//! Core Connect Four game logic: board representation, player types, and the
//! engine that applies drops, detects wins and resets.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{Engine, GameStatus, Outcome};
pub use player::Player;
