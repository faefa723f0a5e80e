//! # Connect Four
//!
//! A two-player Connect Four game on a fixed 6×7 grid with a terminal UI
//! built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine (drop, win check, reset)
//! - [`ui`] — Terminal UI: game view, input handling, winner banner
//! - [`headless`] — Scripted replay of a move list with a text transcript
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod ui;
