//! Terminal UI: reads engine state after every call and draws the board,
//! turn indicator, transient messages and the winner banner.

mod app;
mod game_view;

pub use app::App;
