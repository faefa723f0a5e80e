use crate::config::AppConfig;
use crate::game::{Engine, GameStatus, Outcome, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    engine: Engine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            engine: Engine::new(),
            selected_column: config.ui.start_column.min(COLS - 1),
            config,
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Display name configured for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        self.config.players.name_for(player)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_rate_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as usize) - ('1' as usize);
                self.drop_token();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.engine.is_over() {
                    self.new_game();
                } else {
                    self.drop_token();
                }
            }
            KeyCode::Char('n') if self.engine.is_over() => {
                self.new_game();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.engine.reset();
        self.selected_column = self.config.ui.start_column.min(COLS - 1);
        self.message = Some("New game started!".to_string());
    }

    /// Drop a token in the selected column and react to the outcome.
    fn drop_token(&mut self) {
        match self.engine.drop_token(self.selected_column) {
            Ok(Outcome::Placed { .. }) => {
                if self.engine.board().is_full() {
                    self.message = Some(board_full_message());
                }
            }
            Ok(Outcome::Win { player, .. }) => {
                self.message = Some(format!("{} wins!", self.player_name(player)));
            }
            Ok(Outcome::ColumnFull) => {
                self.message = Some(if self.engine.board().is_full() {
                    board_full_message()
                } else {
                    "Column is full!".to_string()
                });
            }
            Ok(Outcome::Rejected) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(e) => {
                warn!("drop failed: {}", e);
                self.message = Some(e.to_string());
            }
        }
    }

    /// Winner of the current game, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.engine.status() {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

fn board_full_message() -> String {
    "Board is full with no winner. Press 'r' for a new game.".to_string()
}
