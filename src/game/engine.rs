use log::{debug, info};

use super::{Board, Cell, Player, COLS};
use crate::error::EngineError;

/// Whether the current game is still being played.
///
/// A board that fills up without a winner stays `InProgress`; there is no
/// draw state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// Result of a single [`Engine::drop_token`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Token landed at (row, col) and the turn passed to the other player.
    Placed { row: usize, col: usize },
    /// Token landed at (row, col) and completed a line for `player`.
    Win { player: Player, row: usize, col: usize },
    /// The column has no empty cell. Nothing changed.
    ColumnFull,
    /// The game is already decided. Nothing changed.
    Rejected,
}

/// Owned state of one game session: the grid, whose turn it is, and whether
/// someone has won.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Engine {
    /// Empty board, Red to move.
    pub fn new() -> Self {
        Engine {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            status: GameStatus::InProgress,
        }
    }

    /// Player whose token the next successful drop places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Token at an on-board cell.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        if !Board::in_bounds(row, col) {
            return Err(EngineError::InvalidCell { row, col });
        }
        Ok(self.board.get(row, col))
    }

    /// Drop the current player's token into `column`.
    ///
    /// Either the whole place/check/switch sequence happens or nothing does.
    /// An out-of-range column is an error; a full column or a finished game is
    /// reported through the returned [`Outcome`].
    pub fn drop_token(&mut self, column: usize) -> Result<Outcome, EngineError> {
        if self.is_over() {
            debug!("drop into column {} rejected: game over", column);
            return Ok(Outcome::Rejected);
        }

        if column >= COLS {
            return Err(EngineError::InvalidColumn { column });
        }

        let player = self.current_player;
        let Some(row) = self.board.drop_piece(column, player.to_cell()) else {
            debug!("column {} is full", column);
            return Ok(Outcome::ColumnFull);
        };
        debug!("{} placed at ({}, {})", player, row, column);

        if self.board.check_win(row, column) {
            self.status = GameStatus::Won(player);
            info!("{} wins at ({}, {})", player, row, column);
            return Ok(Outcome::Win {
                player,
                row,
                col: column,
            });
        }

        self.current_player = player.other();
        Ok(Outcome::Placed { row, col: column })
    }

    /// Start over: empty board, Red to move, game in progress.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Red;
        self.status = GameStatus::InProgress;
        info!("game reset");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    #[test]
    fn test_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.current_player(), Player::Red);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(!engine.is_over());
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_drop_token() {
        let mut engine = Engine::new();
        let outcome = engine.drop_token(3).unwrap();

        assert_eq!(outcome, Outcome::Placed { row: 5, col: 3 });
        assert_eq!(engine.current_player(), Player::Yellow);
        assert_eq!(engine.cell_at(5, 3), Ok(Cell::Red));
    }

    #[test]
    fn test_vertical_win_on_seventh_drop() {
        let mut engine = Engine::new();
        for col in [0, 1, 0, 1, 0, 1] {
            assert!(matches!(
                engine.drop_token(col).unwrap(),
                Outcome::Placed { .. }
            ));
        }

        let outcome = engine.drop_token(0).unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::Red,
                row: 2,
                col: 0
            }
        );
        assert_eq!(engine.status(), GameStatus::Won(Player::Red));
        // Turn marker stays with the winner
        assert_eq!(engine.current_player(), Player::Red);
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = Engine::new();

        // Red wins along the bottom row
        for col in 0..3 {
            engine.drop_token(col).unwrap(); // Red
            engine.drop_token(col).unwrap(); // Yellow, one row up
        }
        let outcome = engine.drop_token(3).unwrap();

        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::Red,
                row: 5,
                col: 3
            }
        );
    }

    #[test]
    fn test_yellow_can_win() {
        let mut engine = Engine::new();
        for col in [6, 0, 6, 0, 5, 0, 6] {
            engine.drop_token(col).unwrap();
        }
        let outcome = engine.drop_token(0).unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::Yellow,
                row: 2,
                col: 0
            }
        );
        assert_eq!(engine.status(), GameStatus::Won(Player::Yellow));
    }

    #[test]
    fn test_column_full_changes_nothing() {
        let mut engine = Engine::new();
        for _ in 0..ROWS {
            engine.drop_token(0).unwrap();
        }
        let before = engine.clone();

        assert_eq!(engine.drop_token(0).unwrap(), Outcome::ColumnFull);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_rejected_after_win() {
        let mut engine = Engine::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop_token(col).unwrap();
        }
        let board = *engine.board();

        for col in 0..COLS {
            assert_eq!(engine.drop_token(col).unwrap(), Outcome::Rejected);
        }
        // Rejected even for a column that would otherwise be invalid
        assert_eq!(engine.drop_token(COLS + 3).unwrap(), Outcome::Rejected);
        assert_eq!(engine.board(), &board);
        assert_eq!(engine.current_player(), Player::Red);
    }

    #[test]
    fn test_invalid_column() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.drop_token(COLS),
            Err(EngineError::InvalidColumn { column: COLS })
        );
        assert_eq!(engine, Engine::new());
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let engine = Engine::new();
        assert_eq!(
            engine.cell_at(ROWS, 0),
            Err(EngineError::InvalidCell { row: ROWS, col: 0 })
        );
        assert_eq!(
            engine.cell_at(0, COLS),
            Err(EngineError::InvalidCell { row: 0, col: COLS })
        );
        assert_eq!(engine.cell_at(ROWS - 1, COLS - 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_reset() {
        let mut engine = Engine::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop_token(col).unwrap();
        }
        assert!(engine.is_over());

        engine.reset();
        assert_eq!(engine, Engine::new());
        assert_eq!(engine.drop_token(4).unwrap(), Outcome::Placed { row: 5, col: 4 });
    }

    #[test]
    fn test_reset_mid_game_restores_red() {
        let mut engine = Engine::new();
        engine.drop_token(2).unwrap();
        assert_eq!(engine.current_player(), Player::Yellow);

        engine.reset();
        assert_eq!(engine.current_player(), Player::Red);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}
