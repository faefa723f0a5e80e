use super::App;
use crate::game::{Board, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(
        frame,
        app.engine().board(),
        app.selected_column(),
        app.config().ui.show_column_numbers,
        chunks[1],
    );
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);

    if let Some(winner) = app.winner() {
        render_winner_banner(frame, app.player_name(winner), winner, chunks[1]);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let engine = app.engine();
    let (status, color) = match app.winner() {
        Some(winner) => (
            format!("Game Over  |  {} wins", app.player_name(winner)),
            player_color(winner),
        ),
        None => {
            let current = engine.current_player();
            (
                format!("Current Player: {}", app.player_name(current)),
                player_color(current),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    show_column_numbers: bool,
    area: Rect,
) {
    let mut lines = Vec::new();

    if show_column_numbers {
        // Column numbers with selection indicator
        let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
        for col in 0..COLS {
            if col == selected_column {
                col_line.push(Span::styled(
                    format!(" {} ", col + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
            } else {
                col_line.push(Span::raw(format!(" {} ", col + 1)));
            }
        }
        col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
        lines.push(Line::from(col_line));
    }

    let width = COLS * 3 + 1;
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(width))));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match Player::from_cell(board.get(row, col)) {
                Some(owner) => (" ● ", player_color(owner)),
                None => (" . ", Color::DarkGray),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(width))));

    // Drop indicator under the selected column
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  1-7/Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Popup over the board announcing the winner and offering a new game.
fn render_winner_banner(frame: &mut Frame, name: &str, winner: Player, area: Rect) {
    let popup = centered_rect(36, 5, area);
    let color = player_color(winner);

    let text = vec![
        Line::from(Span::styled(
            format!("{} has won!", name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("N / Enter: New game"),
    ];

    let banner = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title("Game Over"),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(banner, popup);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_current_player() {
        let app = App::default();
        let text = screen_text(&app);
        assert!(text.contains("Current Player: Red"));
        assert!(text.contains("Connect Four"));
        assert!(!text.contains("has won!"));
    }

    #[test]
    fn test_renders_winner_banner() {
        let mut app = App::default();
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        let text = screen_text(&app);
        assert!(text.contains("Red has won!"));
        assert!(text.contains("New game"));
        assert!(text.contains("Game Over"));
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 3);
        let rect = centered_rect(36, 5, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 3));

        let area = Rect::new(2, 4, 40, 10);
        let rect = centered_rect(36, 5, area);
        assert_eq!(rect, Rect::new(4, 6, 36, 5));
    }
}
