use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::DashboardConfig;
use crate::ops::board::Board;
use crate::ops::infra::InfraDashboard;
use crate::tui::app::{App, Screen};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The fixed date used by render tests (a Monday)
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// Build an App around the given board on the planner screen.
pub fn app_with_board(board: Board) -> App {
    let config = DashboardConfig::default();
    App::new(board, InfraDashboard::new(&config.infra), &config)
}

/// Planner App with the sample data.
pub fn sample_app() -> App {
    app_with_board(Board::with_sample_data(test_date()))
}

/// Planner App with nothing on the board.
pub fn empty_app() -> App {
    app_with_board(Board::new(test_date()))
}

/// App on the infrastructure screen.
pub fn infra_app() -> App {
    let mut app = sample_app();
    app.screen = Screen::Infra;
    app
}
