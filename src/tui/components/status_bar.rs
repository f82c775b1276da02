// Status bar component
//
// Renders the key hints at the bottom of the screen.

use crate::tui::app::{App, PAGE_STRIDE};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with key hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let logs_state = if app.show_logs { " (on)" } else { "" };
    let status_text = format!(
        " ←/→ step │ PgUp/PgDn ±{PAGE_STRIDE} │ Home/End first/last │ l logs{logs_state} │ q quit",
    );

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
