// Title bar component
//
// Renders the app name, the recording source, and the recording's shape.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name
/// - Recording source (path, URL, or demo)
/// - Matcher and cell counts
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let recording = app.session.recording();
    let title_text = format!(
        " ⏪ retrace ──── {} │ {} matchers │ {} cells",
        app.source_label,
        recording.matchers.len(),
        recording.cell_count(),
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(title, area);
}
