// Scrub bar component
//
// Renders the step position as a gauge. The gauge's inner rectangle is
// recorded on the App so mouse clicks and drags can seek; the event loop
// maps positions back to steps.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

/// Render the step gauge
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title(" Step ");
    app.scrub_area = Some(block.inner(area));

    let step = app.session.step();
    let count = app.session.step_count();
    let percent = if count > 1 {
        (step * 100 / (count - 1)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(Color::Cyan)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(format!("step {} / {}", step + 1, count));

    f.render_widget(gauge, area);
}
