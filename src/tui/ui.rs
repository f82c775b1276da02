// UI rendering logic
//
// Lays out the single replay screen and dispatches each region to its
// component. Called on every frame; everything shown is derived from the
// session's current step.

use super::app::App;
use super::components::{input_strip, legend, logs_panel, scrub_bar, status_bar, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let matcher_rows = app.session.recording().matchers.len() as u16;

    // Vertical sections: title, legend (one row per matcher), input strip,
    // optional logs, scrub bar, status bar.
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(matcher_rows + 2),
        Constraint::Min(4),
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let frame = app.session.frame();
    title_bar::render(f, chunks[0], app);
    legend::render(f, chunks[1], &frame);
    input_strip::render(f, chunks[2], &frame);

    let mut next = 3;
    if app.show_logs {
        logs_panel::render(f, chunks[next], app);
        next += 1;
    }
    scrub_bar::render(f, chunks[next], app);
    status_bar::render(f, chunks[next + 1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::logging::{LogBuffer, LogEntry, LogLevel};
    use crate::replay::ReplaySession;
    use ratatui::{backend::TestBackend, Terminal};

    fn demo_app() -> App {
        App::new(
            ReplaySession::new(demo::sample_recording()),
            "demo".to_string(),
            LogBuffer::new(),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_the_full_screen() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = demo_app();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("retrace"));
        assert!(text.contains("Matchers"));
        assert!(text.contains("Input"));
        assert!(text.contains("step"));

        // The draw recorded the scrub surface for mouse seeking.
        assert!(app.scrub_area.is_some());
    }

    #[test]
    fn logs_panel_appears_when_toggled() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = demo_app();
        app.log_buffer.add(LogEntry {
            timestamp: chrono::Utc::now(),
            level: LogLevel::Info,
            message: "recording loaded".to_string(),
        });

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(!buffer_text(&terminal).contains("recording loaded"));

        app.toggle_logs();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains("recording loaded"));
    }

    #[test]
    fn survives_tiny_terminals() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut app = demo_app();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
