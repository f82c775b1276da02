// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Dispatching input to the replay session

pub mod app;
pub mod components;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use app::{App, PAGE_STRIDE};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::logging::LogBuffer;
use crate::replay::ReplaySession;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, including on error paths out of the loop.
pub async fn run_tui(
    session: ReplaySession,
    source_label: String,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(session, source_label, log_buffer);
    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Redraws on every pass, then waits on whichever comes first: terminal
/// input or the periodic tick. The tick keeps the screen current after
/// resizes without a dedicated resize handler.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Windows terminals deliver Release events too; act on Press only.
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left => app.session.step_by(-1),
        KeyCode::Right => app.session.step_by(1),
        KeyCode::PageUp => app.session.step_by(-PAGE_STRIDE),
        KeyCode::PageDown => app.session.step_by(PAGE_STRIDE),
        KeyCode::Home | KeyCode::Char('g') => app.session.first(),
        KeyCode::End | KeyCode::Char('G') => app.session.last(),
        KeyCode::Char('l') => app.toggle_logs(),
        _ => {}
    }
}

/// Handle mouse input: click or drag on the scrub bar seeks, the wheel
/// steps one at a time anywhere on the screen.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            app.scrub_to(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => app.session.step_by(-1),
        MouseEventKind::ScrollDown => app.session.step_by(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    fn test_app() -> App {
        App::new(
            ReplaySession::new(demo::sample_recording()),
            "demo".to_string(),
            LogBuffer::new(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_step_and_saturate() {
        let mut app = test_app();
        let last = app.session.step_count() - 1;
        assert_eq!(app.session.step(), last);

        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.session.step(), last);

        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.session.step(), last - 1);

        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.session.step(), last);
    }

    #[test]
    fn page_keys_jump_by_the_stride() {
        let mut app = test_app();
        let last = app.session.step_count() - 1;

        handle_key_event(&mut app, press(KeyCode::PageUp));
        assert_eq!(app.session.step(), last - PAGE_STRIDE as usize);

        handle_key_event(&mut app, press(KeyCode::PageDown));
        assert_eq!(app.session.step(), last);
    }

    #[test]
    fn endpoint_keys() {
        let mut app = test_app();
        let last = app.session.step_count() - 1;

        handle_key_event(&mut app, press(KeyCode::Home));
        assert_eq!(app.session.step(), 0);
        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.session.step(), last);

        handle_key_event(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.session.step(), 0);
        handle_key_event(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.session.step(), last);
    }

    #[test]
    fn quit_keys_set_the_flag() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut app = test_app();
            handle_key_event(&mut app, press(code));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn logs_toggle() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('l')));
        assert!(app.show_logs);
        handle_key_event(&mut app, press(KeyCode::Char('l')));
        assert!(!app.show_logs);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        let before = app.session.step();
        handle_key_event(&mut app, release);
        assert_eq!(app.session.step(), before);
    }

    #[test]
    fn wheel_steps_through_the_recording() {
        let mut app = test_app();
        let last = app.session.step_count() - 1;

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(app.session.step(), last - 1);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(app.session.step(), last);
    }

    #[test]
    fn click_and_drag_seek_on_the_scrub_bar() {
        let mut app = test_app();
        app.scrub_area = Some(Rect::new(0, 20, 101, 1));

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 0, 20),
        );
        assert_eq!(app.session.step(), 0);

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), 100, 20),
        );
        assert_eq!(app.session.step(), app.session.step_count() - 1);
    }
}
