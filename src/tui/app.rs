// Application state
//
// App owns the replay session plus the small set of UI flags the event loop
// and components share. All mutation happens on the event loop task.

use ratatui::layout::Rect;

use crate::logging::LogBuffer;
use crate::replay::ReplaySession;

/// How many steps PageUp/PageDown jump.
pub const PAGE_STRIDE: isize = 10;

pub struct App {
    pub session: ReplaySession,

    /// Where the recording came from, for the title bar.
    pub source_label: String,

    /// Shared with the tracing layer; the logs panel reads it per frame.
    pub log_buffer: LogBuffer,

    pub show_logs: bool,
    pub should_quit: bool,

    /// Scrub bar rectangle from the last draw, for click-to-seek. None until
    /// the first frame has been drawn.
    pub scrub_area: Option<Rect>,
}

impl App {
    pub fn new(session: ReplaySession, source_label: String, log_buffer: LogBuffer) -> Self {
        Self {
            session,
            source_label,
            log_buffer,
            show_logs: false,
            should_quit: false,
            scrub_area: None,
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Map a mouse position on the scrub bar to a step and jump there. The
    /// bar's left edge is the first step and its right edge the last;
    /// positions outside the bar are ignored.
    pub fn scrub_to(&mut self, column: u16, row: u16) {
        let Some(area) = self.scrub_area else { return };
        if row < area.y || row >= area.y + area.height {
            return;
        }
        if column < area.x || column >= area.x + area.width || area.width <= 1 {
            return;
        }

        let offset = (column - area.x) as usize;
        let span = (area.width - 1) as usize;
        let last = self.session.step_count() - 1;
        let step = (offset * last + span / 2) / span;
        self.session.set_step(step);
    }
}
