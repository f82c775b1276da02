// Replay engine: recording playback state and per-step frame computation
//
// The session owns the loaded recording and the single piece of replay
// state, the current step index. Everything visual is derived on demand by
// `frame()`, so scrubbing in any direction or jumping to an arbitrary step
// always produces the same picture for the same step.

pub mod frame;
pub mod palette;

pub use frame::{Cell, LegendEntry, ReplayFrame};

use crate::recording::Recording;

/// Playback state over one loaded recording.
///
/// Construction requires a decoded (and therefore validated, non-empty)
/// `Recording`, so a session is always positioned on a real step.
pub struct ReplaySession {
    recording: Recording,
    step: usize,
}

impl ReplaySession {
    /// Open a recording, positioned on its final step. The last step shows
    /// the match outcome, which is what you want to see first when deciding
    /// whether a trace is worth stepping through.
    pub fn new(recording: Recording) -> Self {
        let step = recording.items.len() - 1;
        Self { recording, step }
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.recording.items.len()
    }

    /// Jump to a step, clamping past-the-end requests onto the final step.
    pub fn set_step(&mut self, step: usize) {
        self.step = step.min(self.recording.items.len() - 1);
    }

    /// Move relative to the current step, saturating at both ends.
    pub fn step_by(&mut self, delta: isize) {
        let step = self.step.saturating_add_signed(delta);
        self.set_step(step);
    }

    pub fn first(&mut self) {
        self.step = 0;
    }

    pub fn last(&mut self) {
        self.step = self.recording.items.len() - 1;
    }

    /// Compute the visual state for the current step.
    pub fn frame(&self) -> ReplayFrame<'_> {
        ReplayFrame::compute(&self.recording, self.step)
    }
}
