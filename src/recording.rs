// Recording wire format
//
// A recording is the immutable artifact the regex engine emits: the list of
// sub-matcher labels, the input string it scanned, and one step snapshot per
// engine tick. This module owns the serde decode of that artifact and the
// fail-fast validation that runs once at the trust boundary, so everything
// downstream (frame computation, painting) can index without re-checking.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Half-open cell range `[start, end)` claimed by one matcher at one step.
///
/// On the wire this is a 2-element integer array; `start == end` means the
/// matcher holds no claim at this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Claim {
    pub start: usize,
    pub end: usize,
}

impl Claim {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A claim that paints nothing.
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Claim {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Claim> for (usize, usize) {
    fn from(claim: Claim) -> Self {
        (claim.start, claim.end)
    }
}

/// One recorded snapshot of the engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Scan cursor position in the input, measured in chars. Equal to the
    /// input length when the engine sits on end-of-line.
    pub string_pos: usize,

    /// One claim per matcher, same order as `Recording::matchers`.
    pub matcher_state: Vec<Claim>,
}

/// A complete recorded run, decoded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Sub-matcher labels in engine order. The order is significant: it is
    /// both the color-assignment order and the legend order.
    pub matchers: Vec<String>,

    /// The text the engine scanned. Cells are indexed per char, matching the
    /// engine's per-code-point positions.
    pub input_string: String,

    /// Step snapshots, earliest first. Never empty in a valid recording.
    pub items: Vec<Step>,
}

impl Recording {
    /// Decode a recording from raw JSON bytes and validate it.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let recording: Recording = serde_json::from_slice(bytes)?;
        recording.validate()?;
        Ok(recording)
    }

    /// Number of display cells: one per char plus the end-of-line sentinel.
    pub fn cell_count(&self) -> usize {
        self.input_string.chars().count() + 1
    }

    /// Check the structural invariants the producer is contractually bound
    /// to. Runs exactly once, right after decode; the replay pipeline relies
    /// on these holding and indexes claims without bounds checks.
    ///
    /// `string_pos` is deliberately not range-checked here: the renderer
    /// clamps it onto the sentinel cell, which is the reference behavior for
    /// positions at (or past) end-of-line.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            bail!("recording has no steps");
        }

        let cell_count = self.cell_count();
        for (step_idx, step) in self.items.iter().enumerate() {
            if step.matcher_state.len() != self.matchers.len() {
                bail!(
                    "step {}: {} matcher states for {} matchers",
                    step_idx,
                    step.matcher_state.len(),
                    self.matchers.len()
                );
            }
            for (matcher_idx, claim) in step.matcher_state.iter().enumerate() {
                if claim.start > claim.end {
                    bail!(
                        "step {}, matcher {}: inverted claim [{}, {})",
                        step_idx,
                        matcher_idx,
                        claim.start,
                        claim.end
                    );
                }
                if claim.end > cell_count {
                    bail!(
                        "step {}, matcher {}: claim [{}, {}) exceeds {} cells",
                        step_idx,
                        matcher_idx,
                        claim.start,
                        claim.end,
                        cell_count
                    );
                }
            }
        }

        Ok(())
    }
}
