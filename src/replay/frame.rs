// Per-step visual state
//
// This is the replay pipeline's core: project the input string into display
// cells, paint each matcher's claimed range over them, and drop the cursor
// marker. A ReplayFrame is recomputed from scratch for every render, so no
// paint or cursor markup can leak between steps.

use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

use super::palette::matcher_colors;
use crate::recording::{Claim, Recording};

/// One renderable unit of the input strip: a character of the input, or the
/// trailing end-of-line sentinel (`glyph: None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The input character this cell displays; `None` for the sentinel.
    pub glyph: Option<char>,

    /// Background paint from the highest-indexed matcher claiming this cell.
    pub color: Option<Color>,

    /// Whether the scan cursor sits on this cell.
    pub cursor: bool,
}

impl Cell {
    fn character(glyph: char) -> Self {
        Self {
            glyph: Some(glyph),
            color: None,
            cursor: false,
        }
    }

    fn sentinel() -> Self {
        Self {
            glyph: None,
            color: None,
            cursor: false,
        }
    }

    /// Glyph to draw for this cell. The sentinel shows as a blank cell, and
    /// control characters (the recorded input may contain newlines) are
    /// substituted so every cell occupies at least one column.
    pub fn display_glyph(&self) -> char {
        match self.glyph {
            None => ' ',
            Some(c) if c.is_control() => '·',
            Some(c) => c,
        }
    }

    /// Terminal columns this cell occupies.
    pub fn display_width(&self) -> usize {
        self.display_glyph().width().unwrap_or(1).max(1)
    }
}

/// One legend row: a matcher's label and its assigned color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub color: Color,
}

/// The complete visual state for one step: everything the display needs,
/// and nothing mutable. Pure function of (recording, step index).
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame<'a> {
    /// The rendered step index.
    pub step: usize,

    /// Total steps in the recording.
    pub step_count: usize,

    /// Cursor cell index, already clamped into the cell range.
    pub cursor: usize,

    /// One cell per input char plus the sentinel, painted and marked.
    pub cells: Vec<Cell>,

    /// One entry per matcher, in recording order.
    pub legend: Vec<LegendEntry<'a>>,

    /// The step's claims, for textual display alongside the strip.
    pub claims: &'a [Claim],
}

/// Build the cell sequence for an input string: one cell per char, in order,
/// plus the end-of-line sentinel. Always freshly allocated.
pub fn project_cells(input: &str) -> Vec<Cell> {
    let mut cells: Vec<Cell> = input.chars().map(Cell::character).collect();
    cells.push(Cell::sentinel());
    cells
}

/// Paint each matcher's claimed range with its color, in ascending matcher
/// order so later matchers overwrite earlier ones on overlap. Empty claims
/// paint nothing. Claim bounds were validated at decode time and are not
/// re-checked here.
pub fn paint_claims(cells: &mut [Cell], claims: &[Claim], colors: &[Color]) {
    for (claim, color) in claims.iter().zip(colors) {
        for cell in &mut cells[claim.start..claim.end] {
            cell.color = Some(*color);
        }
    }
}

/// Mark the scan cursor, clamped onto the last (sentinel) cell when the
/// recorded position sits at or past end-of-line. Returns the marked index.
pub fn mark_cursor(cells: &mut [Cell], string_pos: usize) -> usize {
    let adjusted = string_pos.min(cells.len() - 1);
    cells[adjusted].cursor = true;
    adjusted
}

impl<'a> ReplayFrame<'a> {
    /// Compute the frame for one step. `step` must be in range; the session
    /// clamps all user-driven indices before calling this.
    pub fn compute(recording: &'a Recording, step: usize) -> Self {
        let colors = matcher_colors(recording.matchers.len());

        let legend = recording
            .matchers
            .iter()
            .zip(&colors)
            .map(|(label, color)| LegendEntry {
                label,
                color: *color,
            })
            .collect();

        let item = &recording.items[step];
        let mut cells = project_cells(&recording.input_string);
        paint_claims(&mut cells, &item.matcher_state, &colors);
        let cursor = mark_cursor(&mut cells, item.string_pos);

        Self {
            step,
            step_count: recording.items.len(),
            cursor,
            cells,
            legend,
            claims: &item.matcher_state,
        }
    }

    /// Render the frame as plain text: step header, the input line, a caret
    /// line under the cursor cell, then one line per matcher with its claim.
    /// This is the headless (`--dump`) projection and keeps stdout usable in
    /// pipes; colors only exist in the TUI rendering.
    pub fn to_text(&self) -> String {
        let mut out = format!("step {}/{}\n", self.step + 1, self.step_count);

        for cell in &self.cells {
            if cell.glyph.is_some() {
                out.push(cell.display_glyph());
            }
        }
        out.push('\n');

        // Caret column = display width of everything left of the cursor cell.
        let caret_col: usize = self.cells[..self.cursor]
            .iter()
            .map(Cell::display_width)
            .sum();
        for _ in 0..caret_col {
            out.push(' ');
        }
        out.push_str("^\n");

        let label_width = self
            .legend
            .iter()
            .map(|entry| entry.label.chars().count())
            .max()
            .unwrap_or(0);
        for (entry, claim) in self.legend.iter().zip(self.claims) {
            let range = if claim.is_empty() {
                "-".to_string()
            } else {
                format!("[{}, {})", claim.start, claim.end)
            };
            out.push_str(&format!(
                "{:<width$}  {}\n",
                entry.label,
                range,
                width = label_width
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::palette::PALETTE;

    #[test]
    fn projects_one_cell_per_char_plus_sentinel() {
        let cells = project_cells("ab");
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].glyph, Some('a'));
        assert_eq!(cells[1].glyph, Some('b'));
        assert_eq!(cells[2].glyph, None);
        assert!(cells.iter().all(|c| c.color.is_none() && !c.cursor));
    }

    #[test]
    fn projects_chars_not_bytes() {
        let cells = project_cells("héllo");
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1].glyph, Some('é'));
    }

    #[test]
    fn empty_input_is_just_the_sentinel() {
        let cells = project_cells("");
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].glyph, None);
    }

    #[test]
    fn later_matcher_wins_overlap() {
        let mut cells = project_cells("abc");
        let claims = [Claim::new(0, 3), Claim::new(1, 2)];
        let colors = matcher_colors(2);
        paint_claims(&mut cells, &claims, &colors);

        assert_eq!(cells[0].color, Some(colors[0]));
        assert_eq!(cells[1].color, Some(colors[1]));
        assert_eq!(cells[2].color, Some(colors[0]));
    }

    #[test]
    fn empty_claim_paints_nothing() {
        let mut cells = project_cells("abc");
        let claims = [Claim::new(2, 2)];
        paint_claims(&mut cells, &claims, &matcher_colors(1));
        assert!(cells.iter().all(|c| c.color.is_none()));
    }

    #[test]
    fn claim_may_cover_sentinel() {
        let mut cells = project_cells("ab");
        let claims = [Claim::new(0, 3)];
        paint_claims(&mut cells, &claims, &matcher_colors(1));
        assert_eq!(cells[2].color, Some(PALETTE[0]));
    }

    #[test]
    fn cursor_lands_on_exact_cell() {
        let mut cells = project_cells("ab");
        assert_eq!(mark_cursor(&mut cells, 1), 1);
        assert!(cells[1].cursor);
        assert_eq!(cells.iter().filter(|c| c.cursor).count(), 1);
    }

    #[test]
    fn cursor_at_end_of_line_sits_on_sentinel() {
        let mut cells = project_cells("ab");
        assert_eq!(mark_cursor(&mut cells, 2), 2);
        assert!(cells[2].cursor);
    }

    #[test]
    fn cursor_past_end_clamps_to_sentinel() {
        let mut cells = project_cells("ab");
        assert_eq!(mark_cursor(&mut cells, 5), 2);
        assert!(cells[2].cursor);
    }

    #[test]
    fn control_chars_display_substituted() {
        let cells = project_cells("a\nb");
        assert_eq!(cells[1].glyph, Some('\n'));
        assert_eq!(cells[1].display_glyph(), '·');
        assert_eq!(cells[1].display_width(), 1);
    }

    #[test]
    fn text_dump_places_caret_after_ascii() {
        let recording = Recording {
            matchers: vec!["A".to_string()],
            input_string: "ab".to_string(),
            items: vec![crate::recording::Step {
                string_pos: 2,
                matcher_state: vec![Claim::new(0, 1)],
            }],
        };
        let frame = ReplayFrame::compute(&recording, 0);
        let text = frame.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step 1/1");
        assert_eq!(lines[1], "ab");
        assert_eq!(lines[2], "  ^");
        assert_eq!(lines[3], "A  [0, 1)");
    }

    #[test]
    fn text_dump_caret_accounts_for_wide_chars() {
        let recording = Recording {
            matchers: vec![],
            input_string: "日x".to_string(),
            items: vec![crate::recording::Step {
                string_pos: 1,
                matcher_state: vec![],
            }],
        };
        let frame = ReplayFrame::compute(&recording, 0);
        let caret_line = frame.to_text().lines().nth(2).unwrap().to_string();
        // The CJK char occupies two columns, so the caret sits at column 2.
        assert_eq!(caret_line, "  ^");
    }
}
