// Input strip component
//
// Renders the input as one row of cells (one per character plus the
// end-of-line sentinel), claim colors as cell backgrounds, and a caret row
// marking the scan cursor. Inputs wider than the panel are windowed
// horizontally so the cursor stays in view.

use crate::replay::{Cell, ReplayFrame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input strip and its caret row
pub fn render(f: &mut Frame, area: Rect, frame: &ReplayFrame) {
    let block = Block::default().borders(Borders::ALL).title(" Input ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let widths: Vec<usize> = frame.cells.iter().map(Cell::display_width).collect();
    let start = window_start(&widths, frame.cursor, inner.width as usize);

    let mut cell_spans = Vec::new();
    let mut used = 0;
    let mut caret_col = None;
    for (cell, width) in frame.cells.iter().zip(&widths).skip(start) {
        if used + width > inner.width as usize {
            break;
        }
        if cell.cursor {
            caret_col = Some(used);
        }
        cell_spans.push(cell_span(cell));
        used += width;
    }

    let mut lines = vec![Line::from(cell_spans)];
    if let Some(col) = caret_col {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(col)),
            Span::styled(
                "^",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn cell_span(cell: &Cell) -> Span<'static> {
    let mut style = Style::default();
    if let Some(color) = cell.color {
        style = style.bg(color).fg(Color::Black);
    }
    if cell.cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(cell.display_glyph().to_string(), style)
}

/// First visible cell: 0 when the whole strip fits, otherwise a window that
/// keeps the cursor near the center without leaving blank space at the
/// right edge.
fn window_start(widths: &[usize], cursor: usize, width: usize) -> usize {
    let total: usize = widths.iter().sum();
    if total <= width {
        return 0;
    }

    let before: usize = widths[..cursor].iter().sum();
    let start_col = before.saturating_sub(width / 2).min(total - width);

    let mut col = 0;
    for (i, w) in widths.iter().enumerate() {
        if col >= start_col {
            return i;
        }
        col += w;
    }
    widths.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_windowing_when_everything_fits() {
        let widths = vec![1; 10];
        assert_eq!(window_start(&widths, 9, 20), 0);
    }

    #[test]
    fn window_centers_the_cursor() {
        let widths = vec![1; 100];
        let start = window_start(&widths, 50, 20);
        assert_eq!(start, 40);
    }

    #[test]
    fn window_pins_to_the_left_edge() {
        let widths = vec![1; 100];
        assert_eq!(window_start(&widths, 0, 20), 0);
        assert_eq!(window_start(&widths, 5, 20), 0);
    }

    #[test]
    fn window_pins_to_the_right_edge() {
        let widths = vec![1; 100];
        assert_eq!(window_start(&widths, 99, 20), 80);
        assert_eq!(window_start(&widths, 95, 20), 80);
    }

    #[test]
    fn window_accounts_for_wide_cells() {
        let widths = vec![2; 10];
        // Columns run 0..20; the window left edge lands on a cell boundary.
        assert_eq!(window_start(&widths, 9, 10), 5);
    }
}
