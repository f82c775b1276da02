// Legend component
//
// Renders one row per matcher in recording order: a swatch in the matcher's
// assigned color, its label, and the range it claims at the current step.

use crate::replay::ReplayFrame;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the matcher legend
///
/// Shows:
/// - A colored swatch per matcher (colors repeat when the palette runs out)
/// - The matcher's label
/// - The claimed range at this step, or "-" when the claim is empty
pub fn render(f: &mut Frame, area: Rect, frame: &ReplayFrame) {
    let label_width = frame
        .legend
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = frame
        .legend
        .iter()
        .zip(frame.claims)
        .map(|(entry, claim)| {
            let range = if claim.is_empty() {
                "-".to_string()
            } else {
                format!("[{}, {})", claim.start, claim.end)
            };

            ListItem::new(Line::from(vec![
                Span::styled("██ ", Style::default().fg(entry.color)),
                Span::styled(
                    format!("{:<width$}", entry.label, width = label_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {range}")),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Matchers "));

    f.render_widget(list, area);
}
