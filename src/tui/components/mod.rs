// Components module - reusable UI building blocks
//
// Each component renders one region of the single replay screen:
// - Title bar: app name, recording source, recording shape
// - Legend: matcher labels, colors, and current claims
// - Input strip: the cell row with claim paint and the caret row
// - Scrub bar: step gauge, doubles as the click-to-seek surface
// - Status bar: key hints
// - Logs panel: captured log entries (toggleable)

pub mod input_strip;
pub mod legend;
pub mod logs_panel;
pub mod scrub_bar;
pub mod status_bar;
pub mod title_bar;
