// Fixed matcher color palette
//
// Five colors, assigned by matcher index modulo the palette size. The
// assignment depends only on position, so a matcher keeps its color across
// steps and re-renders.

use ratatui::style::Color;

/// Matcher colors in assignment order: red, green, blue, yellow, cyan.
pub const PALETTE: [Color; 5] = [
    Color::Rgb(0xdd, 0x38, 0x38),
    Color::Rgb(0x38, 0xcc, 0x38),
    Color::Rgb(0x38, 0x38, 0xcc),
    Color::Rgb(0xcc, 0xcc, 0x38),
    Color::Rgb(0x38, 0xcc, 0xcc),
];

/// Assign one color per matcher, cycling through the palette by index.
///
/// Pure function of `matcher_count`: every call for the same recording
/// assigns identical colors, so the legend and the painted cells can never
/// disagree within a frame.
pub fn matcher_colors(matcher_count: usize) -> Vec<Color> {
    (0..matcher_count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}
