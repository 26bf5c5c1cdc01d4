//! Tablature images: pasted ASCII tabs and the hand-entered tab grid.

use crate::catalog::TAB_STRINGS;
use crate::cifra::{TabGrid, TAB_GRID_COLUMNS};
use super::constants::*;
use super::svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// ASCII tablature
// ═══════════════════════════════════════════════════════════════════════

const TAB_BACKGROUND: &str = "#f0f9ff";
const TAB_BORDER: &str = "#b3e5fc";
const TAB_LINE_COLOR: &str = "#4fc3f7";
const TAB_NOTE_COLOR: &str = "#01579b";
const TAB_TEXT_COLOR: &str = "#0277bd";

/// What a character of an ASCII tab represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TabGlyph {
    /// Fret numbers and technique marks (hammer-on, pull-off, bend, slide...).
    Note,
    /// Staff structure: dashes, bars, plus signs, underscores.
    Line,
    /// Anything else: string names, lyrics, spacing.
    Text,
}

pub(crate) fn classify(c: char) -> TabGlyph {
    match c.to_ascii_lowercase() {
        '0'..='9' | 'h' | 'p' | 'b' | 'r' | 'x' | 's' | '/' | '\\' | '~' | '^' => TabGlyph::Note,
        '-' | '|' | '+' | '_' => TabGlyph::Line,
        _ => TabGlyph::Text,
    }
}

fn glyph_color(glyph: TabGlyph) -> &'static str {
    match glyph {
        TabGlyph::Note => TAB_NOTE_COLOR,
        TabGlyph::Line => TAB_LINE_COLOR,
        TabGlyph::Text => TAB_TEXT_COLOR,
    }
}

/// Lines of a pasted tab, with Windows line endings stripped.
pub(super) fn tab_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|l| l.trim_end_matches('\r')).collect()
}

/// Surface size for a pasted tab: monospace cells plus padding.
pub(super) fn text_tab_size(lines: &[&str]) -> (u32, u32) {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let width = longest * TEXT_TAB_CHAR_WIDTH + TEXT_TAB_PADDING * 2;
    let height = lines.len() as u32 * TEXT_TAB_LINE_HEIGHT + TEXT_TAB_PADDING * 2;
    (width, height)
}

pub(super) fn draw_text_tab(svg: &mut SvgBuilder, lines: &[&str], width: u32, height: u32) {
    svg.rounded_rect(2.0, 2.0, width as f64 - 4.0, height as f64 - 4.0, 16.0, TAB_BACKGROUND, TAB_BORDER, 2.0);

    let char_w = TEXT_TAB_CHAR_WIDTH as f64;
    let pad = TEXT_TAB_PADDING as f64;
    for (line_idx, line) in lines.iter().enumerate() {
        let y = pad + line_idx as f64 * TEXT_TAB_LINE_HEIGHT as f64;
        for (col, c) in line.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let x = pad + col as f64 * char_w;
            let mut buf = [0u8; 4];
            svg.styled_text(
                x, y, c.encode_utf8(&mut buf), TEXT_TAB_FONT_SIZE, "bold",
                glyph_color(classify(c)), "start", MONO_FONT, Some("hanging"),
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Tab grid
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn draw_tab_grid(svg: &mut SvgBuilder, grid: &TabGrid) {
    let right = TAB_GRID_WIDTH as f64 - TAB_GRID_END_MARGIN;

    for (r, row) in grid.rows().enumerate() {
        let y = TAB_GRID_TOP + r as f64 * TAB_GRID_ROW_HEIGHT;

        svg.styled_text(
            TAB_GRID_START_X - 10.0, y, TAB_STRINGS[r], 18.0, "bold",
            TAB_TEXT_COLOR, "end", BODY_FONT, Some("central"),
        );
        svg.line(TAB_GRID_START_X, y, right, y, STRING_COLOR, 2.0);

        for (c, value) in row.iter().enumerate().take(TAB_GRID_COLUMNS) {
            if value.is_empty() {
                continue;
            }
            let x = TAB_GRID_START_X + TAB_GRID_COL_WIDTH / 2.0 + c as f64 * TAB_GRID_COL_WIDTH;
            // White box so the string line does not cross the number.
            let bg_w = value.chars().count() as f64 * TAB_GRID_CHAR_WIDTH + 8.0;
            let bg_h = 20.0;
            svg.rect(x - bg_w / 2.0, y - bg_h / 2.0, bg_w, bg_h, "white", "none", 0.0);
            svg.styled_text(x, y + 1.0, value, 18.0, "bold", "#000", "middle", BODY_FONT, Some("central"));
        }
    }

    let bottom = TAB_GRID_TOP + (TAB_STRINGS.len() - 1) as f64 * TAB_GRID_ROW_HEIGHT;
    svg.line(TAB_GRID_START_X, TAB_GRID_TOP, TAB_GRID_START_X, bottom, STRING_COLOR, 4.0);
    svg.line(right, TAB_GRID_TOP, right, bottom, STRING_COLOR, 4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_are_classified_like_a_tab_reader_would() {
        assert_eq!(classify('7'), TabGlyph::Note);
        assert_eq!(classify('H'), TabGlyph::Note);
        assert_eq!(classify('/'), TabGlyph::Note);
        assert_eq!(classify('-'), TabGlyph::Line);
        assert_eq!(classify('|'), TabGlyph::Line);
        assert_eq!(classify('e'), TabGlyph::Text);
        assert_eq!(classify('B'), TabGlyph::Note);
        assert_eq!(classify('G'), TabGlyph::Text);
    }

    #[test]
    fn size_follows_longest_line() {
        let lines = tab_lines("e|--0--|\r\nB|-1-|");
        assert_eq!(lines, vec!["e|--0--|", "B|-1-|"]);
        assert_eq!(text_tab_size(&lines), (8 * 12 + 48, 2 * 28 + 48));
    }
}
