//! Piano keyboard and capsule labels, shared by chord and scale diagrams.

use crate::catalog::{black_key_gaps, black_key_names, white_key_letter, WHITE_KEY_COUNT};
use crate::model::{KeyClass, KeyPosition};
use crate::palette::Palette;
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// How inactive white keys are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WhiteKeyFinish {
    /// Plain white.
    Flat,
    /// White with grey edges.
    Shaded,
}

/// Horizontal geometry of the keyboard for a given page width.
#[derive(Debug, Clone, Copy)]
pub(super) struct KeyboardGeometry {
    pub(super) start_x: f64,
    pub(super) key_width: f64,
}

impl KeyboardGeometry {
    pub(super) fn for_page(page_width: f64) -> Self {
        Self {
            start_x: KEYBOARD_PADDING_X,
            key_width: (page_width - KEYBOARD_PADDING_X * 2.0) / WHITE_KEY_COUNT as f64,
        }
    }

    pub(super) fn white_key_x(&self, index: usize) -> f64 {
        self.start_x + index as f64 * self.key_width
    }

    pub(super) fn black_key_width(&self) -> f64 {
        self.key_width * BLACK_KEY_WIDTH_RATIO
    }

    /// Centre of the black key in `gap` (the boundary between two white keys).
    pub(super) fn black_key_center(&self, gap: usize) -> f64 {
        self.start_x + (gap + 1) as f64 * self.key_width
    }

    /// Horizontal centre of any key.
    pub(super) fn key_center(&self, key: KeyPosition) -> f64 {
        let index = key.index as usize;
        match key.class {
            KeyClass::White => self.white_key_x(index) + self.key_width / 2.0,
            KeyClass::Black => self.black_key_center(index),
        }
    }
}

fn is_active(active: &[KeyPosition], key: KeyPosition) -> bool {
    active.contains(&key)
}

pub(super) fn draw_keyboard(
    svg: &mut SvgBuilder,
    geo: &KeyboardGeometry,
    active: &[KeyPosition],
    palette: &Palette,
    finish: WhiteKeyFinish,
) {
    let top = KEYBOARD_TOP;
    let key_w = geo.key_width;

    // White keys
    for i in 0..WHITE_KEY_COUNT {
        let kx = geo.white_key_x(i);
        if is_active(active, KeyPosition::white(i as u8)) {
            let color = palette.color_for_letter(white_key_letter(i));
            svg.rect(kx, top, key_w, KEYBOARD_HEIGHT, color, "none", 0.0);
            let gloss = svg.horizontal_gradient("white-key-gloss", &[
                (0.0, "#000000", 0.2),
                (0.1, "#ffffff", 0.2),
                (0.5, "#ffffff", 0.0),
                (0.9, "#ffffff", 0.2),
                (1.0, "#000000", 0.2),
            ]);
            svg.rect(kx, top, key_w, KEYBOARD_HEIGHT, &gloss, "none", 0.0);
        } else {
            match finish {
                WhiteKeyFinish::Flat => {
                    svg.rect(kx, top, key_w, KEYBOARD_HEIGHT, "#ffffff", "none", 0.0);
                }
                WhiteKeyFinish::Shaded => {
                    let shade = svg.horizontal_gradient("white-key-shade", &[
                        (0.0, "#dbdbdb", 1.0),
                        (0.1, "#ffffff", 1.0),
                        (0.9, "#ffffff", 1.0),
                        (1.0, "#dbdbdb", 1.0),
                    ]);
                    svg.rect(kx, top, key_w, KEYBOARD_HEIGHT, &shade, "none", 0.0);
                }
            }
        }
        svg.rect(kx, top, key_w, KEYBOARD_HEIGHT, "none", KEY_OUTLINE_COLOR, KEY_OUTLINE_WIDTH);
    }

    // Black keys
    let bk_w = geo.black_key_width();
    let bk_h = BLACK_KEY_HEIGHT;
    for gap in black_key_gaps() {
        let bx = geo.black_key_center(gap) - bk_w / 2.0;

        svg.shade_rect(bx + BLACK_KEY_SHADOW_DX, top + BLACK_KEY_SHADOW_DY, bk_w, bk_h, "#000000", 0.2);

        if is_active(active, KeyPosition::black(gap as u8)) {
            // Black keys take the colour of the natural they sharpen.
            let color = palette.color_for_letter(white_key_letter(gap));
            svg.rect(bx, top, bk_w, bk_h, color, "none", 0.0);
            let shine = svg.horizontal_gradient("black-key-shine-active", &[
                (0.0, "#000000", 0.3),
                (0.2, "#ffffff", 0.3),
                (0.8, "#ffffff", 0.3),
                (1.0, "#000000", 0.3),
            ]);
            svg.rect(bx, top, bk_w, bk_h, &shine, "none", 0.0);
            svg.shade_rect(bx, top + bk_h - BLACK_KEY_BEVEL, bk_w, BLACK_KEY_BEVEL, "#000000", 0.4);
        } else {
            svg.rect(bx, top, bk_w, bk_h, BLACK_KEY_COLOR, "none", 0.0);
            let shine = svg.horizontal_gradient("black-key-shine", &[
                (0.0, "#333333", 1.0),
                (0.2, "#111111", 1.0),
                (0.8, "#111111", 1.0),
                (1.0, "#333333", 1.0),
            ]);
            svg.rect(
                bx + BLACK_KEY_SHINE_INSET, top,
                bk_w - BLACK_KEY_SHINE_INSET * 2.0, bk_h - BLACK_KEY_BEVEL,
                &shine, "none", 0.0,
            );
            svg.rect(bx, top + bk_h - BLACK_KEY_BEVEL, bk_w, BLACK_KEY_BEVEL, "#000", "none", 0.0);
        }
    }

    // Outer border
    svg.rect(
        geo.start_x, top, key_w * WHITE_KEY_COUNT as f64, KEYBOARD_HEIGHT,
        "none", KEY_OUTLINE_COLOR, KEY_OUTLINE_WIDTH,
    );
}

/// Label lines for a capsule: one letter for white keys, sharp over flat for
/// black keys. `None` for keys that are not on the keyboard.
pub(super) fn capsule_label(key: KeyPosition) -> Option<Vec<String>> {
    let index = key.index as usize;
    match key.class {
        KeyClass::White if index < WHITE_KEY_COUNT => Some(vec![white_key_letter(index).to_string()]),
        KeyClass::White => None,
        KeyClass::Black => black_key_names(index).map(|names| names.iter().map(|n| n.to_string()).collect()),
    }
}

/// Draw one capsule: white outline, coloured body, black lettering.
fn draw_capsule(svg: &mut SvgBuilder, cx: f64, cy: f64, w: f64, h: f64, color: &str, lines: &[String]) {
    let x = cx - w / 2.0;
    let y = cy - h / 2.0;
    let radius = w / 2.0;

    let shadow = svg.drop_shadow("capsule-shadow", 4.0, 10.0, 0.3);
    svg.group_start(&shadow);
    svg.rounded_rect(
        x - CAPSULE_BORDER, y - CAPSULE_BORDER,
        w + CAPSULE_BORDER * 2.0, h + CAPSULE_BORDER * 2.0,
        radius + CAPSULE_BORDER, "#FFF", "none", 0.0,
    );
    svg.rounded_rect(x, y, w, h, radius, color, "none", 0.0);
    svg.group_end();

    match lines {
        [single] => {
            let size = (w * 0.5).floor();
            svg.styled_text(cx, cy, single, size, "bold", CAPSULE_TEXT_COLOR, "middle", TITLE_FONT, Some("central"));
        }
        [upper, lower, ..] => {
            let size = (w * 0.35).floor();
            svg.styled_text(cx, cy - size * 0.6, upper, size, "bold", CAPSULE_TEXT_COLOR, "middle", TITLE_FONT, Some("central"));
            svg.styled_text(cx, cy + size * 0.6, lower, size, "bold", CAPSULE_TEXT_COLOR, "middle", TITLE_FONT, Some("central"));
        }
        [] => {}
    }
}

/// Capsules below every active key: white keys first, then black keys,
/// each in the order the chord lists them.
pub(super) fn draw_capsules(svg: &mut SvgBuilder, geo: &KeyboardGeometry, active: &[KeyPosition], palette: &Palette) {
    let labels_y = KEYBOARD_TOP + KEYBOARD_HEIGHT + CAPSULE_OFFSET_Y;
    let ordered = active
        .iter()
        .filter(|k| !k.is_black())
        .chain(active.iter().filter(|k| k.is_black()));

    for key in ordered {
        let Some(lines) = capsule_label(*key) else {
            continue;
        };
        let width = if key.is_black() {
            geo.key_width * CAPSULE_WIDTH_RATIO * CAPSULE_BLACK_RATIO
        } else {
            geo.key_width * CAPSULE_WIDTH_RATIO
        };
        let color = palette.color_for_letter(white_key_letter(key.index as usize));
        draw_capsule(svg, geo.key_center(*key), labels_y, width, CAPSULE_HEIGHT, color, &lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_keys_straddle_white_key_boundaries() {
        let geo = KeyboardGeometry::for_page(1200.0);
        let boundary = geo.white_key_x(1);
        assert_eq!(geo.key_center(KeyPosition::black(0)), boundary);
    }

    #[test]
    fn capsule_labels_follow_the_table() {
        assert_eq!(capsule_label(KeyPosition::white(7)), Some(vec!["C".to_string()]));
        assert_eq!(
            capsule_label(KeyPosition::black(5)),
            Some(vec!["A#".to_string(), "Bb".to_string()])
        );
        assert_eq!(capsule_label(KeyPosition::black(2)), None);
        assert_eq!(capsule_label(KeyPosition::white(20)), None);
    }
}
