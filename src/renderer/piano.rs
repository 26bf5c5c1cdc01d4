//! Piano chord and piano scale pages.

use crate::config::RenderOptions;
use crate::model::{KeyPosition, PianoScale};
use super::constants::*;
use super::keyboard::{draw_capsules, draw_keyboard, KeyboardGeometry, WhiteKeyFinish};
use super::svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Chord page
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn draw_piano(svg: &mut SvgBuilder, active: &[KeyPosition], title: Option<&str>, options: &RenderOptions) {
    let width = PIANO_WIDTH as f64;
    let height = PIANO_HEIGHT as f64;
    let geo = KeyboardGeometry::for_page(width);

    svg.rect(0.0, 0.0, width, height, BACKGROUND_COLOR, "none", 0.0);

    draw_keyboard(svg, &geo, active, &options.palette, WhiteKeyFinish::Flat);
    if options.show_capsules {
        draw_capsules(svg, &geo, active, &options.palette);
    }

    if options.show_brand {
        let brand = options.brand_text.as_deref().unwrap_or(PIANO_BRAND_TEXT);
        svg.outlined_text(width / 2.0, 220.0, brand, 120.0, PIANO_BRAND_COLOR, PIANO_BRAND_STROKE, 4.0, TITLE_FONT);
    }

    if let Some(title) = title {
        svg.text(width - 60.0, height - 50.0, title, 60.0, "normal", CHORD_NAME_COLOR, "end");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Scale page
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn draw_scale(svg: &mut SvgBuilder, scale: Option<&PianoScale>, options: &RenderOptions) {
    let width = SCALE_WIDTH as f64;
    let height = SCALE_HEIGHT as f64;
    let geo = KeyboardGeometry::for_page(width);
    let active: &[KeyPosition] = scale.map(|s| s.keys).unwrap_or(&[]);

    svg.rect(0.0, 0.0, width, height, BACKGROUND_COLOR, "none", 0.0);

    draw_keyboard(svg, &geo, active, &options.palette, WhiteKeyFinish::Shaded);
    if options.show_capsules {
        draw_capsules(svg, &geo, active, &options.palette);
    }

    if options.show_brand {
        let brand = options.brand_text.as_deref().unwrap_or(SCALE_BRAND_TEXT);
        svg.styled_text(width / 2.0, 180.0, brand, 120.0, "normal", SCALE_BRAND_COLOR, "middle", TITLE_FONT, Some("central"));
    }

    let Some(scale) = scale else {
        return;
    };

    if options.show_title {
        svg.text(width - 50.0, height - 50.0, scale.name, 60.0, "bold", TITLE_COLOR, "end");
    }
    draw_fingering_box(svg, scale);
}

/// "TABELA DE DEDILHADO": left hand, right hand and accidentals.
fn draw_fingering_box(svg: &mut SvgBuilder, scale: &PianoScale) {
    let (x, y) = (INFO_BOX_X, INFO_BOX_Y);
    let (w, h) = (INFO_BOX_WIDTH, INFO_BOX_HEIGHT);
    let r = INFO_BOX_RADIUS;

    let shadow = svg.drop_shadow("info-box-shadow", 5.0, 20.0, 0.15);
    svg.group_start(&shadow);
    svg.rounded_rect(x, y, w, h, r, "#ffffff", "none", 0.0);
    svg.group_end();

    // Header band, rounded on top only.
    let header = format!(
        "M{:.1},{:.1} L{:.1},{:.1} Q{:.1},{:.1} {:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Q{:.1},{:.1} {:.1},{:.1} Z",
        x + r, y,
        x + w - r, y,
        x + w, y, x + w, y + r,
        x + w, y + INFO_HEADER_HEIGHT,
        x, y + INFO_HEADER_HEIGHT,
        x, y + r,
        x, y, x + r, y,
    );
    svg.path(&header, INFO_ACCENT_COLOR, "none", 0.0);
    svg.text(x + 40.0, y + 55.0, "TABELA DE DEDILHADO", 40.0, "bold", "#ffffff", "start");

    let label_x = x + 40.0;
    let value_x = x + INFO_VALUE_COLUMN;
    let rows = [
        (y + 150.0, "Mão Esquerda:", scale.fingering_left, INFO_LABEL_COLOR, "#000", 40.0),
        (y + 230.0, "Mão Direita:", scale.fingering_right, INFO_LABEL_COLOR, "#000", 40.0),
        (y + 310.0, "Acidentes:", scale.accidentals, INFO_WARNING_COLOR, INFO_WARNING_COLOR, 35.0),
    ];

    for (i, (row_y, label, value, label_color, value_color, value_size)) in rows.iter().enumerate() {
        svg.text(label_x, *row_y, label, 35.0, "bold", label_color, "start");
        svg.text(value_x, *row_y, value, *value_size, "normal", value_color, "start");
        if i + 1 < rows.len() {
            svg.line(x + 30.0, row_y + 30.0, x + w - 30.0, row_y + 30.0, INFO_DIVIDER_COLOR, 2.0);
        }
    }

    svg.rounded_rect(x, y, w, h, r, "none", INFO_ACCENT_COLOR, 2.0);
}
