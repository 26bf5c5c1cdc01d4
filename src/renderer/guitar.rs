//! Guitar chord diagram: strings, frets, nut, mute marks and coloured dots.
//!
//! Two looks share the drawing code and differ only in their layout: the
//! full-page studio card and the small transparent cifra panel.

use crate::config::RenderOptions;
use crate::model::{FretPosition, GuitarStyle, Tuning, STRING_COUNT};
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Geometry and colours of one guitar diagram look.
pub(super) struct GuitarLayout {
    pub(super) width: u32,
    pub(super) height: u32,
    grid_x: f64,
    grid_y: f64,
    cell_width: f64,
    cell_height: f64,
    nut_thickness: f64,
    nut_overhang: f64,
    fret_width: f64,
    string_base: f64,
    string_step: f64,
    dot_radius: f64,
    /// Outline opacity of fretted dots; `None` draws them flat.
    dot_outline: Option<f64>,
    /// Draw a ring above open strings.
    open_ring: bool,
    background: Option<&'static str>,
    mute_offset_y: f64,
    mute_size: f64,
    mute_font: &'static str,
    title_size: f64,
    title_y: f64,
    title_color: &'static str,
    /// White offset copy under the title.
    title_shadow: Option<f64>,
}

static STUDIO: GuitarLayout = GuitarLayout {
    width: GUITAR_WIDTH,
    height: GUITAR_HEIGHT,
    grid_x: GUITAR_GRID_X,
    grid_y: GUITAR_GRID_Y,
    cell_width: GUITAR_CELL_WIDTH,
    cell_height: GUITAR_CELL_HEIGHT,
    nut_thickness: GUITAR_NUT_THICKNESS,
    nut_overhang: GUITAR_NUT_OVERHANG,
    fret_width: GUITAR_FRET_WIDTH,
    string_base: GUITAR_STRING_BASE,
    string_step: GUITAR_STRING_STEP,
    dot_radius: GUITAR_DOT_RADIUS,
    dot_outline: None,
    open_ring: false,
    background: Some(BACKGROUND_COLOR),
    mute_offset_y: GUITAR_MUTE_OFFSET_Y,
    mute_size: GUITAR_MUTE_SIZE,
    mute_font: GLYPH_FONT,
    title_size: GUITAR_TITLE_SIZE,
    title_y: GUITAR_TITLE_Y,
    title_color: TITLE_COLOR,
    title_shadow: None,
};

static CIFRA: GuitarLayout = GuitarLayout {
    width: PANEL_WIDTH,
    height: PANEL_HEIGHT,
    grid_x: PANEL_GRID_X,
    grid_y: PANEL_GRID_Y,
    cell_width: PANEL_CELL_WIDTH,
    cell_height: PANEL_CELL_HEIGHT,
    nut_thickness: PANEL_NUT_THICKNESS,
    nut_overhang: PANEL_NUT_OVERHANG,
    fret_width: PANEL_FRET_WIDTH,
    string_base: PANEL_STRING_BASE,
    string_step: PANEL_STRING_STEP,
    dot_radius: PANEL_DOT_RADIUS,
    dot_outline: Some(PANEL_DOT_OUTLINE_OPACITY),
    open_ring: true,
    background: None,
    mute_offset_y: PANEL_MUTE_OFFSET_Y,
    mute_size: PANEL_MUTE_SIZE,
    mute_font: BODY_FONT,
    title_size: PANEL_TITLE_SIZE,
    title_y: PANEL_TITLE_Y,
    title_color: PANEL_TITLE_COLOR,
    title_shadow: Some(PANEL_TITLE_SHADOW),
};

pub(super) fn layout(style: GuitarStyle) -> &'static GuitarLayout {
    match style {
        GuitarStyle::Studio => &STUDIO,
        GuitarStyle::Cifra => &CIFRA,
    }
}

impl GuitarLayout {
    /// Centre of `fret` on `string`.
    fn dot_center(&self, string: usize, fret: u8) -> (f64, f64) {
        let x = self.grid_x + string as f64 * self.cell_width;
        let y = self.grid_y + fret as f64 * self.cell_height - self.cell_height / 2.0;
        (x, y)
    }

    /// Stroke width of string `i` (0 = low E). Bass strings are thicker.
    fn string_width(&self, i: usize) -> f64 {
        let string_num = (STRING_COUNT - i) as f64;
        self.string_base + string_num * self.string_step
    }
}

pub(super) fn draw_guitar(
    svg: &mut SvgBuilder,
    layout: &GuitarLayout,
    frets: &[FretPosition; STRING_COUNT],
    tuning: &Tuning,
    title: Option<&str>,
    options: &RenderOptions,
) {
    let width = layout.width as f64;

    if let Some(background) = layout.background {
        svg.rect(0.0, 0.0, width, layout.height as f64, background, "none", 0.0);
    }

    let grid_w = (STRING_COUNT - 1) as f64 * layout.cell_width;
    let grid_h = GUITAR_FRET_COUNT as f64 * layout.cell_height;

    // Strings
    for i in 0..STRING_COUNT {
        let x = layout.grid_x + i as f64 * layout.cell_width;
        svg.line(x, layout.grid_y, x, layout.grid_y + grid_h, STRING_COLOR, layout.string_width(i));
    }

    // Frets
    for i in 0..=GUITAR_FRET_COUNT {
        let y = layout.grid_y + i as f64 * layout.cell_height;
        svg.line(layout.grid_x, y, layout.grid_x + grid_w, y, STRING_COLOR, layout.fret_width);
    }

    // Nut
    svg.line(
        layout.grid_x - layout.nut_overhang,
        layout.grid_y,
        layout.grid_x + grid_w + layout.nut_overhang,
        layout.grid_y,
        NUT_COLOR,
        layout.nut_thickness,
    );

    for (i, position) in frets.iter().enumerate() {
        let x = layout.grid_x + i as f64 * layout.cell_width;
        match *position {
            FretPosition::Muted => {
                svg.styled_text(
                    x, layout.grid_y - layout.mute_offset_y, "X", layout.mute_size,
                    "bold", MUTE_COLOR, "middle", layout.mute_font, None,
                );
            }
            FretPosition::Open => {
                if layout.open_ring {
                    svg.outlined_circle(
                        x, layout.grid_y - PANEL_OPEN_RING_OFFSET_Y, PANEL_OPEN_RING_RADIUS,
                        "none", STRING_COLOR, PANEL_OPEN_RING_WIDTH, 1.0,
                    );
                }
            }
            FretPosition::Fretted(fret) => {
                let color = options.palette.color_for_pitch(tuning.pitch_at(i, fret));
                let (cx, cy) = layout.dot_center(i, fret);
                match layout.dot_outline {
                    Some(opacity) => {
                        svg.outlined_circle(cx, cy, layout.dot_radius, color, "#000", 1.0, opacity)
                    }
                    None => svg.circle(cx, cy, layout.dot_radius, color),
                }
            }
        }
    }

    if let Some(title) = title {
        if let Some(offset) = layout.title_shadow {
            svg.styled_text(
                width / 2.0 + offset, layout.title_y + offset, title, layout.title_size,
                "bold", PANEL_TITLE_SHADOW_COLOR, "middle", TITLE_FONT, None,
            );
        }
        svg.styled_text(
            width / 2.0, layout.title_y, title, layout.title_size,
            "bold", layout.title_color, "middle", TITLE_FONT, None,
        );
    }
}

/// Short chord symbol shown as a title: `"C (Dó Maior)"` → `"C"`.
pub(crate) fn chord_symbol(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}
