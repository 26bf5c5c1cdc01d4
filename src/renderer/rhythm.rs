//! Strumming pattern strip: arrows for strokes, a cross for mutes, a dash
//! for rests.

use crate::cifra::RhythmMove;
use crate::palette::Palette;
use super::constants::*;
use super::svg_builder::SvgBuilder;

pub(super) fn rhythm_size(moves: usize) -> (u32, u32) {
    (moves as u32 * RHYTHM_STEP_WIDTH + RHYTHM_PADDING * 2, RHYTHM_HEIGHT)
}

fn arrow(cx: f64, cy: f64, downward: bool) -> String {
    let (tail, tip, head_dir) = if downward {
        (cy - RHYTHM_ARROW_SIZE, cy + RHYTHM_ARROW_SIZE, -1.0)
    } else {
        (cy + RHYTHM_ARROW_SIZE, cy - RHYTHM_ARROW_SIZE, 1.0)
    };
    let head_y = tip + head_dir * RHYTHM_ARROW_HEAD;
    format!(
        "M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1}",
        cx, tail, cx, tip,
        cx - RHYTHM_ARROW_HEAD, head_y, cx, tip, cx + RHYTHM_ARROW_HEAD, head_y,
    )
}

pub(super) fn draw_rhythm(svg: &mut SvgBuilder, moves: &[RhythmMove], palette: &Palette) {
    let step = RHYTHM_STEP_WIDTH as f64;
    let cy = RHYTHM_HEIGHT as f64 / 2.0;

    for (i, m) in moves.iter().enumerate() {
        let cx = RHYTHM_PADDING as f64 + i as f64 * step + step / 2.0;
        match m {
            RhythmMove::Down => svg.stroke_path(&arrow(cx, cy, true), palette.color_for_letter('A'), 6.0),
            RhythmMove::Up => svg.stroke_path(&arrow(cx, cy, false), palette.color_for_letter('D'), 6.0),
            RhythmMove::Mute => {
                let s = RHYTHM_MUTE_SIZE;
                let d = format!(
                    "M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}",
                    cx - s, cy - s, cx + s, cy + s,
                    cx + s, cy - s, cx - s, cy + s,
                );
                svg.stroke_path(&d, palette.color_for_letter('B'), 5.0);
            }
            RhythmMove::Pause => {
                let d = format!("M{:.1},{:.1} L{:.1},{:.1}", cx - 8.0, cy, cx + 8.0, cy);
                svg.stroke_path(&d, PAUSE_COLOR, 4.0);
            }
        }
    }
}
