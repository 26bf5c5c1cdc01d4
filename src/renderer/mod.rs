//! Diagram renderer: turns catalog entries and cifra inputs into SVG
//! snapshots.
//!
//! Every render draws onto a fresh fixed-size surface and returns the
//! finished snapshot. Output depends only on the inputs, so rendering the
//! same selection twice yields byte-identical documents.

mod constants;
mod svg_builder;
mod guitar;
mod keyboard;
mod piano;
mod tablature;
mod rhythm;
mod compose;

use log::{debug, warn};

use crate::catalog::{guitar_chord, piano_chord, piano_scale, GUITAR_TUNING};
use crate::cifra::{RhythmPattern, TabGrid};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::model::*;
use crate::palette::Palette;
use constants::*;
use svg_builder::DiagramSurface;

pub(crate) use guitar::chord_symbol;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a guitar chord from the catalog.
///
/// Names the catalog does not know render the all-muted diagram without a
/// title.
pub fn render_guitar_chord(name: &str, options: &RenderOptions) -> Snapshot {
    match guitar_chord(name) {
        Some(chord) => {
            debug!("rendering guitar chord {}", chord.name);
            let title = options.show_title.then(|| chord_symbol(chord.name));
            render_guitar_frets(&chord.frets, &GUITAR_TUNING, title, options)
        }
        None => {
            warn!("unknown guitar chord '{}', drawing muted diagram", name);
            render_guitar_frets(&GuitarChord::MUTED, &GUITAR_TUNING, None, options)
        }
    }
}

/// Render an arbitrary fret shape on any tuning, in the look chosen by
/// `options.guitar_style`.
pub fn render_guitar_frets(
    frets: &[FretPosition; STRING_COUNT],
    tuning: &Tuning,
    title: Option<&str>,
    options: &RenderOptions,
) -> Snapshot {
    let layout = guitar::layout(options.guitar_style);
    let mut surface = DiagramSurface::page(layout.width, layout.height);
    guitar::draw_guitar(surface.svg(), layout, frets, tuning, title, options);
    surface.into_snapshot()
}

/// Render a piano chord. `None` (or an unknown name) draws the keyboard
/// with no key highlighted.
pub fn render_piano_chord(name: Option<&str>, options: &RenderOptions) -> Snapshot {
    let chord = name.and_then(|n| {
        let found = piano_chord(n);
        if found.is_none() {
            warn!("unknown piano chord '{}', drawing empty keyboard", n);
        }
        found
    });

    let mut surface = DiagramSurface::page(PIANO_WIDTH, PIANO_HEIGHT);
    match chord {
        Some(chord) => {
            debug!("rendering piano chord {}", chord.name);
            let title = options.show_title.then_some(chord.name);
            piano::draw_piano(surface.svg(), chord.keys, title, options);
        }
        None => piano::draw_piano(surface.svg(), &[], None, options),
    }
    surface.into_snapshot()
}

/// Render an arbitrary set of highlighted keys on the chord page.
pub fn render_piano_keys(keys: &[KeyPosition], title: Option<&str>, options: &RenderOptions) -> Snapshot {
    let mut surface = DiagramSurface::page(PIANO_WIDTH, PIANO_HEIGHT);
    piano::draw_piano(surface.svg(), keys, title, options);
    surface.into_snapshot()
}

/// Render a piano scale with its fingering box. `None` (or an unknown
/// name) draws the bare keyboard.
pub fn render_piano_scale(name: Option<&str>, options: &RenderOptions) -> Snapshot {
    let scale = name.and_then(|n| {
        let found = piano_scale(n);
        if found.is_none() {
            warn!("unknown scale '{}', drawing empty keyboard", n);
        }
        found
    });
    if let Some(scale) = scale {
        debug!("rendering scale {}", scale.name);
    }

    let mut surface = DiagramSurface::page(SCALE_WIDTH, SCALE_HEIGHT);
    piano::draw_scale(surface.svg(), scale, options);
    surface.into_snapshot()
}

/// Render whatever `instrument` draws for `name`.
///
/// Guitar diagrams always show a chord: no selection means the muted shape.
pub fn render_diagram(instrument: Instrument, name: Option<&str>, options: &RenderOptions) -> Snapshot {
    match instrument {
        Instrument::Guitar => render_guitar_chord(name.unwrap_or(""), options),
        Instrument::Piano => render_piano_chord(name, options),
        Instrument::Scale => render_piano_scale(name, options),
    }
}

/// Pixel size of the diagrams `instrument` produces with default options.
pub fn diagram_size(instrument: Instrument) -> (u32, u32) {
    match instrument {
        Instrument::Guitar => guitar_size(GuitarStyle::default()),
        Instrument::Piano => (PIANO_WIDTH, PIANO_HEIGHT),
        Instrument::Scale => (SCALE_WIDTH, SCALE_HEIGHT),
    }
}

/// Pixel size of a guitar diagram in the given look.
pub fn guitar_size(style: GuitarStyle) -> (u32, u32) {
    let layout = guitar::layout(style);
    (layout.width, layout.height)
}

/// Render pasted ASCII tablature. Blank input yields `None`.
pub fn render_text_tab(text: &str) -> Option<Snapshot> {
    if text.trim().is_empty() {
        return None;
    }
    let lines = tablature::tab_lines(text);
    let (width, height) = tablature::text_tab_size(&lines);
    let mut surface = DiagramSurface::acquire(width, height)?;
    tablature::draw_text_tab(surface.svg(), &lines, width, height);
    debug!("rendered {} tab lines at {}x{}", lines.len(), width, height);
    Some(surface.into_snapshot())
}

/// Render the hand-entered tab grid. An empty grid yields `None`.
pub fn render_tab_grid(grid: &TabGrid) -> Option<Snapshot> {
    if grid.is_empty() {
        return None;
    }
    let mut surface = DiagramSurface::acquire(TAB_GRID_WIDTH, TAB_GRID_HEIGHT)?;
    tablature::draw_tab_grid(surface.svg(), grid);
    Some(surface.into_snapshot())
}

/// Render a strumming pattern. An empty pattern yields `None`.
pub fn render_rhythm(pattern: &RhythmPattern, palette: &Palette) -> Option<Snapshot> {
    if pattern.is_empty() {
        return None;
    }
    let (width, height) = rhythm::rhythm_size(pattern.len());
    let mut surface = DiagramSurface::acquire(width, height)?;
    rhythm::draw_rhythm(surface.svg(), pattern.moves(), palette);
    Some(surface.into_snapshot())
}

/// Lay snapshots out left to right, `gap` pixels apart, without scaling.
/// An empty slice yields `Ok(None)`.
pub fn compose_strip(items: &[&Snapshot], gap: u32) -> Result<Option<Snapshot>> {
    compose::compose_horizontal(items, gap)
}
