//! Shared constants for the diagram renderers (all in SVG user units = pixels).

// ── Guitar chord diagram ────────────────────────────────────────────
pub(super) const GUITAR_WIDTH: u32 = 1000;
pub(super) const GUITAR_HEIGHT: u32 = 1200;
pub(super) const GUITAR_GRID_X: f64 = 150.0;
pub(super) const GUITAR_GRID_Y: f64 = 250.0;
pub(super) const GUITAR_CELL_WIDTH: f64 = 140.0;
pub(super) const GUITAR_CELL_HEIGHT: f64 = 160.0;
pub(super) const GUITAR_FRET_COUNT: usize = 5;
pub(super) const GUITAR_NUT_THICKNESS: f64 = 25.0;
pub(super) const GUITAR_NUT_OVERHANG: f64 = 5.0;
pub(super) const GUITAR_FRET_WIDTH: f64 = 4.0;
pub(super) const GUITAR_DOT_RADIUS: f64 = 45.0;
pub(super) const GUITAR_MUTE_OFFSET_Y: f64 = 40.0; // above the nut
pub(super) const GUITAR_MUTE_SIZE: f64 = 60.0;
pub(super) const GUITAR_TITLE_SIZE: f64 = 140.0;
pub(super) const GUITAR_TITLE_Y: f64 = 160.0;
pub(super) const GUITAR_STRING_BASE: f64 = 2.0;
pub(super) const GUITAR_STRING_STEP: f64 = 1.5;

// ── Cifra chord panel ───────────────────────────────────────────────
pub(super) const PANEL_WIDTH: u32 = 400;
pub(super) const PANEL_HEIGHT: u32 = 500;
pub(super) const PANEL_GRID_X: f64 = 60.0;
pub(super) const PANEL_GRID_Y: f64 = 100.0;
pub(super) const PANEL_CELL_WIDTH: f64 = 56.0;
pub(super) const PANEL_CELL_HEIGHT: f64 = 64.0;
pub(super) const PANEL_NUT_THICKNESS: f64 = 10.0;
pub(super) const PANEL_NUT_OVERHANG: f64 = 2.0;
pub(super) const PANEL_FRET_WIDTH: f64 = 2.0;
pub(super) const PANEL_STRING_BASE: f64 = 1.0;
pub(super) const PANEL_STRING_STEP: f64 = 0.6;
pub(super) const PANEL_DOT_RADIUS: f64 = 18.0;
pub(super) const PANEL_DOT_OUTLINE_OPACITY: f64 = 0.2;
pub(super) const PANEL_OPEN_RING_OFFSET_Y: f64 = 25.0; // above the nut
pub(super) const PANEL_OPEN_RING_RADIUS: f64 = 6.0;
pub(super) const PANEL_OPEN_RING_WIDTH: f64 = 2.0;
pub(super) const PANEL_MUTE_OFFSET_Y: f64 = 20.0;
pub(super) const PANEL_MUTE_SIZE: f64 = 24.0;
pub(super) const PANEL_TITLE_SIZE: f64 = 50.0;
pub(super) const PANEL_TITLE_Y: f64 = 60.0;
pub(super) const PANEL_TITLE_SHADOW: f64 = 2.0;

// ── Piano keyboards ─────────────────────────────────────────────────
pub(super) const PIANO_WIDTH: u32 = 1200;
pub(super) const PIANO_HEIGHT: u32 = 1400;
pub(super) const SCALE_WIDTH: u32 = 1200;
pub(super) const SCALE_HEIGHT: u32 = 2100;
pub(super) const KEYBOARD_PADDING_X: f64 = 60.0;
pub(super) const KEYBOARD_TOP: f64 = 500.0;
pub(super) const KEYBOARD_HEIGHT: f64 = 380.0;
pub(super) const KEY_OUTLINE_WIDTH: f64 = 6.0;
pub(super) const BLACK_KEY_HEIGHT: f64 = 240.0;
pub(super) const BLACK_KEY_WIDTH_RATIO: f64 = 0.6;
pub(super) const BLACK_KEY_SHADOW_DX: f64 = 15.0;
pub(super) const BLACK_KEY_SHADOW_DY: f64 = 10.0;
pub(super) const BLACK_KEY_BEVEL: f64 = 15.0;
pub(super) const BLACK_KEY_SHINE_INSET: f64 = 5.0;

// ── Capsule labels ──────────────────────────────────────────────────
pub(super) const CAPSULE_HEIGHT: f64 = 130.0;
pub(super) const CAPSULE_WIDTH_RATIO: f64 = 0.7;
pub(super) const CAPSULE_BLACK_RATIO: f64 = 0.9; // black key capsules are narrower
pub(super) const CAPSULE_BORDER: f64 = 6.0;
pub(super) const CAPSULE_OFFSET_Y: f64 = 200.0; // below the keyboard

// ── Scale fingering box ─────────────────────────────────────────────
pub(super) const INFO_BOX_X: f64 = 50.0;
pub(super) const INFO_BOX_Y: f64 = 1600.0;
pub(super) const INFO_BOX_WIDTH: f64 = 950.0;
pub(super) const INFO_BOX_HEIGHT: f64 = 360.0;
pub(super) const INFO_BOX_RADIUS: f64 = 20.0;
pub(super) const INFO_HEADER_HEIGHT: f64 = 80.0;
pub(super) const INFO_VALUE_COLUMN: f64 = 450.0;

// ── Tablature ───────────────────────────────────────────────────────
pub(super) const TEXT_TAB_FONT_SIZE: f64 = 20.0;
pub(super) const TEXT_TAB_LINE_HEIGHT: u32 = 28;
pub(super) const TEXT_TAB_CHAR_WIDTH: u32 = 12; // monospace advance at 20px bold
pub(super) const TEXT_TAB_PADDING: u32 = 24;
pub(super) const TAB_GRID_WIDTH: u32 = 600;
pub(super) const TAB_GRID_HEIGHT: u32 = 180;
pub(super) const TAB_GRID_START_X: f64 = 40.0;
pub(super) const TAB_GRID_END_MARGIN: f64 = 10.0;
pub(super) const TAB_GRID_ROW_HEIGHT: f64 = 25.0;
pub(super) const TAB_GRID_COL_WIDTH: f64 = 60.0;
pub(super) const TAB_GRID_TOP: f64 = 20.0;
pub(super) const TAB_GRID_CHAR_WIDTH: f64 = 11.0; // bold 18px proportional, approximated

// ── Rhythm strip ────────────────────────────────────────────────────
pub(super) const RHYTHM_STEP_WIDTH: u32 = 50;
pub(super) const RHYTHM_HEIGHT: u32 = 80;
pub(super) const RHYTHM_PADDING: u32 = 10;
pub(super) const RHYTHM_ARROW_SIZE: f64 = 25.0;
pub(super) const RHYTHM_ARROW_HEAD: f64 = 12.0;
pub(super) const RHYTHM_MUTE_SIZE: f64 = 15.0;

// ── Fonts ───────────────────────────────────────────────────────────
pub(super) const TITLE_FONT: &str = "Lobster, cursive";
pub(super) const BODY_FONT: &str = "Poppins, sans-serif";
pub(super) const GLYPH_FONT: &str = "sans-serif";
pub(super) const MONO_FONT: &str = "Consolas, 'Courier New', monospace";

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#FFFFFF";
pub(super) const STRING_COLOR: &str = "#333";
pub(super) const NUT_COLOR: &str = "#111";
pub(super) const MUTE_COLOR: &str = "#555";
pub(super) const TITLE_COLOR: &str = "#333";
pub(super) const PANEL_TITLE_COLOR: &str = "#0277bd";
pub(super) const PANEL_TITLE_SHADOW_COLOR: &str = "#FFFFFF";
pub(super) const KEY_OUTLINE_COLOR: &str = "#222";
pub(super) const BLACK_KEY_COLOR: &str = "#1a1a1a";
pub(super) const CAPSULE_TEXT_COLOR: &str = "#000";
pub(super) const CHORD_NAME_COLOR: &str = "#90a4ae";
pub(super) const PIANO_BRAND_COLOR: &str = "#FFD700";
pub(super) const PIANO_BRAND_STROKE: &str = "#f57f17";
pub(super) const SCALE_BRAND_COLOR: &str = "#ff9800";
pub(super) const INFO_ACCENT_COLOR: &str = "#0288d1";
pub(super) const INFO_LABEL_COLOR: &str = "#555";
pub(super) const INFO_DIVIDER_COLOR: &str = "#eee";
pub(super) const INFO_WARNING_COLOR: &str = "#d32f2f";
pub(super) const PAUSE_COLOR: &str = "#9ca3af";

// ── Default brand lettering ─────────────────────────────────────────
pub(super) const PIANO_BRAND_TEXT: &str = "Starkids Music";
pub(super) const SCALE_BRAND_TEXT: &str = "Starkids Studio";
