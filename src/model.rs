//! Data model for instrument diagrams.
//!
//! Pitch classes, tunings, fret and key positions, catalog entries and the
//! rendered snapshots that widgets keep in their strips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Sharp spellings of the twelve pitch classes, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

// ═══════════════════════════════════════════════════════════════════════
// Pitch classes and tuning
// ═══════════════════════════════════════════════════════════════════════

/// One of the twelve equal-tempered pitch classes. Always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any integer, reducing it modulo 12.
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Move by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Sharp spelling, e.g. `"F#"`.
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// The natural letter this pitch class is coloured by (`C#` → `C`).
    pub fn natural_letter(self) -> char {
        self.name().chars().next().unwrap_or('C')
    }
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes, indexed the way chord arrays are (low E first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tuning([u8; STRING_COUNT]);

impl Tuning {
    /// E A D G B E.
    pub const STANDARD: Tuning = Tuning([4, 9, 2, 7, 11, 4]);

    pub const fn new(open: [u8; STRING_COUNT]) -> Self {
        let mut reduced = open;
        let mut i = 0;
        while i < STRING_COUNT {
            reduced[i] %= 12;
            i += 1;
        }
        Tuning(reduced)
    }

    pub fn open(&self, string: usize) -> PitchClass {
        PitchClass::new(self.0[string % STRING_COUNT] as i32)
    }

    /// Pitch class sounding on `string` when stopped at `fret`.
    pub fn pitch_at(&self, string: usize, fret: u8) -> PitchClass {
        self.open(string).transpose(fret as i32)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Guitar positions
// ═══════════════════════════════════════════════════════════════════════

/// Where a finger sits on one string.
///
/// Serialized with the classic integer code: `-1` muted, `0` open, `n` fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i8", into = "i8")]
pub enum FretPosition {
    Muted,
    Open,
    Fretted(u8),
}

impl FretPosition {
    pub const fn from_code(code: i8) -> Self {
        match code {
            c if c < 0 => FretPosition::Muted,
            0 => FretPosition::Open,
            c => FretPosition::Fretted(c as u8),
        }
    }

    pub const fn code(self) -> i8 {
        match self {
            FretPosition::Muted => -1,
            FretPosition::Open => 0,
            FretPosition::Fretted(f) => f as i8,
        }
    }
}

impl From<i8> for FretPosition {
    fn from(code: i8) -> Self {
        Self::from_code(code)
    }
}

impl From<FretPosition> for i8 {
    fn from(pos: FretPosition) -> Self {
        pos.code()
    }
}

/// Decode a whole fret array in the integer notation.
pub const fn frets(codes: [i8; STRING_COUNT]) -> [FretPosition; STRING_COUNT] {
    let mut out = [FretPosition::Muted; STRING_COUNT];
    let mut i = 0;
    while i < STRING_COUNT {
        out[i] = FretPosition::from_code(codes[i]);
        i += 1;
    }
    out
}

/// A named guitar chord shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuitarChord {
    pub name: &'static str,
    pub frets: [FretPosition; STRING_COUNT],
}

impl GuitarChord {
    /// All strings muted; drawn for names the catalog does not know.
    pub const MUTED: [FretPosition; STRING_COUNT] = [FretPosition::Muted; STRING_COUNT];
}

// ═══════════════════════════════════════════════════════════════════════
// Piano positions
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyClass {
    White,
    Black,
}

/// A piano key.
///
/// White keys are addressed by their sequential index from the left edge.
/// Black keys are addressed by the gap they sit in: gap `i` lies between
/// white keys `i` and `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPosition {
    pub class: KeyClass,
    pub index: u8,
}

impl KeyPosition {
    pub const fn white(index: u8) -> Self {
        Self { class: KeyClass::White, index }
    }

    pub const fn black(gap: u8) -> Self {
        Self { class: KeyClass::Black, index: gap }
    }

    pub const fn is_black(self) -> bool {
        matches!(self.class, KeyClass::Black)
    }

    /// Decode the legacy numeric form where black keys were stored as
    /// `100 + gap`. Codes whose index does not fit a key index give `None`.
    pub fn from_legacy_code(code: u16) -> Option<Self> {
        if code >= 100 {
            u8::try_from(code - 100).ok().map(Self::black)
        } else {
            u8::try_from(code).ok().map(Self::white)
        }
    }

    pub const fn legacy_code(self) -> u16 {
        match self.class {
            KeyClass::White => self.index as u16,
            KeyClass::Black => 100 + self.index as u16,
        }
    }
}

/// A named set of highlighted piano keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PianoChord {
    pub name: &'static str,
    pub keys: &'static [KeyPosition],
}

/// A piano scale with its fingering chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PianoScale {
    pub name: &'static str,
    pub keys: &'static [KeyPosition],
    pub fingering_left: &'static str,
    pub fingering_right: &'static str,
    pub accidentals: &'static str,
}

// ═══════════════════════════════════════════════════════════════════════
// Instruments and snapshots
// ═══════════════════════════════════════════════════════════════════════

/// Which diagram family a widget draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Guitar,
    Piano,
    Scale,
}

impl Instrument {
    pub const ALL: [Instrument; 3] = [Instrument::Guitar, Instrument::Piano, Instrument::Scale];

    pub fn as_str(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Piano => "piano",
            Instrument::Scale => "scale",
        }
    }
}

impl FromStr for Instrument {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guitar" | "violao" => Ok(Instrument::Guitar),
            "piano" => Ok(Instrument::Piano),
            "scale" | "escala" => Ok(Instrument::Scale),
            other => Err(StudioError::UnknownInstrument(other.to_string())),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look of a guitar chord diagram.
///
/// `Studio` is the full-page white card of the chord generator. `Cifra` is
/// the smaller transparent panel inserted into lyric sheets: thinner
/// strings, outlined dots, a ring over open strings and a blue title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuitarStyle {
    #[default]
    Studio,
    Cifra,
}

/// A finished drawing: fixed pixel size plus its serialized SVG document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub svg: String,
}

/// One entry of a widget's diagram strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripItem {
    pub id: u64,
    pub name: String,
    pub image: Snapshot,
}
