//! Chord and scale catalogs plus the piano keyboard topology.
//!
//! The display names are the public selection vocabulary: dropdowns and FFI
//! callers must pass them exactly as written here.

use serde::Serialize;

use crate::model::{frets, GuitarChord, KeyPosition, PianoChord, PianoScale, Tuning};

// ═══════════════════════════════════════════════════════════════════════
// Guitar
// ═══════════════════════════════════════════════════════════════════════

pub const GUITAR_TUNING: Tuning = Tuning::STANDARD;

/// Strings as labelled on tablature, high e first.
pub const TAB_STRINGS: [&str; 6] = ["e", "B", "G", "D", "A", "E"];

/// The guitar chord shown when a guitar widget opens.
pub const DEFAULT_GUITAR_CHORD: &str = "C (Dó Maior)";

macro_rules! guitar {
    ($name:expr, [$($f:expr),*]) => {
        GuitarChord { name: $name, frets: frets([$($f),*]) }
    };
}

pub static GUITAR_CHORDS: [GuitarChord; 27] = [
    // Major
    guitar!("C (Dó Maior)", [-1, 3, 2, 0, 1, 0]),
    guitar!("D (Ré Maior)", [-1, -1, 0, 2, 3, 2]),
    guitar!("E (Mi Maior)", [0, 2, 2, 1, 0, 0]),
    guitar!("F (Fá Maior)", [1, 3, 3, 2, 1, 1]),
    guitar!("G (Sol Maior)", [3, 2, 0, 0, 0, 3]),
    guitar!("A (Lá Maior)", [-1, 0, 2, 2, 2, 0]),
    guitar!("B (Si Maior)", [-1, 2, 4, 4, 4, 2]),
    // Minor
    guitar!("Cm (Dó Menor)", [-1, 3, 5, 5, 4, 3]),
    guitar!("Dm (Ré Menor)", [-1, -1, 0, 2, 3, 1]),
    guitar!("Em (Mi Menor)", [0, 2, 2, 0, 0, 0]),
    guitar!("Fm (Fá Menor)", [1, 3, 3, 1, 1, 1]),
    guitar!("Gm (Sol Menor)", [3, 5, 5, 3, 3, 3]),
    guitar!("Am (Lá Menor)", [-1, 0, 2, 2, 1, 0]),
    guitar!("Bm (Si Menor)", [-1, 2, 4, 4, 3, 2]),
    // Dominant seventh
    guitar!("C7 (Dó com 7ª)", [-1, 3, 2, 3, 1, 0]),
    guitar!("D7 (Ré com 7ª)", [-1, -1, 0, 2, 1, 2]),
    guitar!("E7 (Mi com 7ª)", [0, 2, 0, 1, 0, 0]),
    guitar!("F7 (Fá com 7ª)", [1, 3, 1, 2, 1, 1]),
    guitar!("G7 (Sol com 7ª)", [3, 2, 0, 0, 0, 1]),
    guitar!("A7 (Lá com 7ª)", [-1, 0, 2, 0, 2, 0]),
    guitar!("B7 (Si com 7ª)", [-1, 2, 1, 2, 0, 2]),
    // Major seventh
    guitar!("Cmaj7 (Dó 7M)", [-1, 3, 2, 0, 0, 0]),
    guitar!("Dmaj7 (Ré 7M)", [-1, -1, 0, 2, 2, 2]),
    guitar!("Emaj7 (Mi 7M)", [0, 2, 1, 1, 0, 0]),
    guitar!("Fmaj7 (Fá 7M)", [-1, -1, 3, 2, 1, 0]),
    guitar!("Gmaj7 (Sol 7M)", [3, 2, 0, 0, 0, 2]),
    guitar!("Amaj7 (Lá 7M)", [-1, 0, 2, 1, 2, 0]),
];

pub fn guitar_chord(name: &str) -> Option<&'static GuitarChord> {
    GUITAR_CHORDS.iter().find(|c| c.name == name)
}

// ═══════════════════════════════════════════════════════════════════════
// Piano keyboard
// ═══════════════════════════════════════════════════════════════════════

/// Two octaves, C to B.
pub const WHITE_KEY_COUNT: usize = 14;

const WHITE_KEY_LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Sharp/flat spelling of the black key following each white key of an
/// octave. `None` where the octave has no black key (E–F, B–C).
const BLACK_KEY_SPELLINGS: [Option<[&str; 2]>; 7] = [
    Some(["C#", "Db"]),
    Some(["D#", "Eb"]),
    None,
    Some(["F#", "Gb"]),
    Some(["G#", "Ab"]),
    Some(["A#", "Bb"]),
    None,
];

/// Letter printed on (and colouring) white key `index`.
pub fn white_key_letter(index: usize) -> char {
    WHITE_KEY_LETTERS[index % WHITE_KEY_LETTERS.len()]
}

/// Both spellings of the black key in gap `gap`, if that gap holds one.
pub fn black_key_names(gap: usize) -> Option<[&'static str; 2]> {
    if gap + 1 >= WHITE_KEY_COUNT {
        return None;
    }
    BLACK_KEY_SPELLINGS[gap % WHITE_KEY_LETTERS.len()]
}

/// Gaps that hold a black key, left to right.
pub fn black_key_gaps() -> impl Iterator<Item = usize> {
    (0..WHITE_KEY_COUNT).filter(|&gap| black_key_names(gap).is_some())
}

/// Whether `key` exists on the keyboard.
pub fn key_exists(key: KeyPosition) -> bool {
    let index = key.index as usize;
    if key.is_black() {
        black_key_names(index).is_some()
    } else {
        index < WHITE_KEY_COUNT
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Piano chords and scales
// ═══════════════════════════════════════════════════════════════════════

const fn w(index: u8) -> KeyPosition {
    KeyPosition::white(index)
}

const fn b(gap: u8) -> KeyPosition {
    KeyPosition::black(gap)
}

pub static PIANO_CHORDS: [PianoChord; 14] = [
    PianoChord { name: "C (Dó Maior)", keys: &[w(0), w(2), w(4)] },
    PianoChord { name: "D (Ré Maior)", keys: &[w(1), b(3), w(5)] },
    PianoChord { name: "E (Mi Maior)", keys: &[w(2), b(4), w(6)] },
    PianoChord { name: "F (Fá Maior)", keys: &[w(3), w(5), w(7)] },
    PianoChord { name: "G (Sol Maior)", keys: &[w(4), w(6), w(8)] },
    PianoChord { name: "A (Lá Maior)", keys: &[w(5), b(7), w(9)] },
    PianoChord { name: "B (Si Maior)", keys: &[w(6), b(8), b(10)] },
    PianoChord { name: "Cm (Dó Menor)", keys: &[w(0), b(1), w(4)] },
    PianoChord { name: "Dm (Ré Menor)", keys: &[w(1), w(3), w(5)] },
    PianoChord { name: "Em (Mi Menor)", keys: &[w(2), w(4), w(6)] },
    PianoChord { name: "Fm (Fá Menor)", keys: &[w(3), b(4), w(7)] },
    PianoChord { name: "Gm (Sol Menor)", keys: &[w(4), b(5), w(8)] },
    PianoChord { name: "Am (Lá Menor)", keys: &[w(5), w(7), w(9)] },
    PianoChord { name: "Bm (Si Menor)", keys: &[w(6), w(8), b(10)] },
];

pub fn piano_chord(name: &str) -> Option<&'static PianoChord> {
    PIANO_CHORDS.iter().find(|c| c.name == name)
}

const RH_THUMB_UNDER: &str = "1 - 2 - 3 - 1 - 2 - 3 - 4 - 5";
const LH_THUMB_UNDER: &str = "5 - 4 - 3 - 2 - 1 - 3 - 2 - 1";

pub static PIANO_SCALES: [PianoScale; 6] = [
    PianoScale {
        name: "Dó Maior",
        keys: &[w(0), w(1), w(2), w(3), w(4), w(5), w(6), w(7)],
        fingering_left: LH_THUMB_UNDER,
        fingering_right: RH_THUMB_UNDER,
        accidentals: "Nenhum",
    },
    PianoScale {
        name: "Sol Maior",
        keys: &[w(4), w(5), w(6), w(7), w(8), w(9), b(10), w(11)],
        fingering_left: "5 - 4 - 3 - 2 - 1 - 3 - 2 - 1",
        fingering_right: RH_THUMB_UNDER,
        accidentals: "F#",
    },
    PianoScale {
        name: "Ré Maior",
        keys: &[w(1), w(2), b(3), w(4), w(5), w(6), b(7), w(8)],
        fingering_left: LH_THUMB_UNDER,
        fingering_right: RH_THUMB_UNDER,
        accidentals: "F#, C#",
    },
    PianoScale {
        name: "Fá Maior",
        keys: &[w(3), w(4), w(5), b(5), w(7), w(8), w(9), w(10)],
        fingering_left: LH_THUMB_UNDER,
        fingering_right: "1 - 2 - 3 - 4 - 1 - 2 - 3 - 4",
        accidentals: "Bb",
    },
    PianoScale {
        name: "Lá Menor",
        keys: &[w(5), w(6), w(7), w(8), w(9), w(10), w(11), w(12)],
        fingering_left: LH_THUMB_UNDER,
        fingering_right: RH_THUMB_UNDER,
        accidentals: "Nenhum",
    },
    PianoScale {
        name: "Mi Menor",
        keys: &[w(2), b(3), w(4), w(5), w(6), w(7), w(8), w(9)],
        fingering_left: LH_THUMB_UNDER,
        fingering_right: RH_THUMB_UNDER,
        accidentals: "F#",
    },
];

pub fn piano_scale(name: &str) -> Option<&'static PianoScale> {
    PIANO_SCALES.iter().find(|s| s.name == name)
}

// ═══════════════════════════════════════════════════════════════════════
// Listing
// ═══════════════════════════════════════════════════════════════════════

/// Names per instrument, in catalog order, for populating selectors.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub guitar: Vec<&'static str>,
    pub piano: Vec<&'static str>,
    pub scale: Vec<&'static str>,
}

pub fn listing() -> CatalogListing {
    CatalogListing {
        guitar: GUITAR_CHORDS.iter().map(|c| c.name).collect(),
        piano: PIANO_CHORDS.iter().map(|c| c.name).collect(),
        scale: PIANO_SCALES.iter().map(|s| s.name).collect(),
    }
}
