//! Note colour lookup.
//!
//! Every natural letter has a fixed display colour; sharps borrow the colour
//! of the letter they are spelled from.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::PitchClass;

/// Colour used for anything the palette has no entry for.
pub const NEUTRAL_COLOR: &str = "#333";

/// Natural-letter → colour table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    #[serde(rename = "C", deserialize_with = "hex_color")]
    pub c: String,
    #[serde(rename = "D", deserialize_with = "hex_color")]
    pub d: String,
    #[serde(rename = "E", deserialize_with = "hex_color")]
    pub e: String,
    #[serde(rename = "F", deserialize_with = "hex_color")]
    pub f: String,
    #[serde(rename = "G", deserialize_with = "hex_color")]
    pub g: String,
    #[serde(rename = "A", deserialize_with = "hex_color")]
    pub a: String,
    #[serde(rename = "B", deserialize_with = "hex_color")]
    pub b: String,
}

impl Palette {
    /// The studio palette.
    pub fn starkids() -> Self {
        Self {
            c: "#8a2be2".into(),
            d: "#039be5".into(),
            e: "#e57373".into(),
            f: "#43a047".into(),
            g: "#fdd835".into(),
            a: "#fb8c00".into(),
            b: "#d32f2f".into(),
        }
    }

    /// Colour for a note letter. Case-insensitive; unknown letters get
    /// [`NEUTRAL_COLOR`].
    pub fn color_for_letter(&self, letter: char) -> &str {
        match letter.to_ascii_uppercase() {
            'C' => &self.c,
            'D' => &self.d,
            'E' => &self.e,
            'F' => &self.f,
            'G' => &self.g,
            'A' => &self.a,
            'B' => &self.b,
            _ => NEUTRAL_COLOR,
        }
    }

    /// Colour for a spelled note such as `"F#"` or `"Bb"` (first letter wins).
    pub fn color_for_name(&self, name: &str) -> &str {
        name.chars()
            .next()
            .map_or(NEUTRAL_COLOR, |letter| self.color_for_letter(letter))
    }

    pub fn color_for_pitch(&self, pitch: PitchClass) -> &str {
        self.color_for_letter(pitch.natural_letter())
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn hex_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = String::deserialize(deserializer)?;
    if is_hex_color(&value) {
        Ok(value)
    } else {
        Err(D::Error::custom(format!("expected a #rgb or #rrggbb colour, got {:?}", value)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::starkids()
    }
}
