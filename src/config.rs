//! Render options, loadable from JSON.
//!
//! ```
//! use diagramlib::RenderOptions;
//!
//! let opts = RenderOptions::from_json(r##"{"show_capsules": false, "palette": {"C": "#000000"}}"##).unwrap();
//! assert!(!opts.show_capsules);
//! assert!(opts.show_title);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::GuitarStyle;
use crate::palette::Palette;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Note colours.
    pub palette: Palette,
    /// Chord title on guitar diagrams, chord/scale name on piano diagrams.
    pub show_title: bool,
    /// Note-name badges under active piano keys.
    pub show_capsules: bool,
    /// Brand lettering at the top of piano diagrams.
    pub show_brand: bool,
    /// Replaces the default brand lettering.
    pub brand_text: Option<String>,
    /// Horizontal gap between strip items on composite export. `None` uses
    /// the instrument's default.
    pub strip_gap: Option<u32>,
    /// Guitar diagram look.
    pub guitar_style: GuitarStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            show_title: true,
            show_capsules: true,
            show_brand: true,
            brand_text: None,
            strip_gap: None,
            guitar_style: GuitarStyle::Studio,
        }
    }
}

impl RenderOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Options for quiz cards: the title would give the answer away.
    pub fn untitled(&self) -> Self {
        Self { show_title: false, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;

    #[test]
    fn markup_in_palette_is_refused() {
        let result = RenderOptions::from_json(r##"{"palette": {"C": "\"/><bad"}}"##);
        assert!(matches!(result, Err(StudioError::Config(_))));
    }

    #[test]
    fn guitar_style_is_lowercase() {
        let options = RenderOptions::from_json(r#"{"guitar_style": "cifra"}"#).unwrap();
        assert_eq!(options.guitar_style, GuitarStyle::Cifra);
        assert_eq!(RenderOptions::default().guitar_style, GuitarStyle::Studio);
    }

    #[test]
    fn round_trips_through_json() {
        let options = RenderOptions {
            strip_gap: Some(12),
            guitar_style: GuitarStyle::Cifra,
            ..RenderOptions::default()
        };
        let json = options.to_json().unwrap();
        assert_eq!(RenderOptions::from_json(&json).unwrap(), options);
    }
}
