//! diagramlib: chord, scale and tablature diagram rendering for Starkids Studio.
//!
//! Renders guitar chord diagrams, piano chord and scale keyboards, and the
//! cifra helpers (ASCII tabs, tab grids, strumming patterns) to SVG. The
//! [`InstrumentWidget`] keeps a selection plus a strip of snapshots and
//! exports single images, horizontal composites and ZIP batches.
//!
//! # Example
//! ```
//! use diagramlib::{render_guitar_chord, RenderOptions};
//!
//! let snapshot = render_guitar_chord("G (Sol Maior)", &RenderOptions::default());
//! assert_eq!((snapshot.width, snapshot.height), (1000, 1200));
//! assert!(snapshot.svg.starts_with("<svg"));
//! ```

pub mod catalog;
pub mod cifra;
pub mod config;
pub mod error;
pub mod memory;
pub mod model;
pub mod palette;
pub mod quiz;
pub mod renderer;
pub mod widget;

#[cfg(target_os = "android")]
pub mod android;

pub use catalog::{listing, CatalogListing};
pub use cifra::{RhythmMove, RhythmPattern, TabGrid};
pub use config::RenderOptions;
pub use error::{Result, StudioError};
pub use memory::MemoryGame;
pub use model::*;
pub use palette::Palette;
pub use quiz::ChordQuiz;
pub use renderer::{
    compose_strip, diagram_size, guitar_size, render_diagram, render_guitar_chord, render_guitar_frets,
    render_piano_chord, render_piano_keys, render_piano_scale, render_rhythm, render_tab_grid,
    render_text_tab,
};
pub use widget::{ExportedImage, InstrumentWidget};

/// Render one catalog entry to an SVG string.
///
/// `instrument` is `"guitar"`, `"piano"` or `"scale"`. An empty `name`
/// draws the neutral diagram. `options_json` may override any
/// [`RenderOptions`] field; pass `None` for the studio defaults.
pub fn render_chord_to_svg(instrument: &str, name: &str, options_json: Option<&str>) -> Result<String> {
    let instrument: Instrument = instrument.parse()?;
    let options = match options_json {
        Some(json) if !json.trim().is_empty() => RenderOptions::from_json(json)?,
        _ => RenderOptions::default(),
    };
    let name = Some(name).filter(|n| !n.is_empty());
    Ok(render_diagram(instrument, name, &options).svg)
}

/// The catalog names per instrument as JSON, for populating selectors.
pub fn catalog_to_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&listing())?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string argument. Null yields `Some("")` when `allow_null`.
unsafe fn c_arg<'a>(ptr: *const c_char, allow_null: bool) -> Option<&'a str> {
    if ptr.is_null() {
        return allow_null.then_some("");
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a catalog entry and return SVG as a C string.
/// The caller must free the returned string with `diagramlib_free_string`.
///
/// `options_json` may be null for the default look.
///
/// # Safety
/// `instrument` and `name` must be valid null-terminated UTF-8 C strings;
/// `options_json` must be one or null.
#[no_mangle]
pub unsafe extern "C" fn diagramlib_render_chord(
    instrument: *const c_char,
    name: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    let (Some(instrument), Some(name)) = (unsafe { c_arg(instrument, false) }, unsafe { c_arg(name, true) }) else {
        return std::ptr::null_mut();
    };
    let options = if options_json.is_null() {
        None
    } else {
        match unsafe { c_arg(options_json, false) } {
            Some(json) => Some(json),
            None => return std::ptr::null_mut(),
        }
    };

    into_c_string(render_chord_to_svg(instrument, name, options))
}

/// Return the catalog listing as a JSON C string.
/// The caller must free the returned string with `diagramlib_free_string`.
#[no_mangle]
pub extern "C" fn diagramlib_catalog_json() -> *mut c_char {
    into_c_string(catalog_to_json())
}

/// Free a string previously returned by diagramlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a diagramlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn diagramlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_round_trip() {
        let instrument = CString::new("piano").unwrap();
        let name = CString::new("Dm (Ré Menor)").unwrap();
        let ptr = unsafe { diagramlib_render_chord(instrument.as_ptr(), name.as_ptr(), std::ptr::null()) };
        assert!(!ptr.is_null());
        let svg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { diagramlib_free_string(ptr) };
        assert!(svg.contains("Dm (Ré Menor)"));
    }

    #[test]
    fn ffi_rejects_unknown_instrument() {
        let instrument = CString::new("ukulele").unwrap();
        let name = CString::new("C").unwrap();
        let ptr = unsafe { diagramlib_render_chord(instrument.as_ptr(), name.as_ptr(), std::ptr::null()) };
        assert!(ptr.is_null());
    }

    #[test]
    fn bad_options_are_an_error() {
        assert!(matches!(
            render_chord_to_svg("guitar", "C (Dó Maior)", Some("{not json")),
            Err(StudioError::Config(_))
        ));
    }
}
