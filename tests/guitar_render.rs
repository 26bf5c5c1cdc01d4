//! Guitar chord diagram tests: render catalog shapes and inspect the SVG.

use diagramlib::catalog::{GUITAR_CHORDS, GUITAR_TUNING};
use diagramlib::{
    frets, guitar_size, render_guitar_chord, render_guitar_frets, FretPosition, GuitarStyle,
    RenderOptions, Tuning,
};
use pretty_assertions::assert_eq;

/// `(cx, cy, fill)` of every circle in the document.
fn circles(svg: &str) -> Vec<(String, String, String)> {
    let doc = roxmltree::Document::parse(svg).expect("valid SVG");
    doc.descendants()
        .filter(|n| n.has_tag_name("circle"))
        .map(|n| {
            (
                n.attribute("cx").unwrap_or_default().to_string(),
                n.attribute("cy").unwrap_or_default().to_string(),
                n.attribute("fill").unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn texts(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("valid SVG");
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn c_major_dots_take_their_note_colours() {
    let snap = render_guitar_chord("C (Dó Maior)", &RenderOptions::default());
    assert_eq!((snap.width, snap.height), (1000, 1200));

    // [-1, 3, 2, 0, 1, 0]: A string fret 3 is C, D string fret 2 is E,
    // B string fret 1 is C.
    assert_eq!(
        circles(&snap.svg),
        vec![
            ("290.0".to_string(), "650.0".to_string(), "#8a2be2".to_string()),
            ("430.0".to_string(), "490.0".to_string(), "#e57373".to_string()),
            ("710.0".to_string(), "330.0".to_string(), "#8a2be2".to_string()),
        ]
    );
    assert_eq!(texts(&snap.svg), vec!["X".to_string(), "C".to_string()]);
}

#[test]
fn unknown_chord_renders_all_muted() {
    let snap = render_guitar_chord("H (Não existe)", &RenderOptions::default());
    assert_eq!((snap.width, snap.height), (1000, 1200));
    assert!(circles(&snap.svg).is_empty());
    assert_eq!(texts(&snap.svg), vec!["X".to_string(); 6]);
}

#[test]
fn rendering_is_deterministic() {
    let options = RenderOptions::default();
    for chord in &GUITAR_CHORDS {
        let a = render_guitar_chord(chord.name, &options);
        let b = render_guitar_chord(chord.name, &options);
        assert_eq!(a, b, "{} rendered differently", chord.name);
    }
}

#[test]
fn fretted_pitch_classes_stay_in_range() {
    for string in 0..6 {
        for fret in 0..=24u8 {
            let pc = GUITAR_TUNING.pitch_at(string, fret).value();
            assert!(pc < 12, "string {} fret {} gave {}", string, fret, pc);
        }
    }
    // Standard tuning, open strings: E A D G B E.
    let names: Vec<&str> = (0..6).map(|s| GUITAR_TUNING.open(s).name()).collect();
    assert_eq!(names, vec!["E", "A", "D", "G", "B", "E"]);
}

#[test]
fn every_catalog_chord_draws_one_mark_per_string() {
    for chord in &GUITAR_CHORDS {
        let snap = render_guitar_chord(chord.name, &RenderOptions::default().untitled());
        let fretted = chord.frets.iter().filter(|f| matches!(f, FretPosition::Fretted(_))).count();
        let muted = chord.frets.iter().filter(|f| **f == FretPosition::Muted).count();
        assert_eq!(circles(&snap.svg).len(), fretted, "{}", chord.name);
        assert_eq!(texts(&snap.svg).len(), muted, "{}", chord.name);
    }
}

#[test]
fn title_can_be_hidden() {
    let options = RenderOptions { show_title: false, ..RenderOptions::default() };
    let snap = render_guitar_chord("G7 (Sol com 7ª)", &options);
    assert!(texts(&snap.svg).is_empty());

    let titled = render_guitar_chord("G7 (Sol com 7ª)", &RenderOptions::default());
    assert_eq!(texts(&titled.svg), vec!["G7".to_string()]);
}

#[test]
fn custom_tuning_recolours_dots() {
    // Drop D: low string tuned down to D, fret 2 sounds E.
    let drop_d = Tuning::new([2, 9, 2, 7, 11, 4]);
    let shape = frets([2, -1, -1, -1, -1, -1]);
    let snap = render_guitar_frets(&shape, &drop_d, None, &RenderOptions::default());
    assert_eq!(
        circles(&snap.svg),
        vec![("150.0".to_string(), "490.0".to_string(), "#e57373".to_string())]
    );
}

#[test]
fn palette_overrides_apply() {
    let options = RenderOptions::from_json(r##"{"palette": {"C": "#000000"}}"##).unwrap();
    let snap = render_guitar_chord("C (Dó Maior)", &options);
    let fills: Vec<String> = circles(&snap.svg).into_iter().map(|c| c.2).collect();
    assert_eq!(fills, vec!["#000000", "#e57373", "#000000"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Cifra chord panel
// ═══════════════════════════════════════════════════════════════════════

fn cifra_options() -> RenderOptions {
    RenderOptions { guitar_style: GuitarStyle::Cifra, ..RenderOptions::default() }
}

#[test]
fn cifra_panel_is_small_and_transparent() {
    let snap = render_guitar_chord("G (Sol Maior)", &cifra_options());
    assert_eq!((snap.width, snap.height), (400, 500));
    assert_eq!(guitar_size(GuitarStyle::Cifra), (400, 500));
    assert!(!snap.svg.contains("<rect"));
}

#[test]
fn cifra_panel_rings_open_strings() {
    let snap = render_guitar_chord("C (Dó Maior)", &cifra_options());
    let s = |v: &str| v.to_string();
    assert_eq!(
        circles(&snap.svg),
        vec![
            (s("116.0"), s("260.0"), s("#8a2be2")),
            (s("172.0"), s("196.0"), s("#e57373")),
            (s("228.0"), s("75.0"), s("none")),
            (s("284.0"), s("132.0"), s("#8a2be2")),
            (s("340.0"), s("75.0"), s("none")),
        ]
    );

    let doc = roxmltree::Document::parse(&snap.svg).unwrap();
    let dot = doc
        .descendants()
        .find(|n| n.has_tag_name("circle") && n.attribute("fill") == Some("#8a2be2"))
        .unwrap();
    assert_eq!(dot.attribute("r"), Some("18.0"));
    assert_eq!(dot.attribute("stroke-opacity"), Some("0.20"));
}

#[test]
fn cifra_title_is_blue_over_a_white_offset() {
    let snap = render_guitar_chord("Am (Lá Menor)", &cifra_options());
    let doc = roxmltree::Document::parse(&snap.svg).unwrap();
    let titles: Vec<(&str, &str)> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text") && n.text() == Some("Am"))
        .map(|n| (n.attribute("fill").unwrap_or_default(), n.attribute("y").unwrap_or_default()))
        .collect();
    assert_eq!(titles, vec![("#FFFFFF", "62.0"), ("#0277bd", "60.0")]);
}

#[test]
fn studio_diagrams_draw_no_open_rings() {
    let snap = render_guitar_chord("E (Mi Maior)", &RenderOptions::default());
    assert!(circles(&snap.svg).iter().all(|(_, _, fill)| fill != "none"));
}
