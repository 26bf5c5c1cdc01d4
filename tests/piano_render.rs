//! Piano chord and scale diagram tests.

use diagramlib::catalog::{PIANO_CHORDS, PIANO_SCALES};
use diagramlib::{
    diagram_size, render_piano_chord, render_piano_keys, render_piano_scale, Instrument,
    KeyPosition, RenderOptions,
};
use pretty_assertions::assert_eq;

fn texts(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("valid SVG");
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn c_major_labels_its_keys() {
    let snap = render_piano_chord(Some("C (Dó Maior)"), &RenderOptions::default());
    assert_eq!((snap.width, snap.height), diagram_size(Instrument::Piano));
    assert_eq!(
        texts(&snap.svg),
        strings(&["C", "E", "G", "Starkids Music", "C (Dó Maior)"])
    );
}

#[test]
fn black_key_capsules_show_both_spellings() {
    let snap = render_piano_chord(Some("D (Ré Maior)"), &RenderOptions::default());
    // Whites first, then the F#/Gb black key.
    assert_eq!(
        texts(&snap.svg),
        strings(&["D", "A", "F#", "Gb", "Starkids Music", "D (Ré Maior)"])
    );
}

#[test]
fn empty_and_unknown_selections_draw_a_bare_keyboard() {
    let options = RenderOptions::default();
    let empty = render_piano_chord(None, &options);
    let unknown = render_piano_chord(Some("X (Nada)"), &options);
    assert_eq!(texts(&empty.svg), strings(&["Starkids Music"]));
    assert_eq!(empty, unknown);
    assert!(!empty.svg.contains("capsule-shadow"));
}

#[test]
fn capsules_and_brand_can_be_turned_off() {
    let options = RenderOptions {
        show_capsules: false,
        show_brand: false,
        ..RenderOptions::default()
    };
    let snap = render_piano_chord(Some("Am (Lá Menor)"), &options);
    assert_eq!(texts(&snap.svg), strings(&["Am (Lá Menor)"]));
}

#[test]
fn custom_brand_text_replaces_the_default() {
    let options = RenderOptions {
        brand_text: Some("Escola <Aberta>".into()),
        show_capsules: false,
        show_title: false,
        ..RenderOptions::default()
    };
    let snap = render_piano_chord(Some("G (Sol Maior)"), &options);
    assert_eq!(texts(&snap.svg), strings(&["Escola <Aberta>"]));
}

#[test]
fn active_keys_are_painted_with_their_letter_colour() {
    let snap = render_piano_keys(&[KeyPosition::white(3)], None, &RenderOptions::default());
    let doc = roxmltree::Document::parse(&snap.svg).unwrap();
    let green_rects = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect") && n.attribute("fill") == Some("#43a047"))
        .count();
    // The key itself plus its capsule body.
    assert_eq!(green_rects, 2);
}

#[test]
fn every_piano_chord_renders_three_capsules() {
    let options = RenderOptions { show_brand: false, show_title: false, ..RenderOptions::default() };
    for chord in &PIANO_CHORDS {
        let snap = render_piano_chord(Some(chord.name), &options);
        let labels = texts(&snap.svg);
        let blacks = chord.keys.iter().filter(|k| k.is_black()).count();
        assert_eq!(labels.len(), 3 + blacks, "{}", chord.name);
    }
}

#[test]
fn scale_page_carries_the_fingering_table() {
    let snap = render_piano_scale(Some("Sol Maior"), &RenderOptions::default());
    assert_eq!((snap.width, snap.height), (1200, 2100));

    let labels = texts(&snap.svg);
    for expected in [
        "TABELA DE DEDILHADO",
        "Mão Esquerda:",
        "Mão Direita:",
        "Acidentes:",
        "Starkids Studio",
        "Sol Maior",
    ] {
        assert!(labels.iter().any(|t| t == expected), "missing {:?} in {:?}", expected, labels);
    }
    assert!(labels.iter().any(|t| t == "F#"));
    assert!(snap.svg.contains("info-box-shadow"));
}

#[test]
fn unknown_scale_has_no_fingering_table() {
    let snap = render_piano_scale(Some("Si Lócrio"), &RenderOptions::default());
    let labels = texts(&snap.svg);
    assert_eq!(labels, strings(&["Starkids Studio"]));
    assert_eq!(snap, render_piano_scale(None, &RenderOptions::default()));
}

#[test]
fn scales_render_deterministically() {
    let options = RenderOptions::default();
    for scale in &PIANO_SCALES {
        assert_eq!(
            render_piano_scale(Some(scale.name), &options),
            render_piano_scale(Some(scale.name), &options)
        );
    }
}

#[test]
fn gradients_are_shared_between_keys() {
    let snap = render_piano_chord(Some("B (Si Maior)"), &RenderOptions::default());
    assert_eq!(snap.svg.matches(r#"id="black-key-shine-active""#).count(), 1);
    assert_eq!(snap.svg.matches(r#"id="white-key-gloss""#).count(), 1);
}

#[test]
fn legacy_key_codes_decode() {
    assert_eq!(KeyPosition::from_legacy_code(4), Some(KeyPosition::white(4)));
    assert_eq!(KeyPosition::from_legacy_code(103), Some(KeyPosition::black(3)));
    assert_eq!(KeyPosition::black(10).legacy_code(), 110);
}

#[test]
fn oversized_legacy_codes_are_rejected() {
    assert_eq!(KeyPosition::from_legacy_code(355), Some(KeyPosition::black(255)));
    assert_eq!(KeyPosition::from_legacy_code(356), None);
    assert_eq!(KeyPosition::from_legacy_code(u16::MAX), None);
}
