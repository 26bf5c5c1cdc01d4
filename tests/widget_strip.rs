//! Instrument widget tests: selection, strip management and exports.

use std::io::{Cursor, Read};

use diagramlib::catalog::PIANO_CHORDS;
use diagramlib::{
    compose_strip, render_guitar_chord, Instrument, InstrumentWidget, RenderOptions, StudioError,
};
use pretty_assertions::assert_eq;

/// x offsets of the translated item groups of a composite.
fn item_offsets(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("valid composite SVG");
    doc.root_element()
        .children()
        .filter(|n| n.has_tag_name("g"))
        .filter_map(|n| n.attribute("transform"))
        .map(str::to_string)
        .collect()
}

#[test]
fn guitar_widget_opens_on_c_major() {
    let widget = InstrumentWidget::new(Instrument::Guitar);
    assert_eq!(widget.selection(), Some("C (Dó Maior)"));
    assert_eq!(
        widget.current(),
        &render_guitar_chord("C (Dó Maior)", &RenderOptions::default())
    );
}

#[test]
fn guitar_strip_composes_without_gaps() {
    let mut widget = InstrumentWidget::new(Instrument::Guitar);
    widget.add_to_strip();
    widget.select("G (Sol Maior)");
    widget.add_to_strip();
    widget.select("Am (Lá Menor)");
    widget.add_to_strip();

    let names: Vec<&str> = widget.strip().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["C", "G", "Am"]);

    let image = widget.export_strip().unwrap().expect("strip has items");
    assert_eq!(image.filename, "Starkids_Progressao_Completa.svg");
    assert_eq!((image.width, image.height), (3000, 1200));
    assert_eq!(
        item_offsets(&image.svg),
        vec!["translate(0,0)", "translate(1000,0)", "translate(2000,0)"]
    );
}

#[test]
fn piano_strip_keeps_fifty_pixel_gaps() {
    let mut widget = InstrumentWidget::new(Instrument::Piano);
    widget.select("C (Dó Maior)");
    widget.add_to_strip();
    widget.select("F (Fá Maior)");
    widget.add_to_strip();

    let image = widget.export_strip().unwrap().unwrap();
    assert_eq!(image.filename, "Starkids_Piano_Fita_2_Acordes_Horizontal.svg");
    assert_eq!((image.width, image.height), (2450, 1400));
    assert_eq!(item_offsets(&image.svg), vec!["translate(0,0)", "translate(1250,0)"]);

    // Both items use the same gradients; the composite defines them once.
    assert_eq!(image.svg.matches(r#"id="white-key-gloss""#).count(), 1);
    assert_eq!(image.svg.matches(r#"id="capsule-shadow""#).count(), 1);
}

#[test]
fn piano_needs_a_selection_to_add() {
    let mut widget = InstrumentWidget::new(Instrument::Piano);
    assert_eq!(widget.add_to_strip(), None);
    assert!(widget.strip().is_empty());

    widget.select("Em (Mi Menor)");
    assert!(widget.add_to_strip().is_some());
    assert_eq!(widget.strip()[0].name, "Em (Mi Menor)");
}

#[test]
fn duplicates_are_allowed_and_removal_is_by_id() {
    let mut widget = InstrumentWidget::new(Instrument::Guitar);
    let first = widget.add_to_strip().unwrap();
    let second = widget.add_to_strip().unwrap();
    assert_ne!(first, second);
    assert_eq!(widget.strip().len(), 2);

    assert!(!widget.remove_from_strip(9999));
    assert_eq!(widget.strip().len(), 2);

    assert!(widget.remove_from_strip(first));
    let ids: Vec<u64> = widget.strip().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second]);
}

#[test]
fn huge_gap_is_an_export_error() {
    let options = RenderOptions { strip_gap: Some(u32::MAX - 500), ..RenderOptions::default() };
    let mut widget = InstrumentWidget::with_options(Instrument::Guitar, options);
    widget.add_to_strip();
    widget.add_to_strip();
    assert!(matches!(
        widget.export_strip(),
        Err(StudioError::CompositeTooWide { items: 2, .. })
    ));

    // A single item has no gap to add.
    let first = widget.strip()[0].id;
    widget.remove_from_strip(first);
    let image = widget.export_strip().unwrap().unwrap();
    assert_eq!((image.width, image.height), (1000, 1200));
}

#[test]
fn empty_strip_exports_nothing() {
    let widget = InstrumentWidget::new(Instrument::Scale);
    assert!(widget.export_strip().unwrap().is_none());
}

#[test]
fn unknown_selection_is_kept_and_drawn_neutral() {
    let mut widget = InstrumentWidget::new(Instrument::Guitar);
    widget.select("Zm (Inexistente)");
    assert_eq!(widget.selection(), Some("Zm (Inexistente)"));
    assert!(!widget.current().svg.contains("<circle"));
    assert_eq!(widget.export_single().filename, "Starkids_Zm.svg");
}

#[test]
fn cleared_guitar_exports_under_a_fallback_name() {
    let mut widget = InstrumentWidget::new(Instrument::Guitar);
    widget.clear_selection();
    assert_eq!(widget.export_single().filename, "Starkids_Violao_Vazio.svg");

    widget.select("   ");
    assert_eq!(widget.export_single().filename, "Starkids_Violao_Vazio.svg");
}

#[test]
fn composite_height_is_the_tallest_item() {
    let short = render_guitar_chord("E (Mi Maior)", &RenderOptions::default());
    let mut widget = InstrumentWidget::new(Instrument::Scale);
    widget.select("Dó Maior");
    let tall = widget.current().clone();

    let composite = compose_strip(&[&short, &tall], 10).unwrap().unwrap();
    assert_eq!((composite.width, composite.height), (1000 + 10 + 1200, 2100));
}

#[test]
fn export_all_packs_every_variant() {
    let mut widget = InstrumentWidget::new(Instrument::Piano);
    widget.select("Gm (Sol Menor)");

    let mut seen = Vec::new();
    let bytes = widget
        .export_all(|index, total, image| seen.push((index, total, image.filename.clone())))
        .unwrap();

    assert_eq!(seen.len(), PIANO_CHORDS.len());
    assert_eq!(seen[0], (0, 14, "Starkids_Piano_C_(Dó_Maior).svg".to_string()));
    assert_eq!(seen[13].0, 13);
    assert_eq!(widget.selection(), None);
    assert_eq!(widget.archive_filename(), "Starkids_Piano_Todos.zip");

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 14);
    let mut entry = archive.by_name("Starkids_Piano_Bm_(Si_Menor).svg").unwrap();
    let mut svg = String::new();
    entry.read_to_string(&mut svg).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Bm (Si Menor)"));
}

#[test]
fn guitar_export_all_returns_to_default_chord() {
    let mut widget = InstrumentWidget::new(Instrument::Guitar);
    widget.select("B7 (Si com 7ª)");
    let mut count = 0;
    widget.export_all(|_, _, _| count += 1).unwrap();
    assert_eq!(count, 27);
    assert_eq!(widget.selection(), Some("C (Dó Maior)"));
}
