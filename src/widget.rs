//! Instrument widget: the selection, its live diagram, the strip of saved
//! snapshots and the export paths.

use std::io::{Cursor, Write};

use log::{debug, info};
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::catalog::{DEFAULT_GUITAR_CHORD, GUITAR_CHORDS, PIANO_CHORDS, PIANO_SCALES};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::model::{Instrument, Snapshot, StripItem};
use crate::renderer::{chord_symbol, compose_strip, render_diagram};

/// Gap between piano and scale diagrams in a composite strip.
const KEYBOARD_STRIP_GAP: u32 = 50;

/// A rendered image ready to be saved under `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedImage {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub svg: String,
}

impl ExportedImage {
    fn new(filename: String, snapshot: Snapshot) -> Self {
        Self {
            filename,
            width: snapshot.width,
            height: snapshot.height,
            svg: snapshot.svg,
        }
    }
}

/// `"Sol Maior"` → `"Sol_Maior"`.
fn underscored(name: &str) -> String {
    name.replace(' ', "_")
}

pub struct InstrumentWidget {
    instrument: Instrument,
    options: RenderOptions,
    selection: Option<String>,
    current: Snapshot,
    strip: Vec<StripItem>,
    next_id: u64,
}

impl InstrumentWidget {
    pub fn new(instrument: Instrument) -> Self {
        Self::with_options(instrument, RenderOptions::default())
    }

    /// Guitar widgets open on the default chord, keyboards open empty.
    pub fn with_options(instrument: Instrument, options: RenderOptions) -> Self {
        let selection = Self::initial_selection(instrument);
        let current = render_diagram(instrument, selection.as_deref(), &options);
        Self {
            instrument,
            options,
            selection,
            current,
            strip: Vec::new(),
            next_id: 1,
        }
    }

    fn initial_selection(instrument: Instrument) -> Option<String> {
        match instrument {
            Instrument::Guitar => Some(DEFAULT_GUITAR_CHORD.to_string()),
            Instrument::Piano | Instrument::Scale => None,
        }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The diagram for the current selection.
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn strip(&self) -> &[StripItem] {
        &self.strip
    }

    /// Select `name` and redraw. Unknown names are kept as the selection
    /// and draw the neutral diagram.
    pub fn select(&mut self, name: &str) {
        self.selection = Some(name.to_string());
        self.redraw();
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.redraw();
    }

    /// Replace the render options and redraw. Strip items keep the look
    /// they were captured with.
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
        self.redraw();
    }

    fn redraw(&mut self) {
        self.current = render_diagram(self.instrument, self.selection.as_deref(), &self.options);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Strip
    // ═══════════════════════════════════════════════════════════════════

    /// Append a snapshot of the current diagram. Returns its id, or `None`
    /// when nothing is selected. Duplicates are allowed.
    pub fn add_to_strip(&mut self) -> Option<u64> {
        let selection = self.selection.as_deref()?;
        let name = match self.instrument {
            Instrument::Guitar => chord_symbol(selection).to_string(),
            Instrument::Piano | Instrument::Scale => selection.to_string(),
        };

        let id = self.next_id;
        self.next_id += 1;
        debug!("strip += {} (id {})", name, id);
        self.strip.push(StripItem { id, name, image: self.current.clone() });
        Some(id)
    }

    /// Remove the item with `id`. Unknown ids leave the strip untouched.
    pub fn remove_from_strip(&mut self, id: u64) -> bool {
        let before = self.strip.len();
        self.strip.retain(|item| item.id != id);
        self.strip.len() != before
    }

    pub fn clear_strip(&mut self) {
        self.strip.clear();
    }

    /// Horizontal gap between strip items on composite export.
    pub fn strip_gap(&self) -> u32 {
        self.options.strip_gap.unwrap_or(match self.instrument {
            Instrument::Guitar => 0,
            Instrument::Piano | Instrument::Scale => KEYBOARD_STRIP_GAP,
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════

    fn image_filename(&self, selection: Option<&str>) -> String {
        match self.instrument {
            Instrument::Guitar => {
                let symbol = chord_symbol(selection.unwrap_or(""));
                let symbol = if symbol.is_empty() { "Violao_Vazio" } else { symbol };
                format!("Starkids_{}.svg", symbol)
            }
            Instrument::Piano => format!("Starkids_Piano_{}.svg", underscored(selection.unwrap_or("Piano_Vazio"))),
            Instrument::Scale => format!("Starkids_Escala_{}.svg", underscored(selection.unwrap_or("Escala_Vazia"))),
        }
    }

    fn strip_filename(&self) -> String {
        let n = self.strip.len();
        match self.instrument {
            Instrument::Guitar => "Starkids_Progressao_Completa.svg".to_string(),
            Instrument::Piano => format!("Starkids_Piano_Fita_{}_Acordes_Horizontal.svg", n),
            Instrument::Scale => format!("Starkids_Escala_Fita_{}_Escalas_Horizontal.svg", n),
        }
    }

    /// Name of the archive produced by [`export_all`](Self::export_all).
    pub fn archive_filename(&self) -> &'static str {
        match self.instrument {
            Instrument::Guitar => "Starkids_Violao_Todos.zip",
            Instrument::Piano => "Starkids_Piano_Todos.zip",
            Instrument::Scale => "Starkids_Escala_Todas.zip",
        }
    }

    /// The current diagram as a file.
    pub fn export_single(&self) -> ExportedImage {
        ExportedImage::new(self.image_filename(self.selection.as_deref()), self.current.clone())
    }

    /// All strip items side by side in one image. An empty strip exports
    /// nothing.
    pub fn export_strip(&self) -> Result<Option<ExportedImage>> {
        let items: Vec<&Snapshot> = self.strip.iter().map(|item| &item.image).collect();
        let Some(composite) = compose_strip(&items, self.strip_gap())? else {
            return Ok(None);
        };
        info!(
            "exported strip of {} {} diagrams ({}x{})",
            items.len(), self.instrument, composite.width, composite.height
        );
        Ok(Some(ExportedImage::new(self.strip_filename(), composite)))
    }

    /// Catalog names this widget can show, in catalog order.
    pub fn variants(&self) -> Vec<&'static str> {
        match self.instrument {
            Instrument::Guitar => GUITAR_CHORDS.iter().map(|c| c.name).collect(),
            Instrument::Piano => PIANO_CHORDS.iter().map(|c| c.name).collect(),
            Instrument::Scale => PIANO_SCALES.iter().map(|s| s.name).collect(),
        }
    }

    /// Render every catalog variant and pack them into a ZIP archive.
    ///
    /// `on_rendered(index, total, image)` runs after each render. The
    /// widget returns to its initial selection afterwards, whether or not
    /// packing succeeded.
    pub fn export_all<F>(&mut self, mut on_rendered: F) -> Result<Vec<u8>>
    where
        F: FnMut(usize, usize, &ExportedImage),
    {
        let variants = self.variants();
        let total = variants.len();
        let result = self.pack_variants(&variants, &mut on_rendered);

        self.selection = Self::initial_selection(self.instrument);
        self.redraw();

        if let Ok(bytes) = &result {
            info!("exported {} {} variants ({} bytes)", total, self.instrument, bytes.len());
        }
        result
    }

    fn pack_variants<F>(&mut self, variants: &[&'static str], on_rendered: &mut F) -> Result<Vec<u8>>
    where
        F: FnMut(usize, usize, &ExportedImage),
    {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        for (index, name) in variants.iter().enumerate() {
            self.select(name);
            let image = self.export_single();
            on_rendered(index, variants.len(), &image);
            zip.start_file(image.filename.as_str(), options)?;
            zip.write_all(image.svg.as_bytes())?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_replace_spaces() {
        let mut piano = InstrumentWidget::new(Instrument::Piano);
        assert_eq!(piano.export_single().filename, "Starkids_Piano_Piano_Vazio.svg");
        piano.select("Am (Lá Menor)");
        assert_eq!(piano.export_single().filename, "Starkids_Piano_Am_(Lá_Menor).svg");

        let scale = InstrumentWidget::new(Instrument::Scale);
        assert_eq!(scale.export_single().filename, "Starkids_Escala_Escala_Vazia.svg");

        let guitar = InstrumentWidget::new(Instrument::Guitar);
        assert_eq!(guitar.export_single().filename, "Starkids_C.svg");
    }

    #[test]
    fn ids_keep_increasing_after_removal() {
        let mut guitar = InstrumentWidget::new(Instrument::Guitar);
        let a = guitar.add_to_strip().unwrap();
        assert!(guitar.remove_from_strip(a));
        let b = guitar.add_to_strip().unwrap();
        assert!(b > a);
    }

    #[test]
    fn configured_gap_wins() {
        let options = RenderOptions { strip_gap: Some(7), ..RenderOptions::default() };
        let piano = InstrumentWidget::with_options(Instrument::Piano, options);
        assert_eq!(piano.strip_gap(), 7);
        assert_eq!(InstrumentWidget::new(Instrument::Scale).strip_gap(), 50);
        assert_eq!(InstrumentWidget::new(Instrument::Guitar).strip_gap(), 0);
    }
}
