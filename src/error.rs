use thiserror::Error;

/// Errors surfaced by export, configuration and game setup.
///
/// Unknown chord or scale names are never errors: they render the neutral
/// diagram instead.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Invalid diagram snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Failed to parse snapshot SVG: {0}")]
    SnapshotXml(#[from] roxmltree::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid render options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Strip of {items} items with a {gap}px gap is too wide to compose")]
    CompositeTooWide { items: usize, gap: u32 },

    #[error("Quiz needs at least {needed} distinct chords, catalog has {available}")]
    CatalogTooSmall { needed: usize, available: usize },

    #[error("Unknown instrument '{0}'")]
    UnknownInstrument(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
