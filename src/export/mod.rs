//! Beatmap set export: scanning, file access and the per-file conversion.

pub mod exporter;
pub mod set;
pub mod storage;

pub use exporter::{
    ExportReport, ExportedFile, FILE_EXTENSION, LegacyExporter, archive_name,
};
pub use set::{BeatmapSet, SetFile, content_hash};
pub use storage::{DirectoryStorage, MemoryStorage, SetStorage, read_fully};
