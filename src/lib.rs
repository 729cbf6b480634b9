//! Converts beatmap sets into content legacy `.osu` clients can read.
//!
//! A chart goes through [`legacy::decode_chart`], then
//! [`convert::to_legacy_compatible`], then [`legacy::LegacyEncoder`].
//! [`export::LegacyExporter`] drives this for every file of a set.

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod legacy;
pub mod models;

pub use config::ExportConfig;
pub use error::{ConvertError, ConvertResult};
pub use export::{BeatmapSet, ExportReport, LegacyExporter, SetStorage};
