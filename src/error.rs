//! Error type shared by the conversion pipeline.

use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failure of a single file's conversion.
///
/// Every variant is local to one file: set exports record it and move on
/// to the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A chart or skin read returned no data.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
    /// A slider path without any control point.
    #[error("hit object #{object_index} has a path without control points")]
    MalformedPath { object_index: usize },
    /// The legacy serializer cannot represent the content.
    #[error("legacy encoding failed: {0}")]
    Encoding(String),
    /// The input is not valid `.osu` text.
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
