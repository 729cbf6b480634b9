//! Boundary with the `.osu` text format.
//!
//! Decoding and encoding go through `rosu_map`; this module only maps its
//! beatmap representation to and from [`crate::models`].

pub mod decoder;
pub mod encoder;
pub mod path;
pub mod skin;

pub use decoder::{LegacyDocument, decode_chart};
pub use encoder::LegacyEncoder;
pub use skin::decode_skin;

/// Header every `.osu` chart starts with.
pub const FORMAT_HEADER: &str = "osu file format v";

/// Whether the bytes are an `.osu` chart, judged by content rather than name.
pub fn is_chart(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    bytes[start..].starts_with(FORMAT_HEADER.as_bytes())
}
