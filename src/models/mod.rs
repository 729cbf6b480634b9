pub mod beatmap;
pub mod path;
pub mod skin;

pub use beatmap::{BeatmapContent, ControlPoint, ControlPointKind, HitObject, Metadata};
pub use path::{Path, Position, Segment, SegmentKind};
pub use skin::{Colour, LegacySkin};
