//! In-memory chart content handled by the conversion pipeline.

use crate::models::path::Path;

/// Song and difficulty metadata written to the `[Metadata]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub creator: String,
    /// Difficulty name.
    pub version: String,
    pub audio_file: String,
}

/// Which `[TimingPoints]` family a control point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointKind {
    Timing,
    Difficulty,
    Effect,
    Sample,
}

/// A timestamped marker affecting timing, velocity, effects or samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Time in milliseconds.
    pub time: f64,
    pub kind: ControlPointKind,
}

impl ControlPoint {
    pub fn new(time: f64, kind: ControlPointKind) -> Self {
        Self { time, kind }
    }
}

/// A gameplay object.
///
/// Capabilities are expressed by field presence: `duration` is set for
/// objects that last over time (spinners, holds), `path` for sliders.
/// A slider's duration is derived from its path by the serializer, so
/// decoded sliders only carry a path.
#[derive(Debug, Clone, PartialEq)]
pub struct HitObject {
    /// Time in milliseconds.
    pub start_time: f64,
    pub duration: Option<f64>,
    pub path: Option<Path>,
}

impl HitObject {
    /// An object with neither duration nor path.
    pub fn point(start_time: f64) -> Self {
        Self {
            start_time,
            duration: None,
            path: None,
        }
    }

    pub fn with_duration(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            duration: Some(duration),
            path: None,
        }
    }

    pub fn with_path(start_time: f64, path: Path) -> Self {
        Self {
            start_time,
            duration: None,
            path: Some(path),
        }
    }

    #[inline]
    pub fn has_duration(&self) -> bool {
        self.duration.is_some()
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// `start_time + duration` for objects with a duration.
    pub fn end_time(&self) -> Option<f64> {
        self.duration.map(|d| self.start_time + d)
    }
}

/// A fully decoded chart, owned by a single conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeatmapContent {
    pub metadata: Metadata,
    /// Control points of every family, each family in chart order.
    pub control_points: Vec<ControlPoint>,
    pub hit_objects: Vec<HitObject>,
}

impl BeatmapContent {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            control_points: Vec::new(),
            hit_objects: Vec::new(),
        }
    }

    /// Control points of a single family, in chart order.
    pub fn control_points_of(&self, kind: ControlPointKind) -> impl Iterator<Item = &ControlPoint> {
        self.control_points.iter().filter(move |cp| cp.kind == kind)
    }

    /// Display name in the usual `Artist - Title [Version]` form.
    pub fn display_name(&self) -> String {
        format!(
            "{} - {} [{}]",
            self.metadata.artist, self.metadata.title, self.metadata.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_time() {
        assert_eq!(HitObject::with_duration(10.0, 5.5).end_time(), Some(15.5));
        assert_eq!(HitObject::point(10.0).end_time(), None);
    }

    #[test]
    fn test_control_points_of_keeps_order() {
        let mut content = BeatmapContent::default();
        content.control_points = vec![
            ControlPoint::new(0.0, ControlPointKind::Timing),
            ControlPoint::new(10.0, ControlPointKind::Effect),
            ControlPoint::new(20.0, ControlPointKind::Timing),
        ];

        let times: Vec<f64> = content
            .control_points_of(ControlPointKind::Timing)
            .map(|cp| cp.time)
            .collect();
        assert_eq!(times, vec![0.0, 20.0]);
    }
}
