//! Reduction of slider paths to what legacy charts can express.
//!
//! Legacy charts allow a single curve type per slider and integer
//! coordinates. Multi-segment paths are flattened and merged into one
//! linear segment; every path then has its coordinates floored.

use crate::config::ExportConfig;
use crate::convert::approx;
use crate::error::{ConvertError, ConvertResult};
use crate::legacy::path::flatten;
use crate::models::{BeatmapContent, HitObject, Path, Segment, SegmentKind};

#[derive(Debug, Clone)]
pub struct PathSimplifier {
    simplify_tolerance: f32,
}

impl Default for PathSimplifier {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

impl PathSimplifier {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            simplify_tolerance: config.simplify_tolerance,
        }
    }

    /// Simplifies the path of every hit object that has one.
    pub fn simplify_all(&self, content: &mut BeatmapContent) -> ConvertResult<()> {
        let mut merged = 0;

        for (index, object) in content.hit_objects.iter_mut().enumerate() {
            if self.simplify_object(index, object)? {
                merged += 1;
            }
        }

        log::debug!("PATH: merged {} multi-segment paths", merged);
        Ok(())
    }

    /// Simplifies one object's path. Returns whether segments were merged.
    pub fn simplify_object(&self, object_index: usize, object: &mut HitObject) -> ConvertResult<bool> {
        let Some(path) = object.path.as_mut() else {
            return Ok(false);
        };

        if path.is_empty() {
            return Err(ConvertError::MalformedPath { object_index });
        }

        let merged = path.segment_count() > 1;
        if merged {
            let segment = self.merge_segments(path);
            path.segments = vec![segment];
        }

        truncate_coordinates(path);
        Ok(merged)
    }

    /// Merges every segment into one linear segment following the drawn curve.
    fn merge_segments(&self, path: &Path) -> Segment {
        let start = path.start().unwrap_or_default();
        let end = path.end().unwrap_or(start);

        let mut segments = Vec::with_capacity(path.segment_count());
        for segment in &path.segments {
            let mut points = segment.points.clone();
            approx::dedup_consecutive(&mut points);

            // zero-length segments carry no shape
            if points.len() >= 2 {
                segments.push(Segment::new(segment.kind, points));
            }
        }

        if segments.is_empty() {
            return Segment::new(SegmentKind::Linear, vec![start, end]);
        }

        let mut polyline = flatten(&Path::new(segments, None));
        approx::dedup_consecutive(&mut polyline);

        if polyline.len() < 2 {
            return Segment::new(SegmentKind::Linear, vec![start, end]);
        }

        let mut merged = approx::simplify_polyline(&polyline, self.simplify_tolerance);
        let last = merged.len() - 1;
        merged[0] = start;
        merged[last] = end;

        Segment::new(SegmentKind::Linear, merged)
    }
}

/// Floors every control point of the path.
///
/// Legacy readers start a new segment on two equal consecutive points, except
/// in catmull segments, so points that collapse onto their predecessor are
/// dropped. A segment keeps at least two points.
fn truncate_coordinates(path: &mut Path) {
    for segment in &mut path.segments {
        for point in &mut segment.points {
            *point = point.floor();
        }

        if segment.kind == SegmentKind::Catmull {
            continue;
        }

        segment.points.dedup();
        if let [only] = segment.points[..] {
            segment.points.push(only);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use std::num::NonZeroI32;

    fn p(x: f32, y: f32) -> Position {
        Position::new(x, y)
    }

    fn slider(segments: Vec<Segment>) -> HitObject {
        HitObject::with_path(500.5, Path::new(segments, Some(250.0)))
    }

    fn assert_integral(path: &Path) {
        for q in path.positions() {
            assert!(q.is_integral(), "{:?} is not integral", q);
        }
    }

    #[test]
    fn test_two_linear_segments_merge_to_one() {
        let mut object = slider(vec![
            Segment::new(SegmentKind::Bezier, vec![p(0.0, 0.0), p(100.4, 50.6)]),
            Segment::new(SegmentKind::Linear, vec![p(100.4, 50.6), p(200.9, 0.0)]),
        ]);

        let merged = PathSimplifier::default().simplify_object(0, &mut object).unwrap();
        assert!(merged);

        let path = object.path.as_ref().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.segments[0].kind, SegmentKind::Linear);
        assert_eq!(
            path.segments[0].points,
            vec![p(0.0, 0.0), p(100.0, 50.0), p(200.0, 0.0)]
        );
        assert_eq!(path.expected_distance, Some(250.0));
    }

    #[test]
    fn test_curved_segments_merge_keeps_endpoints() {
        let mut object = slider(vec![
            Segment::new(
                SegmentKind::PerfectCurve,
                vec![p(0.0, 0.0), p(50.5, 50.5), p(100.2, 0.0)],
            ),
            Segment::new(
                SegmentKind::Bezier,
                vec![p(100.2, 0.0), p(150.0, -80.0), p(220.7, 10.3)],
            ),
            Segment::new(
                SegmentKind::Catmull,
                vec![p(220.7, 10.3), p(260.0, 40.0), p(300.9, 30.1)],
            ),
        ]);

        PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        let path = object.path.as_ref().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert!(path.point_count() > 3);
        assert_eq!(path.start(), Some(p(0.0, 0.0)));
        assert_eq!(path.end(), Some(p(300.0, 30.0)));
        assert_integral(path);

        // the arc apex survives the merge
        let apex = path.positions().map(|q| q.y).fold(f32::MIN, f32::max);
        assert!(apex > 45.0);
    }

    #[test]
    fn test_single_segment_is_only_truncated() {
        let original = vec![p(0.0, 0.0), p(30.7, 90.2), p(120.5, 10.9)];
        let mut object = slider(vec![Segment::new(SegmentKind::Bezier, original.clone())]);

        let merged = PathSimplifier::default().simplify_object(0, &mut object).unwrap();
        assert!(!merged);

        let path = object.path.as_ref().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.segments[0].kind, SegmentKind::Bezier);
        assert_eq!(
            path.segments[0].points,
            original.iter().map(|q| q.floor()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_path_is_malformed() {
        let mut content = BeatmapContent::default();
        content.hit_objects.push(HitObject::point(0.0));
        content.hit_objects.push(HitObject::with_path(10.0, Path::default()));

        let err = PathSimplifier::default().simplify_all(&mut content).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedPath { object_index: 1 }));
    }

    #[test]
    fn test_degenerate_segments_are_dropped() {
        let mut object = slider(vec![
            Segment::new(SegmentKind::Linear, vec![p(0.0, 0.0), p(50.0, 0.0)]),
            Segment::new(SegmentKind::Bezier, vec![p(50.0, 0.0), p(50.0, 0.0)]),
            Segment::new(SegmentKind::Linear, vec![p(50.0, 0.0), p(50.0, 50.0)]),
        ]);

        PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        let path = object.path.as_ref().unwrap();
        assert_eq!(
            path.segments[0].points,
            vec![p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0)]
        );
    }

    #[test]
    fn test_fully_degenerate_path_keeps_endpoints() {
        let mut object = slider(vec![
            Segment::new(SegmentKind::Linear, vec![p(5.5, 5.5), p(5.5, 5.5)]),
            Segment::new(SegmentKind::Bezier, vec![p(5.5, 5.5), p(5.5, 5.5)]),
        ]);

        PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        let path = object.path.as_ref().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.segments[0].points, vec![p(5.0, 5.0), p(5.0, 5.0)]);
    }

    #[test]
    fn test_floored_points_do_not_repeat() {
        let mut object = slider(vec![
            Segment::new(SegmentKind::Linear, vec![p(0.0, 0.0), p(10.1, 0.0)]),
            Segment::new(
                SegmentKind::Bezier,
                vec![p(10.1, 0.0), p(10.9, 0.9), p(10.9, 30.0)],
            ),
        ]);

        PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        let points = &object.path.as_ref().unwrap().segments[0].points;
        assert_eq!(points.first(), Some(&p(0.0, 0.0)));
        assert_eq!(points.last(), Some(&p(10.0, 30.0)));
        assert!(points.windows(2).all(|w| w[0] != w[1]), "{:?}", points);
    }

    #[test]
    fn test_catmull_keeps_floored_repeats() {
        let mut object = slider(vec![Segment::new(
            SegmentKind::Catmull,
            vec![p(0.0, 0.0), p(20.2, 0.0), p(20.8, 0.0), p(40.0, 10.0)],
        )]);

        PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        assert_eq!(
            object.path.as_ref().unwrap().segments[0].points,
            vec![p(0.0, 0.0), p(20.0, 0.0), p(20.0, 0.0), p(40.0, 10.0)]
        );
    }

    #[test]
    fn test_single_b_spline_keeps_degree() {
        let degree = NonZeroI32::new(3).unwrap();
        let mut object = slider(vec![Segment::new(
            SegmentKind::BSpline(degree),
            vec![p(0.0, 0.0), p(44.0, -92.0), p(100.0, 0.0), p(144.0, 58.0)],
        )]);
        let before = object.clone();

        let merged = PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        assert!(!merged);
        assert_eq!(object, before);
    }

    #[test]
    fn test_objects_without_path_are_untouched() {
        let mut object = HitObject::with_duration(12.5, 3.3);
        let merged = PathSimplifier::default().simplify_object(0, &mut object).unwrap();

        assert!(!merged);
        assert_eq!(object, HitObject::with_duration(12.5, 3.3));
    }
}
