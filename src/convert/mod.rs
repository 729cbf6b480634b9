//! In-place transformations turning modern chart content into content the
//! legacy format can hold.
//!
//! ## Order
//!
//! Times are truncated before paths are simplified. Both steps mutate the
//! content in place and commit before the next one runs.

pub mod approx;
pub mod path;
pub mod time;

pub use path::PathSimplifier;
pub use time::truncate_times;

use crate::error::ConvertResult;
use crate::models::BeatmapContent;

/// Runs time truncation then path simplification on the content.
pub fn to_legacy_compatible(
    content: &mut BeatmapContent,
    simplifier: &PathSimplifier,
) -> ConvertResult<()> {
    truncate_times(content);
    simplifier.simplify_all(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ControlPoint, ControlPointKind, HitObject, Path, Position, Segment, SegmentKind,
    };

    #[test]
    fn test_end_to_end_scenario() {
        let mut content = BeatmapContent::default();
        content
            .control_points
            .push(ControlPoint::new(1000.9, ControlPointKind::Timing));
        content.hit_objects.push(HitObject::with_path(
            500.5,
            Path::from_marked(
                vec![
                    (Position::new(0.0, 0.0), Some(SegmentKind::PerfectCurve)),
                    (Position::new(100.4, 50.6), Some(SegmentKind::Linear)),
                    (Position::new(200.9, 0.0), None),
                ],
                None,
            ),
        ));
        assert_eq!(content.hit_objects[0].path.as_ref().unwrap().segment_count(), 2);

        to_legacy_compatible(&mut content, &PathSimplifier::default()).unwrap();

        assert_eq!(content.control_points[0].time, 1000.0);

        let object = &content.hit_objects[0];
        assert_eq!(object.start_time, 500.0);

        let path = object.path.as_ref().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.point_count(), 3);
        assert_eq!(path.start(), Some(Position::new(0.0, 0.0)));
        assert_eq!(path.end(), Some(Position::new(200.0, 0.0)));
        assert!(path.positions().all(|q| q.is_integral()));
    }

    #[test]
    fn test_collapse_property_over_many_paths() {
        let kinds = [
            SegmentKind::Linear,
            SegmentKind::Bezier,
            SegmentKind::BSpline(std::num::NonZeroI32::new(3).unwrap()),
            SegmentKind::Catmull,
            SegmentKind::PerfectCurve,
        ];

        let mut content = BeatmapContent::default();
        for (i, first) in kinds.iter().enumerate() {
            for second in &kinds {
                let offset = i as f32 * 13.37;
                let segments = vec![
                    Segment::new(
                        *first,
                        vec![
                            Position::new(0.0, 0.0),
                            Position::new(40.3 + offset, 60.8),
                            Position::new(90.1, 10.6 + offset),
                        ],
                    ),
                    Segment::new(
                        *second,
                        vec![
                            Position::new(90.1, 10.6 + offset),
                            Position::new(140.7, -30.2),
                            Position::new(180.5 + offset, 20.9),
                        ],
                    ),
                ];
                content
                    .hit_objects
                    .push(HitObject::with_path(1000.25, Path::new(segments, None)));
            }
        }

        to_legacy_compatible(&mut content, &PathSimplifier::default()).unwrap();

        for object in &content.hit_objects {
            let path = object.path.as_ref().unwrap();
            assert_eq!(path.segment_count(), 1);
            assert!(path.positions().all(|q| q.is_integral()));
            assert_eq!(path.start(), Some(Position::new(0.0, 0.0)));
            let points = &path.segments[0].points;
            assert!(points.windows(2).all(|w| w[0] != w[1]));
        }
    }
}
