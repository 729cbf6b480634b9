//! Slider paths as `rosu_map` sees them.

use crate::models::{Path, Position, SegmentKind};
use rosu_map::section::general::GameMode;
use rosu_map::section::hit_objects::{PathControlPoint, PathType, SliderPath, SplineType};
use rosu_map::util::Pos;

/// Maps a `rosu_map` path type onto a segment kind, keeping B-spline degrees.
pub fn segment_kind(path_type: PathType) -> SegmentKind {
    match (path_type.kind, path_type.degree) {
        (SplineType::Linear, _) => SegmentKind::Linear,
        (SplineType::PerfectCurve, _) => SegmentKind::PerfectCurve,
        (SplineType::Catmull, _) => SegmentKind::Catmull,
        (SplineType::BSpline, Some(degree)) => SegmentKind::BSpline(degree),
        (SplineType::BSpline, None) => SegmentKind::Bezier,
    }
}

pub fn path_type(kind: SegmentKind) -> PathType {
    match kind {
        SegmentKind::Linear => PathType::LINEAR,
        SegmentKind::Bezier => PathType::BEZIER,
        SegmentKind::BSpline(degree) => PathType::new_b_spline(degree),
        SegmentKind::Catmull => PathType::CATMULL,
        SegmentKind::PerfectCurve => PathType::PERFECT_CURVE,
    }
}

pub fn from_control_points(points: &[PathControlPoint], expected_distance: Option<f64>) -> Path {
    let marked = points.iter().map(|cp| {
        (
            Position::new(cp.pos.x, cp.pos.y),
            cp.path_type.map(segment_kind),
        )
    });

    Path::from_marked(marked, expected_distance)
}

pub fn to_control_points(path: &Path) -> Vec<PathControlPoint> {
    path.to_marked()
        .into_iter()
        .map(|(pos, kind)| PathControlPoint {
            pos: Pos { x: pos.x, y: pos.y },
            path_type: kind.map(path_type),
        })
        .collect()
}

/// The polyline a legacy client draws for the path.
///
/// The curve is not fitted to `expected_distance`, so it ends on the last
/// control point.
pub fn flatten(path: &Path) -> Vec<Position> {
    let mut slider_path = SliderPath::new(GameMode::Osu, to_control_points(path), None);

    slider_path
        .curve()
        .path()
        .iter()
        .map(|pos| Position::new(pos.x, pos.y))
        .collect()
}
