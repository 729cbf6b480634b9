//! Polyline clean-up used when merging slider segments.

use crate::models::Position;

/// Points closer than this are treated as the same point.
pub const DEGENERATE_DISTANCE: f32 = 1e-3;

/// Removes consecutive points that sit on the same position.
pub fn dedup_consecutive(points: &mut Vec<Position>) {
    points.dedup_by(|b, a| a.distance(*b) < DEGENERATE_DISTANCE);
}

fn distance_to_chord(p: Position, a: Position, b: Position) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Ramer-Douglas-Peucker reduction of a polyline.
///
/// The first and last points are always kept, as is every point farther than
/// `tolerance` from the chord it would be dropped into.
pub fn simplify_polyline(points: &[Position], tolerance: f32) -> Vec<Position> {
    let count = points.len();
    if count < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; count];
    keep[0] = true;
    keep[count - 1] = true;

    let mut ranges = vec![(0, count - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut index = first;
        for i in first + 1..last {
            let distance = distance_to_chord(points[i], points[first], points[last]);
            if distance > max_distance {
                max_distance = distance;
                index = i;
            }
        }

        if max_distance > tolerance {
            keep[index] = true;
            ranges.push((first, index));
            ranges.push((index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(*p))
        .collect()
}
