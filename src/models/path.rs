//! Slider path geometry.
//!
//! A path is stored as an ordered list of [`Segment`]s, each owning its own
//! control points. Adjacent segments share their boundary point: the last
//! point of segment `n` is the first point of segment `n + 1`.
//!
//! The `.osu` text format instead stores a flat point list where a point
//! carrying a type marker starts a new segment. [`Path::from_marked`] and
//! [`Path::to_marked`] convert between both shapes.

use std::num::NonZeroI32;
use std::ops::{Add, Mul, Sub};

/// A position in osu! pixels, relative to the hit object's head.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        (self - other).length()
    }

    /// Truncates both coordinates towards negative infinity.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn is_integral(self) -> bool {
        self.x.fract() == 0.0 && self.y.fract() == 0.0
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Position {
    type Output = Position;

    fn mul(self, rhs: f32) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

/// Curve type of a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Linear,
    Bezier,
    /// B-spline of an explicit degree (`B<degree>` in legacy text).
    BSpline(NonZeroI32),
    Catmull,
    PerfectCurve,
}

/// A maximal run of control points sharing one curve type.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub points: Vec<Position>,
}

impl Segment {
    pub fn new(kind: SegmentKind, points: Vec<Position>) -> Self {
        Self { kind, points }
    }

    /// True when every point of the segment sits on the same position.
    pub fn is_degenerate(&self) -> bool {
        match self.points.first() {
            Some(first) => self.points.iter().all(|p| p == first),
            None => true,
        }
    }
}

/// A slider path made of one or more segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub segments: Vec<Segment>,
    /// Pixel length stored alongside the path in legacy charts.
    pub expected_distance: Option<f64>,
}

impl Path {
    pub fn new(segments: Vec<Segment>, expected_distance: Option<f64>) -> Self {
        Self {
            segments,
            expected_distance,
        }
    }

    /// Builds a path from a flat point list where `Some(kind)` marks the start
    /// of a new segment.
    ///
    /// A leading point without marker starts a bezier segment, matching the
    /// legacy default. A marker on the very last point does not open an empty
    /// trailing segment.
    pub fn from_marked<I>(points: I, expected_distance: Option<f64>) -> Self
    where
        I: IntoIterator<Item = (Position, Option<SegmentKind>)>,
    {
        let mut segments: Vec<Segment> = Vec::new();

        for (pos, marker) in points {
            match marker {
                Some(kind) => {
                    if let Some(current) = segments.last_mut() {
                        current.points.push(pos);
                    }
                    segments.push(Segment::new(kind, vec![pos]));
                }
                None => match segments.last_mut() {
                    Some(current) => current.points.push(pos),
                    None => segments.push(Segment::new(SegmentKind::Bezier, vec![pos])),
                },
            }
        }

        if segments.len() > 1 && segments.last().is_some_and(|s| s.points.len() < 2) {
            segments.pop();
        }

        Self::new(segments, expected_distance)
    }

    /// Flattens the segment list back into marked points.
    pub fn to_marked(&self) -> Vec<(Position, Option<SegmentKind>)> {
        let mut out: Vec<(Position, Option<SegmentKind>)> = Vec::with_capacity(self.point_count());

        for (i, segment) in self.segments.iter().enumerate() {
            let mut points = segment.points.iter();

            if i == 0 {
                if let Some(first) = points.next() {
                    out.push((*first, Some(segment.kind)));
                }
            } else {
                // the shared boundary point carries the next segment's type
                points.next();
                match out.last_mut() {
                    Some(last) => last.1 = Some(segment.kind),
                    None => continue,
                }
            }

            out.extend(points.map(|p| (*p, None)));
        }

        out
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of distinct control points, counting shared boundaries once.
    pub fn point_count(&self) -> usize {
        let total: usize = self.segments.iter().map(|s| s.points.len()).sum();
        total.saturating_sub(self.segments.len().saturating_sub(1))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.points.is_empty())
    }

    pub fn start(&self) -> Option<Position> {
        self.segments.first().and_then(|s| s.points.first()).copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.segments.last().and_then(|s| s.points.last()).copied()
    }

    /// Iterates control points in order, shared boundaries included once.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().enumerate().flat_map(|(i, s)| {
            let skip = usize::from(i > 0);
            s.points.iter().skip(skip).copied()
        })
    }
}
