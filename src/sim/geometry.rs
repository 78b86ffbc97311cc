//! Line segment geometry
//!
//! Every wall is a finite segment plus the implicit equation `a·x + b·y + c = 0`
//! of its supporting line. Intersections are solved on the infinite lines and
//! then clipped to the finite segments with a midpoint-distance check.

use glam::DVec2;

use crate::error::{Error, Result};

/// Euclidean distance between two points
#[inline]
pub fn distance(p: DVec2, q: DVec2) -> f64 {
    p.distance(q)
}

/// A finite straight wall with its precomputed line equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: DVec2,
    p2: DVec2,
    center: DVec2,
    length: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl Segment {
    /// Build a segment between two distinct points
    pub fn new(p1: DVec2, p2: DVec2) -> Result<Self> {
        if p1 == p2 {
            return Err(Error::DegenerateSegment { x: p1.x, y: p1.y });
        }
        Ok(Self::between(p1, p2))
    }

    /// Build a segment without rejecting coincident endpoints.
    ///
    /// A zero-length segment has a zero normal, so it never intersects anything.
    pub(crate) fn between(p1: DVec2, p2: DVec2) -> Self {
        Self {
            p1,
            p2,
            center: (p1 + p2) / 2.0,
            length: distance(p1, p2),
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p1.y * (p2.x - p1.x) - p1.x * (p2.y - p1.y),
        }
    }

    #[inline]
    pub fn p1(&self) -> DVec2 {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> DVec2 {
        self.p2
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Line coefficients `(a, b, c)`
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Normal of the supporting line, `(a, b)` (not normalized)
    #[inline]
    pub fn normal(&self) -> DVec2 {
        DVec2::new(self.a, self.b)
    }

    /// Whether a point already known to be on the supporting line lies on the finite segment
    #[inline]
    fn spans(&self, p: DVec2) -> bool {
        distance(p, self.center) <= self.length / 2.0
    }

    /// See [`intersect`]
    #[inline]
    pub fn intersect(&self, other: &Segment) -> Option<DVec2> {
        intersect(self, other)
    }
}

/// Intersection point of two finite segments, if any
///
/// Parallel and coincident lines (zero determinant) never intersect.
pub fn intersect(s1: &Segment, s2: &Segment) -> Option<DVec2> {
    let det = s1.a * s2.b - s2.a * s1.b;
    if det == 0.0 {
        return None;
    }

    // Cramer's rule on a·x + b·y = -c
    let x = -(s1.c * s2.b - s2.c * s1.b) / det;
    let y = -(s1.a * s2.c - s2.a * s1.c) / det;
    let p = DVec2::new(x, y);

    (s1.spans(p) && s2.spans(p)).then_some(p)
}

/// Mirror `v` across the wall `segment`
///
/// Standard reflection with an unnormalized normal: v' = v - 2(v·n)/(n·n) n
#[inline]
pub fn reflect(v: DVec2, segment: &Segment) -> DVec2 {
    let n = segment.normal();
    v - n * (2.0 * v.dot(n) / n.dot(n))
}
