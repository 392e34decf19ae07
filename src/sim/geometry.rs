//! Geometry primitives for collision detection
//!
//! Pure functions over axis-aligned rectangles, line segments and circles.
//! Everything here is side-effect-free and deterministic for identical
//! floating-point inputs; the compound-hitbox logic in `collision` composes
//! these per obstacle type.

use glam::Vec2;

/// Axis-aligned rectangle, position is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Corners in clockwise order starting at the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x(), self.min_y()),
            Vec2::new(self.max_x(), self.min_y()),
            Vec2::new(self.max_x(), self.max_y()),
            Vec2::new(self.min_x(), self.max_y()),
        ]
    }

    /// The four boundary segments in clockwise order
    pub fn edges(&self) -> [Segment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    /// Axis-aligned overlap test (edge contact counts as overlap)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
    }
}

/// Line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

/// Inclusive-bounds containment test
#[inline]
pub fn point_in_rect(p: Vec2, rect: &Rect) -> bool {
    p.x >= rect.min_x() && p.x <= rect.max_x() && p.y >= rect.min_y() && p.y <= rect.max_y()
}

/// Segment-segment intersection via the parametric 2x2 solve.
///
/// Parallel segments have an exactly-zero determinant and report no
/// intersection; there is no epsilon tolerance, so collinear overlap and
/// near-parallel grazing both read as a miss.
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let d1 = s1.b - s1.a;
    let d2 = s2.b - s2.a;

    let det = d1.x * d2.y - d1.y * d2.x;
    if det == 0.0 {
        return false;
    }

    let w = s2.a - s1.a;
    let t = (w.x * d2.y - w.y * d2.x) / det;
    let u = (w.x * d1.y - w.y * d1.x) / det;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// True iff the segment crosses any of the rectangle's four boundary edges.
///
/// A segment fully inside the rectangle does not cross a boundary; callers
/// pair this with a vertex containment test.
pub fn segment_rect_intersect(segment: &Segment, rect: &Rect) -> bool {
    rect.edges().iter().any(|edge| segments_intersect(segment, edge))
}

/// True iff the closest point of the (clamped) segment lies strictly within
/// the circle's radius.
pub fn segment_circle_intersect(segment: &Segment, center: Vec2, radius: f32) -> bool {
    let d = segment.b - segment.a;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return segment.a.distance(center) < radius;
    }

    let t = ((center - segment.a).dot(d) / len_sq).clamp(0.0, 1.0);
    let closest = segment.a + d * t;
    closest.distance(center) < radius
}
