//! Geometric primitives shared by the connector engine and the scene layer.
//!
//! Design goals:
//! - Screen coordinates throughout: x grows right, y grows DOWN
//! - Illegal rectangles unrepresentable (`left <= right`, `top <= bottom`)
//! - Raw `f64` only at the API edges, `DVec2` everywhere else

use std::fmt;

use glam::{DAffine2, DVec2, dvec2};

/// Error type for invalid rectangle coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectError {
    /// A coordinate is NaN or infinite
    NonFinite,
    /// `left` is greater than `right`
    InvertedX,
    /// `top` is greater than `bottom`
    InvertedY,
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectError::NonFinite => write!(f, "coordinate is NaN or infinite"),
            RectError::InvertedX => write!(f, "left edge is greater than right edge"),
            RectError::InvertedY => write!(f, "top edge is greater than bottom edge"),
        }
    }
}

impl std::error::Error for RectError {}

/// Axis-aligned rectangle in screen coordinates (y grows down, so
/// `top` is the smaller y).
///
/// The edge ordering invariant is enforced at construction; zero-extent
/// rectangles (`left == right` or `top == bottom`) are legal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// The zero-extent rectangle at the origin.
    pub const ZERO: Rect = Rect { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    /// Create a Rect with validation (rejects NaN/infinite and inverted edges)
    pub fn try_new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Rect, RectError> {
        if !(left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite()) {
            Err(RectError::NonFinite)
        } else if left > right {
            Err(RectError::InvertedX)
        } else if top > bottom {
            Err(RectError::InvertedY)
        } else {
            Ok(Rect { left, top, right, bottom })
        }
    }

    /// Create a Rect from a top-left corner and a size.
    /// Negative size components are rejected as inverted edges.
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Result<Rect, RectError> {
        Rect::try_new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    /// Create the bounding rectangle of two points, normalizing the edge
    /// order. Infallible; coordinates are assumed finite.
    pub fn from_points(a: DVec2, b: DVec2) -> Rect {
        Rect {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> DVec2 {
        dvec2((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Get the top-left corner
    #[inline]
    pub fn origin(&self) -> DVec2 {
        dvec2(self.left, self.top)
    }

    /// Get the size as a vector (width, height)
    #[inline]
    pub fn size(&self) -> DVec2 {
        dvec2(self.width(), self.height())
    }

    /// Check whether the rectangle has zero area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Check whether a point lies inside the rectangle.
    /// Points exactly on an edge count as inside, matching the clipper's
    /// region classification.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// The smallest rectangle covering both `self` and `other`
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Expand to include a point
    pub fn include(self, p: DVec2) -> Rect {
        Rect {
            left: self.left.min(p.x),
            top: self.top.min(p.y),
            right: self.right.max(p.x),
            bottom: self.bottom.max(p.y),
        }
    }

    /// Translate by an offset
    pub fn translate(self, offset: DVec2) -> Rect {
        Rect {
            left: self.left + offset.x,
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} .. {}, {}]", self.left, self.top, self.right, self.bottom)
    }
}

/// Directed line segment from `source` to `dest`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub source: DVec2,
    pub dest: DVec2,
}

impl Segment {
    /// The zero-length segment at the origin, used as the
    /// nothing-to-draw sentinel.
    pub const ZERO: Segment = Segment { source: DVec2::ZERO, dest: DVec2::ZERO };

    pub fn new(source: DVec2, dest: DVec2) -> Segment {
        Segment { source, dest }
    }

    /// Displacement from source to dest
    #[inline]
    pub fn delta(&self) -> DVec2 {
        self.dest - self.source
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// A segment is degenerate when its length is exactly zero. No
    /// tolerance: a very short connector still gets drawn.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }

    /// Bounding rectangle of the two endpoints
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.source, self.dest)
    }

    /// Map both endpoints through an affine transform
    pub fn transform(&self, affine: DAffine2) -> Segment {
        Segment {
            source: affine.transform_point2(self.source),
            dest: affine.transform_point2(self.dest),
        }
    }
}

/// Closed polygon with at least three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<DVec2>,
}

impl Polygon {
    /// Create a polygon from a vertex list.
    /// Returns None if fewer than three vertices are given.
    pub fn new(points: Vec<DVec2>) -> Option<Polygon> {
        if points.len() < 3 { None } else { Some(Polygon { points }) }
    }

    /// Create a triangle (the arrowhead case)
    pub fn triangle(a: DVec2, b: DVec2, c: DVec2) -> Polygon {
        Polygon { points: vec![a, b, c] }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Bounding rectangle of all vertices
    pub fn bounds(&self) -> Rect {
        let first = Rect::from_points(self.points[0], self.points[1]);
        self.points[2..].iter().fold(first, |acc, &p| acc.include(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rect tests ====================

    #[test]
    fn rect_try_new_valid() {
        assert!(Rect::try_new(0.0, 0.0, 10.0, 10.0).is_ok());
        assert!(Rect::try_new(-5.0, -5.0, 5.0, 5.0).is_ok());
    }

    #[test]
    fn rect_try_new_zero_extent() {
        // Degenerate rectangles are legal
        assert!(Rect::try_new(3.0, 4.0, 3.0, 4.0).is_ok());
        assert!(Rect::try_new(0.0, 0.0, 10.0, 0.0).is_ok());
    }

    #[test]
    fn rect_try_new_rejects_nan() {
        assert_eq!(Rect::try_new(f64::NAN, 0.0, 1.0, 1.0), Err(RectError::NonFinite));
        assert_eq!(Rect::try_new(0.0, 0.0, f64::INFINITY, 1.0), Err(RectError::NonFinite));
    }

    #[test]
    fn rect_try_new_rejects_inverted() {
        assert_eq!(Rect::try_new(5.0, 0.0, 1.0, 1.0), Err(RectError::InvertedX));
        assert_eq!(Rect::try_new(0.0, 5.0, 1.0, 1.0), Err(RectError::InvertedY));
    }

    #[test]
    fn rect_from_points_normalizes() {
        let r = Rect::from_points(dvec2(10.0, 8.0), dvec2(2.0, 1.0));
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.top(), 1.0);
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.bottom(), 8.0);
    }

    #[test]
    fn rect_from_origin_size() {
        let r = Rect::from_origin_size(dvec2(1.0, 2.0), dvec2(3.0, 4.0)).unwrap();
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
        assert!(Rect::from_origin_size(dvec2(0.0, 0.0), dvec2(-1.0, 1.0)).is_err());
    }

    #[test]
    fn rect_center_width_height() {
        let r = Rect::try_new(0.0, 0.0, 10.0, 20.0).unwrap();
        assert_eq!(r.center(), dvec2(5.0, 10.0));
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn rect_contains_includes_edges() {
        let r = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(r.contains(dvec2(5.0, 5.0)));
        assert!(r.contains(dvec2(0.0, 5.0)));
        assert!(r.contains(dvec2(10.0, 10.0)));
        assert!(!r.contains(dvec2(10.0001, 5.0)));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::try_new(0.0, 0.0, 5.0, 5.0).unwrap();
        let b = Rect::try_new(3.0, -2.0, 9.0, 4.0).unwrap();
        let u = a.union(b);
        assert_eq!(u, Rect::try_new(0.0, -2.0, 9.0, 5.0).unwrap());
    }

    #[test]
    fn rect_include_point() {
        let r = Rect::ZERO.include(dvec2(-3.0, 7.0));
        assert_eq!(r.left(), -3.0);
        assert_eq!(r.bottom(), 7.0);
    }

    #[test]
    fn rect_translate() {
        let r = Rect::try_new(1.0, 1.0, 2.0, 2.0).unwrap().translate(dvec2(10.0, -1.0));
        assert_eq!(r, Rect::try_new(11.0, 0.0, 12.0, 1.0).unwrap());
    }

    // ==================== Segment tests ====================

    #[test]
    fn segment_length_and_delta() {
        let s = Segment::new(dvec2(1.0, 2.0), dvec2(4.0, 6.0));
        assert_eq!(s.delta(), dvec2(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn segment_degenerate_is_exact() {
        assert!(Segment::ZERO.is_degenerate());
        assert!(Segment::new(dvec2(3.0, 3.0), dvec2(3.0, 3.0)).is_degenerate());
        // A tiny segment is not degenerate
        assert!(!Segment::new(dvec2(0.0, 0.0), dvec2(1e-12, 0.0)).is_degenerate());
    }

    #[test]
    fn segment_bounds_normalized() {
        let s = Segment::new(dvec2(8.0, 1.0), dvec2(2.0, 9.0));
        let b = s.bounds();
        assert_eq!(b, Rect::try_new(2.0, 1.0, 8.0, 9.0).unwrap());
    }

    #[test]
    fn segment_transform_translates() {
        let s = Segment::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        let t = s.transform(DAffine2::from_translation(dvec2(-10.0, 5.0)));
        assert_eq!(t.source, dvec2(-10.0, 5.0));
        assert_eq!(t.dest, dvec2(-9.0, 6.0));
    }

    // ==================== Polygon tests ====================

    #[test]
    fn polygon_needs_three_points() {
        assert!(Polygon::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0)]).is_none());
        assert!(Polygon::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0)]).is_some());
    }

    #[test]
    fn polygon_bounds() {
        let p = Polygon::triangle(dvec2(0.0, 0.0), dvec2(4.0, -1.0), dvec2(2.0, 3.0));
        assert_eq!(p.bounds(), Rect::try_new(0.0, -1.0, 4.0, 3.0).unwrap());
    }

    #[test]
    fn segment_and_disjoint_polygon_union_covers_both() {
        // A decoration that sits entirely outside the segment's own
        // rectangle must still grow the accumulated bounds to the exact
        // union, not stay at either rectangle alone.
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(10.0, 10.0));
        let poly = Polygon::triangle(dvec2(50.0, 40.0), dvec2(60.0, 50.0), dvec2(50.0, 50.0));
        let acc = seg.bounds().union(poly.bounds());
        assert_eq!(acc, Rect::try_new(0.0, 0.0, 60.0, 50.0).unwrap());
        assert_ne!(acc, seg.bounds());
        assert_ne!(acc, poly.bounds());
    }
}
