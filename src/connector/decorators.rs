//! Decorator strategies: extra polygons drawn on top of a connector.
//!
//! Decorators run in the coordinate space of the segment they receive,
//! after the renderer has already mapped it to local coordinates.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use super::defaults;
use crate::errors::GeometryError;
use crate::types::{Polygon, Segment};

/// Produces the decoration polygons for a connector segment.
#[enum_dispatch]
pub trait Decorate {
    /// Polygons to fill on top of `segment`. An empty vec means the
    /// segment is drawn bare.
    fn decorate(&self, segment: &Segment) -> Vec<Polygon>;
}

/// Closed set of decorator strategies, dispatched without boxing.
#[enum_dispatch(Decorate)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecoratorStrategy {
    NoDecoration,
    ArrowAtStart,
}

/// Draws the connector as a bare line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDecoration;

impl Decorate for NoDecoration {
    fn decorate(&self, _segment: &Segment) -> Vec<Polygon> {
        Vec::new()
    }
}

/// Equilateral arrowhead with its tip at the segment's source end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowAtStart {
    arrow_size: f64,
}

impl ArrowAtStart {
    /// Create an arrowhead with validation (rejects non-positive and
    /// non-finite sizes)
    pub fn try_new(arrow_size: f64) -> Result<ArrowAtStart, GeometryError> {
        if !arrow_size.is_finite() || arrow_size <= 0.0 {
            return Err(GeometryError::InvalidArrowSize { value: arrow_size });
        }
        Ok(ArrowAtStart { arrow_size })
    }

    /// Edge length of the arrowhead triangle
    #[inline]
    pub fn arrow_size(&self) -> f64 {
        self.arrow_size
    }
}

impl Default for ArrowAtStart {
    fn default() -> Self {
        ArrowAtStart { arrow_size: defaults::ARROW_SIZE }
    }
}

impl Decorate for ArrowAtStart {
    fn decorate(&self, segment: &Segment) -> Vec<Polygon> {
        use std::f64::consts::{FRAC_PI_3, PI, TAU};

        let len = segment.length();
        if len == 0.0 {
            // No direction to point the arrow in.
            return Vec::new();
        }

        let delta = segment.delta();
        // dx/len can drift a hair outside [-1, 1] in floating point.
        let mut angle = (delta.x / len).clamp(-1.0, 1.0).acos();
        if delta.y >= 0.0 {
            angle = TAU - angle;
        }

        let tip = segment.source;
        let wing = |theta: f64| tip + dvec2(theta.sin(), theta.cos()) * self.arrow_size;
        vec![Polygon::triangle(tip, wing(angle + FRAC_PI_3), wing(angle + PI - FRAC_PI_3))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "{a:?} should be close to {b:?}");
    }

    // ==================== NoDecoration tests ====================

    #[test]
    fn no_decoration_is_empty() {
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(50.0, 50.0));
        assert!(NoDecoration.decorate(&seg).is_empty());
    }

    // ==================== ArrowAtStart tests ====================

    #[test]
    fn arrow_try_new_valid() {
        assert!(ArrowAtStart::try_new(10.0).is_ok());
        assert!(ArrowAtStart::try_new(0.5).is_ok());
    }

    #[test]
    fn arrow_try_new_rejects_non_positive() {
        assert!(matches!(
            ArrowAtStart::try_new(0.0),
            Err(GeometryError::InvalidArrowSize { value }) if value == 0.0
        ));
        assert!(ArrowAtStart::try_new(-3.0).is_err());
    }

    #[test]
    fn arrow_try_new_rejects_nan() {
        assert!(ArrowAtStart::try_new(f64::NAN).is_err());
        assert!(ArrowAtStart::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn arrow_default_size() {
        assert_eq!(ArrowAtStart::default().arrow_size(), defaults::ARROW_SIZE);
    }

    #[test]
    fn arrow_tip_sits_on_source() {
        let seg = Segment::new(dvec2(30.0, 40.0), dvec2(90.0, 10.0));
        let polys = ArrowAtStart::default().decorate(&seg);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].points()[0], seg.source);
    }

    #[test]
    fn arrow_on_east_segment() {
        // Segment heading east: wings sit forward of the tip, mirrored
        // across the segment.
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(100.0, 0.0));
        let polys = ArrowAtStart::try_new(10.0).unwrap().decorate(&seg);
        let pts = polys[0].points();
        let forward = 10.0 * (3.0f64.sqrt() / 2.0);
        assert_close(pts[1], dvec2(forward, 5.0));
        assert_close(pts[2], dvec2(forward, -5.0));
    }

    #[test]
    fn arrow_on_west_segment() {
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(-100.0, 0.0));
        let polys = ArrowAtStart::try_new(10.0).unwrap().decorate(&seg);
        let pts = polys[0].points();
        let forward = -10.0 * (3.0f64.sqrt() / 2.0);
        assert_close(pts[1], dvec2(forward, -5.0));
        assert_close(pts[2], dvec2(forward, 5.0));
    }

    #[test]
    fn arrow_wings_are_arrow_size_from_tip() {
        let seg = Segment::new(dvec2(12.0, -7.0), dvec2(-40.0, 33.0));
        let arrow = ArrowAtStart::try_new(8.0).unwrap();
        let polys = arrow.decorate(&seg);
        let pts = polys[0].points();
        assert!((pts[1].distance(pts[0]) - 8.0).abs() < 1e-9);
        assert!((pts[2].distance(pts[0]) - 8.0).abs() < 1e-9);
        // Equilateral: the two wings are also arrow_size apart.
        assert!((pts[1].distance(pts[2]) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn arrow_wings_straddle_the_segment() {
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(60.0, 25.0));
        let polys = ArrowAtStart::default().decorate(&seg);
        let pts = polys[0].points();
        let dir = seg.delta() / seg.length();
        // Perpendicular components of the two wings cancel out.
        let side = |p: DVec2| (p - seg.source).perp_dot(dir);
        assert!((side(pts[1]) + side(pts[2])).abs() < 1e-9);
        assert!(side(pts[1]).abs() > 1.0);
    }

    #[test]
    fn arrow_on_degenerate_segment_is_empty() {
        let seg = Segment::new(dvec2(5.0, 5.0), dvec2(5.0, 5.0));
        assert!(ArrowAtStart::default().decorate(&seg).is_empty());
    }

    // ==================== dispatch tests ====================

    #[test]
    fn strategy_enum_dispatches() {
        let seg = Segment::new(dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        let bare: DecoratorStrategy = NoDecoration.into();
        let arrow: DecoratorStrategy = ArrowAtStart::default().into();
        assert!(bare.decorate(&seg).is_empty());
        assert_eq!(arrow.decorate(&seg).len(), 1);
    }
}
