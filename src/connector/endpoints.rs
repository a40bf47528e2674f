//! Endpoint strategies: where a connector attaches to its two boxes.
//!
//! Every strategy receives the source and destination content rectangles
//! in scene coordinates and produces a scene-space [`Segment`]. The
//! zero-length [`Segment::ZERO`] doubles as the nothing-to-draw sentinel.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::clip::{Outcode, clip_endpoint};
use crate::errors::GeometryError;
use crate::types::{Rect, Segment};

/// Picks the attachment points of a connector between two boxes.
#[enum_dispatch]
pub trait EndpointCalc {
    /// Compute the connector segment from `source` to `dest`.
    fn endpoints(&self, source: &Rect, dest: &Rect) -> Result<Segment, GeometryError>;
}

/// Closed set of endpoint strategies, dispatched without boxing.
#[enum_dispatch(EndpointCalc)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndpointStrategy {
    NoConnection,
    CornerSnap,
    BoundaryClip,
}

/// Never draws a connector. Used by root nodes and free-floating boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoConnection;

impl EndpointCalc for NoConnection {
    fn endpoints(&self, _source: &Rect, _dest: &Rect) -> Result<Segment, GeometryError> {
        Ok(Segment::ZERO)
    }
}

/// Connects facing corners, picked from the quadrant the destination
/// center occupies relative to the source center.
///
/// When the two centers share an x or y coordinate exactly, no quadrant
/// wins and the segment runs center to center instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerSnap;

impl EndpointCalc for CornerSnap {
    fn endpoints(&self, source: &Rect, dest: &Rect) -> Result<Segment, GeometryError> {
        let sc = source.center();
        let dc = dest.center();
        let sh = dvec2(source.width() / 2.0, source.height() / 2.0);
        let dh = dvec2(dest.width() / 2.0, dest.height() / 2.0);

        // Strict comparisons on both axes; a tie on either axis falls
        // through to the center-to-center case.
        let (source_off, dest_off) = if dc.x > sc.x && dc.y > sc.y {
            // Dest below-right: source bottom-right corner to dest top-left.
            (sh, -dh)
        } else if dc.x < sc.x && dc.y < sc.y {
            (-sh, dh)
        } else if dc.x > sc.x && dc.y < sc.y {
            // Dest above-right: source top-right corner to dest bottom-left.
            (dvec2(sh.x, -sh.y), dvec2(-dh.x, dh.y))
        } else if dc.x < sc.x && dc.y > sc.y {
            (dvec2(-sh.x, sh.y), dvec2(dh.x, -dh.y))
        } else {
            (DVec2::ZERO, DVec2::ZERO)
        };

        Ok(Segment::new(sc + source_off, dc + dest_off))
    }
}

/// Connects box boundaries along the line between the two centers.
///
/// Each end of the center-to-center line is clipped to its own
/// rectangle. If the destination center already sits inside the source
/// rectangle the boxes overlap and there is nothing to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryClip;

impl EndpointCalc for BoundaryClip {
    fn endpoints(&self, source: &Rect, dest: &Rect) -> Result<Segment, GeometryError> {
        let sc = source.center();
        let dc = dest.center();

        if Outcode::classify(dc, source).is_inside() {
            crate::log::debug!(
                x = dc.x,
                y = dc.y,
                "destination center inside source box, suppressing connector"
            );
            return Ok(Segment::ZERO);
        }

        let p1 = clip_endpoint(source, sc, dc)?;
        let p2 = clip_endpoint(dest, dc, sc)?;
        Ok(Segment::new(p1, p2))
    }
}
