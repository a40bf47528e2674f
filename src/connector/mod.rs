//! Connector rendering: endpoint selection, decoration and repaint bounds.
//!
//! A [`Connector`] pairs one endpoint strategy with one decorator
//! strategy. [`Connector::render`] runs the whole pipeline for a pair of
//! boxes and hands back everything a paint pass needs: the segment to
//! stroke, the polygons to fill and the rectangle to invalidate.

pub mod clip;
pub mod decorators;
pub mod defaults;
pub mod endpoints;

pub use clip::{Outcode, clip_endpoint};
pub use decorators::{ArrowAtStart, Decorate, DecoratorStrategy, NoDecoration};
pub use endpoints::{BoundaryClip, CornerSnap, EndpointCalc, EndpointStrategy, NoConnection};

use glam::DAffine2;

use crate::errors::GeometryError;
use crate::types::{Polygon, Rect, Segment};

/// Everything a paint pass needs for one connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorResult {
    /// The connector line, in local coordinates
    pub segment: Segment,
    /// Decoration polygons, in local coordinates
    pub polygons: Vec<Polygon>,
    /// Bounding rectangle of segment and polygons together. `None` when
    /// the connector is degenerate; callers keep whatever rectangle they
    /// last cached.
    pub bounds: Option<Rect>,
}

impl ConnectorResult {
    /// True when there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}

/// A connector between two boxes: how it attaches and how it is dressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub endpoints: EndpointStrategy,
    pub decorator: DecoratorStrategy,
}

impl Connector {
    pub fn new(endpoints: EndpointStrategy, decorator: DecoratorStrategy) -> Connector {
        Connector { endpoints, decorator }
    }

    /// A connector that never draws anything.
    pub fn disconnected() -> Connector {
        Connector { endpoints: NoConnection.into(), decorator: NoDecoration.into() }
    }

    /// Compute the drawable geometry for a connector from `source` to
    /// `dest`, both given as content rectangles in scene coordinates.
    ///
    /// `to_local` maps scene coordinates into the caller's drawing space;
    /// pass [`DAffine2::IDENTITY`] to stay in scene coordinates.
    /// Decoration runs after the mapping so arrowheads keep their
    /// configured size on screen.
    pub fn render(
        &self,
        source: &Rect,
        dest: &Rect,
        to_local: DAffine2,
    ) -> Result<ConnectorResult, GeometryError> {
        let scene_segment = self.endpoints.endpoints(source, dest)?;
        let segment = scene_segment.transform(to_local);

        if segment.is_degenerate() {
            crate::log::debug!(
                x = segment.source.x,
                y = segment.source.y,
                "degenerate connector, nothing to draw"
            );
            return Ok(ConnectorResult { segment, polygons: Vec::new(), bounds: None });
        }

        let polygons = self.decorator.decorate(&segment);
        let mut bounds = segment.bounds();
        for polygon in &polygons {
            bounds = bounds.union(polygon.bounds());
        }

        crate::log::debug!(
            sx = segment.source.x,
            sy = segment.source.y,
            dx = segment.dest.x,
            dy = segment.dest.y,
            polygons = polygons.len(),
            "rendered connector"
        );

        Ok(ConnectorResult { segment, polygons, bounds: Some(bounds) })
    }
}
