//! Connector-line geometry for draggable node canvases.
//!
//! `tether` computes where the line between a child box and its parent
//! attaches, clips it to the box boundaries, dresses it with arrowheads
//! and reports the rectangle to repaint. A small scene layer ties the
//! geometry to a tree of draggable text and image nodes.

pub mod connector;
pub mod errors;
pub mod interaction;
pub mod log;
pub mod paint;
pub mod scene;
pub mod types;

pub use connector::{
    ArrowAtStart, BoundaryClip, Connector, ConnectorResult, CornerSnap, Decorate,
    DecoratorStrategy, EndpointCalc, EndpointStrategy, NoConnection, NoDecoration, Outcode,
    clip_endpoint,
};
pub use errors::GeometryError;
pub use interaction::PointerButton;
pub use paint::{Damage, DrawCommand};
pub use scene::{ImageHandle, ImageSlot, Node, NodeContent, NodeId, NodeSpec, Scene};
pub use types::{Polygon, Rect, RectError, Segment};

/// Compute one connector in scene coordinates.
///
/// Convenience wrapper around [`Connector::render`] with the identity
/// transform, for callers that draw directly in scene space.
///
/// # Examples
///
/// ```
/// use glam::dvec2;
/// use tether::{ArrowAtStart, BoundaryClip, Rect, compute_connector};
///
/// let parent = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
/// let child = Rect::try_new(200.0, 0.0, 300.0, 100.0).unwrap();
///
/// let out = compute_connector(
///     &child,
///     &parent,
///     BoundaryClip.into(),
///     ArrowAtStart::default().into(),
/// )
/// .unwrap();
/// assert_eq!(out.segment.source, dvec2(200.0, 50.0));
/// assert_eq!(out.segment.dest, dvec2(100.0, 50.0));
/// assert!(out.bounds.is_some());
/// ```
pub fn compute_connector(
    source: &Rect,
    dest: &Rect,
    endpoints: EndpointStrategy,
    decorator: DecoratorStrategy,
) -> Result<ConnectorResult, GeometryError> {
    Connector::new(endpoints, decorator).render(source, dest, glam::DAffine2::IDENTITY)
}
