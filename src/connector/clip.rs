//! Rectangle clipping for connector endpoints.
//!
//! A trimmed-down Cohen-Sutherland pass. Connector segments always start
//! at a point inside the rectangle (its center), so only the outward end
//! is clipped and at most two passes reach the boundary.

use glam::DVec2;

use crate::errors::GeometryError;
use crate::types::Rect;

bitflags::bitflags! {
    /// Region classification of a point relative to a rectangle.
    ///
    /// An empty value means inside. Comparisons are strict, so a point
    /// exactly on an edge classifies as inside; that is what makes the
    /// clip loop stop once an endpoint lands on the boundary.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        /// x lies left of the rectangle
        const LEFT   = 0b0001;
        /// x lies right of the rectangle
        const RIGHT  = 0b0010;
        /// y lies below the rectangle (screen coordinates, y grows down)
        const BOTTOM = 0b0100;
        /// y lies above the rectangle
        const TOP    = 0b1000;
    }
}

impl Outcode {
    /// Classify a point against the four edge lines of `rect`.
    pub fn classify(point: DVec2, rect: &Rect) -> Outcode {
        let mut code = Outcode::empty();
        if point.x < rect.left() {
            code |= Outcode::LEFT;
        } else if point.x > rect.right() {
            code |= Outcode::RIGHT;
        }
        if point.y < rect.top() {
            code |= Outcode::TOP;
        } else if point.y > rect.bottom() {
            code |= Outcode::BOTTOM;
        }
        code
    }

    /// Inside the rectangle, boundary included
    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// An outcode has at most two bits set and each pass clears at least one,
/// so two passes always land the moving point on the boundary.
const MAX_CLIP_PASSES: usize = 2;

/// Slide the `origin` end of the `origin -> target` line out to the
/// boundary of `rect`.
///
/// `origin` must lie inside `rect`; anything else is a caller bug and
/// fails fast. When `target` is also inside there is no boundary to hit
/// and `origin` comes back unchanged, which downstream code sees as a
/// degenerate segment.
pub fn clip_endpoint(rect: &Rect, origin: DVec2, target: DVec2) -> Result<DVec2, GeometryError> {
    if !Outcode::classify(origin, rect).is_inside() {
        crate::log::warn!(
            x = origin.x,
            y = origin.y,
            left = rect.left(),
            top = rect.top(),
            right = rect.right(),
            bottom = rect.bottom(),
            "clip origin lies outside its rectangle"
        );
        return Err(GeometryError::ClipOriginOutside { x: origin.x, y: origin.y });
    }

    let mut code = Outcode::classify(target, rect);
    if code.is_inside() {
        return Ok(origin);
    }

    let mut p = origin;
    for _ in 0..MAX_CLIP_PASSES {
        if target.y - p.y == 0.0 {
            // Horizontal run: only x can be out of range.
            p.x = clamp_x(code, p.x, rect);
        } else if target.x - p.x == 0.0 {
            // Vertical run.
            p.y = clamp_y(code, p.y, rect);
        } else {
            // Inverse slope: x travelled per unit of y. The vertical case
            // above keeps the divisor nonzero.
            let slope = (target.x - p.x) / (target.y - p.y);
            if code.contains(Outcode::TOP) {
                p.x += slope * (rect.top() - p.y);
                p.y = rect.top();
            } else if code.contains(Outcode::BOTTOM) {
                p.x += slope * (rect.bottom() - p.y);
                p.y = rect.bottom();
            } else if code.contains(Outcode::RIGHT) {
                p.y += (rect.right() - p.x) / slope;
                p.x = rect.right();
            } else if code.contains(Outcode::LEFT) {
                p.y += (rect.left() - p.x) / slope;
                p.x = rect.left();
            }
        }
        code = Outcode::classify(p, rect);
    }
    Ok(p)
}

fn clamp_x(code: Outcode, x: f64, rect: &Rect) -> f64 {
    let mut x = x;
    if code.contains(Outcode::RIGHT) {
        x = rect.right();
    }
    if code.contains(Outcode::LEFT) {
        x = rect.left();
    }
    x
}

fn clamp_y(code: Outcode, y: f64, rect: &Rect) -> f64 {
    let mut y = y;
    if code.contains(Outcode::TOP) {
        y = rect.top();
    }
    if code.contains(Outcode::BOTTOM) {
        y = rect.bottom();
    }
    y
}
