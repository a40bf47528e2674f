//! Paint pass: turns the scene into draw commands plus damage.
//!
//! The scene never rasterizes anything itself. Each [`Scene::paint`]
//! call walks the tree in insertion order (parents before children,
//! back to front) and emits [`DrawCommand`]s for a surface to execute,
//! together with the [`Damage`] accumulated since the previous pass.

use glam::DAffine2;

use crate::errors::GeometryError;
use crate::scene::{ImageHandle, NodeContent, NodeId, Scene};
use crate::types::{Polygon, Rect, Segment};

/// One drawing primitive, in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Stroke the outline of a content box
    Border(Rect),
    /// Blit an image scaled into `rect`
    Image { rect: Rect, image: ImageHandle },
    /// Lay text out inside `rect`
    Text { rect: Rect, text: String },
    /// Stroke a connector line
    Line(Segment),
    /// Fill a connector decoration
    Polygon(Polygon),
}

/// Rectangles invalidated since the previous paint pass.
///
/// The rectangles may overlap and are not minimal. A surface can
/// repaint each one, or take [`Damage::union_rect`] and repaint once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Smallest single rectangle covering every dirty one, or None when
    /// nothing changed.
    pub fn union_rect(&self) -> Option<Rect> {
        self.dirty_rects.iter().copied().reduce(Rect::union)
    }
}

impl Scene {
    /// Produce draw commands for the whole scene, plus the damage since
    /// the previous pass.
    ///
    /// Each node paints its border, its content, then the connector up
    /// to its parent. Connector rectangles are cached per node: a
    /// connector that did not move contributes commands but no damage,
    /// and a degenerate one contributes neither while the cached
    /// rectangle stays in place for future erasing.
    pub fn paint(&mut self) -> Result<(Vec<DrawCommand>, Damage), GeometryError> {
        let mut commands = Vec::new();
        let mut damage = Damage { dirty_rects: std::mem::take(&mut self.pending_damage) };

        for idx in 0..self.nodes.len() {
            let id = NodeId::new(idx);
            let content = self.content_scene_rect(id);
            commands.push(DrawCommand::Border(content));
            match &self.nodes[idx].content {
                NodeContent::Image(slot) => {
                    commands.push(DrawCommand::Image { rect: content, image: slot.snapshot() });
                }
                NodeContent::Text(text) => {
                    commands.push(DrawCommand::Text { rect: content, text: text.clone() });
                }
            }

            let Some(parent) = self.nodes[idx].parent else {
                continue;
            };
            let parent_rect = self.content_scene_rect(parent);
            let connector = self.nodes[idx].connector;
            let result = connector.render(&content, &parent_rect, DAffine2::IDENTITY)?;
            let Some(bounds) = result.bounds else {
                continue;
            };

            if self.nodes[idx].line_rect != Some(bounds) {
                if let Some(old) = self.nodes[idx].line_rect {
                    damage.dirty_rects.push(old);
                }
                damage.dirty_rects.push(bounds);
                self.nodes[idx].line_rect = Some(bounds);
            }
            commands.push(DrawCommand::Line(result.segment));
            for polygon in result.polygons {
                commands.push(DrawCommand::Polygon(polygon));
            }
        }

        crate::log::debug!(
            commands = commands.len(),
            dirty = damage.dirty_rects.len(),
            "paint pass complete"
        );
        Ok((commands, damage))
    }
}
