//! Pointer-driven dragging and resizing of scene nodes.
//!
//! The scene is toolkit-agnostic: the embedding event loop feeds it
//! abstract press, move and release events in scene coordinates, then
//! repaints through [`Scene::paint`](crate::scene::Scene).

use glam::DVec2;

use crate::scene::{NodeId, Scene};

/// Pointer buttons with a role in node manipulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Drags a node around (the left mouse button)
    Primary,
    /// Stretches a node (the right mouse button)
    Secondary,
}

/// An in-flight drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Drag {
    pub(crate) node: NodeId,
    pub(crate) mode: DragMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragMode {
    /// Translating the content box. The grab offset keeps the box from
    /// jumping so the point under the cursor stays under the cursor.
    Move { grab_offset: DVec2 },
    /// Stretching the content box, its top-left corner pinned.
    Resize,
}

impl Scene {
    /// Topmost node whose content box contains `pos`. Later insertions
    /// sit above earlier ones. Connector lines are not hit-testable,
    /// only content boxes are.
    pub fn hit_test(&self, pos: DVec2) -> Option<NodeId> {
        (0..self.nodes.len())
            .rev()
            .map(NodeId::new)
            .find(|&id| self.content_scene_rect(id).contains(pos))
    }

    /// Route a press. Returns the grabbed node, or None when the press
    /// landed on empty canvas and was ignored. A new press replaces any
    /// gesture already in flight.
    pub fn pointer_press(&mut self, pos: DVec2, button: PointerButton) -> Option<NodeId> {
        let id = self.hit_test(pos)?;
        let mode = match button {
            PointerButton::Primary => {
                DragMode::Move { grab_offset: pos - self.nodes[id.idx()].content_pos }
            }
            PointerButton::Secondary => DragMode::Resize,
        };
        self.drag = Some(Drag { node: id, mode });
        crate::log::debug!(node = id.idx(), x = pos.x, y = pos.y, "pointer grabbed node");
        Some(id)
    }

    /// Route a move. Does nothing unless a gesture is in flight.
    pub fn pointer_move(&mut self, pos: DVec2) {
        let Some(drag) = self.drag else {
            return;
        };
        match drag.mode {
            DragMode::Move { grab_offset } => self.set_position(drag.node, pos - grab_offset),
            DragMode::Resize => {
                // The cursor defines the bottom-right corner; set_size
                // clamps if it crosses the pinned origin.
                let origin = self.nodes[drag.node.idx()].content_pos;
                self.set_size(drag.node, pos - origin);
            }
        }
    }

    /// Route a release. Only the button that started the gesture ends it.
    pub fn pointer_release(&mut self, button: PointerButton) {
        let Some(drag) = self.drag else {
            return;
        };
        let ends = matches!(
            (button, drag.mode),
            (PointerButton::Primary, DragMode::Move { .. })
                | (PointerButton::Secondary, DragMode::Resize)
        );
        if ends {
            self.drag = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeSpec;
    use glam::dvec2;

    fn scene_with_node(pos: DVec2) -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let id = scene.insert(None, NodeSpec::text("n", "x").at(pos));
        (scene, id)
    }

    // ==================== hit test tests ====================

    #[test]
    fn hit_test_misses_empty_canvas() {
        let (scene, _) = scene_with_node(dvec2(0.0, 0.0));
        assert_eq!(scene.hit_test(dvec2(500.0, 500.0)), None);
    }

    #[test]
    fn hit_test_picks_topmost() {
        let mut scene = Scene::new();
        let below = scene.insert(None, NodeSpec::text("below", "b"));
        let above = scene.insert(None, NodeSpec::text("above", "a").at(dvec2(50.0, 50.0)));
        assert_eq!(scene.hit_test(dvec2(75.0, 75.0)), Some(above));
        assert_eq!(scene.hit_test(dvec2(25.0, 25.0)), Some(below));
    }

    // ==================== drag tests ====================

    #[test]
    fn primary_drag_moves_with_grab_offset() {
        let (mut scene, id) = scene_with_node(dvec2(10.0, 10.0));
        assert_eq!(scene.pointer_press(dvec2(30.0, 40.0), PointerButton::Primary), Some(id));
        scene.pointer_move(dvec2(130.0, 140.0));
        // Grabbed 20 units right and 30 down from the corner; the corner
        // keeps that offset from the cursor.
        assert_eq!(scene.get(id).unwrap().content_pos(), dvec2(110.0, 110.0));

        scene.pointer_release(PointerButton::Primary);
        scene.pointer_move(dvec2(0.0, 0.0));
        assert_eq!(scene.get(id).unwrap().content_pos(), dvec2(110.0, 110.0));
    }

    #[test]
    fn press_outside_content_is_ignored() {
        let (mut scene, id) = scene_with_node(dvec2(0.0, 0.0));
        assert_eq!(scene.pointer_press(dvec2(200.0, 200.0), PointerButton::Primary), None);
        scene.pointer_move(dvec2(300.0, 300.0));
        assert_eq!(scene.get(id).unwrap().content_pos(), dvec2(0.0, 0.0));
    }

    #[test]
    fn secondary_drag_resizes_from_origin() {
        let (mut scene, id) = scene_with_node(dvec2(0.0, 0.0));
        scene.pointer_press(dvec2(50.0, 50.0), PointerButton::Secondary);
        scene.pointer_move(dvec2(160.0, 40.0));
        assert_eq!(scene.get(id).unwrap().content_size(), dvec2(160.0, 40.0));
    }

    #[test]
    fn resize_past_origin_clamps_to_zero() {
        let (mut scene, id) = scene_with_node(dvec2(100.0, 100.0));
        scene.pointer_press(dvec2(150.0, 150.0), PointerButton::Secondary);
        scene.pointer_move(dvec2(60.0, 130.0));
        assert_eq!(scene.get(id).unwrap().content_size(), dvec2(0.0, 30.0));
    }

    #[test]
    fn release_of_other_button_keeps_gesture() {
        let (mut scene, id) = scene_with_node(dvec2(0.0, 0.0));
        scene.pointer_press(dvec2(10.0, 10.0), PointerButton::Secondary);
        scene.pointer_release(PointerButton::Primary);
        // Resize still in flight.
        scene.pointer_move(dvec2(70.0, 80.0));
        assert_eq!(scene.get(id).unwrap().content_size(), dvec2(70.0, 80.0));

        scene.pointer_release(PointerButton::Secondary);
        scene.pointer_move(dvec2(10.0, 10.0));
        assert_eq!(scene.get(id).unwrap().content_size(), dvec2(70.0, 80.0));
    }
}
