//! Scene tree of draggable content boxes tied to their parents by
//! connectors.
//!
//! Storage is a flat `Vec` and a [`NodeId`] is an index into it. Nodes
//! are never removed, so ids stay valid for the scene's whole lifetime.
//! Methods taking a [`NodeId`] expect an id issued by this scene's
//! [`Scene::insert`]; mutators panic on anything else.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::DVec2;

use crate::connector::{ArrowAtStart, BoundaryClip, Connector};
use crate::interaction::Drag;
use crate::types::Rect;

/// Content box edge length used when a spec does not give a size.
pub const DEFAULT_NODE_SIZE: f64 = 100.0;

/// Identifier of a node within one [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn new(idx: usize) -> NodeId {
        NodeId(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Reference to image pixels owned by the embedding application: an
/// opaque key plus the source dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub key: u64,
    pub width: u32,
    pub height: u32,
}

/// Image slot shared with a producer thread.
///
/// A camera or decoder thread may swap the handle while the scene is
/// being painted; the mutex keeps each swap atomic. A bare [`ImageSlot::swap`]
/// does not record any damage. Producers that need the screen to follow
/// should go through [`Scene::swap_image`] instead, or rely on the caller
/// repainting every frame anyway.
#[derive(Clone, Debug)]
pub struct ImageSlot {
    handle: Arc<Mutex<ImageHandle>>,
}

impl ImageSlot {
    pub fn new(handle: ImageHandle) -> ImageSlot {
        ImageSlot { handle: Arc::new(Mutex::new(handle)) }
    }

    /// Replace the image. Safe to call from any thread.
    pub fn swap(&self, handle: ImageHandle) {
        *self.lock() = handle;
    }

    /// Copy of the current handle.
    pub fn snapshot(&self) -> ImageHandle {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, ImageHandle> {
        // A producer that panicked mid-swap still leaves a whole handle
        // behind; keep painting with it.
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// What a node shows inside its content box.
#[derive(Clone, Debug)]
pub enum NodeContent {
    Image(ImageSlot),
    Text(String),
}

/// One content box in the scene.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) content_pos: DVec2,
    pub(crate) content_size: DVec2,
    pub(crate) content: NodeContent,
    pub(crate) connector: Connector,
    /// Bounding rectangle of the connector to the parent, cached by the
    /// last paint pass that drew it.
    pub(crate) line_rect: Option<Rect>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    /// Top-left corner of the content box, scene coordinates
    pub fn content_pos(&self) -> DVec2 {
        self.content_pos
    }

    /// Width and height of the content box
    pub fn content_size(&self) -> DVec2 {
        self.content_size
    }

    pub fn line_rect(&self) -> Option<Rect> {
        self.line_rect
    }
}

/// Description of a node to insert into a [`Scene`].
#[derive(Clone, Debug)]
pub struct NodeSpec {
    pub(crate) name: String,
    pub(crate) pos: DVec2,
    pub(crate) size: DVec2,
    pub(crate) content: NodeContent,
    pub(crate) connector: Connector,
}

impl NodeSpec {
    /// A text node at the origin with the default size and connector.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> NodeSpec {
        NodeSpec {
            name: name.into(),
            pos: DVec2::ZERO,
            size: DVec2::splat(DEFAULT_NODE_SIZE),
            content: NodeContent::Text(text.into()),
            connector: default_connector(),
        }
    }

    /// An image node at the origin with the default size and connector.
    pub fn image(name: impl Into<String>, handle: ImageHandle) -> NodeSpec {
        NodeSpec {
            name: name.into(),
            pos: DVec2::ZERO,
            size: DVec2::splat(DEFAULT_NODE_SIZE),
            content: NodeContent::Image(ImageSlot::new(handle)),
            connector: default_connector(),
        }
    }

    /// Place the content box's top-left corner.
    pub fn at(mut self, pos: DVec2) -> NodeSpec {
        self.pos = pos;
        self
    }

    /// Size the content box. Negative components are clamped to zero at
    /// insertion.
    pub fn sized(mut self, size: DVec2) -> NodeSpec {
        self.size = size;
        self
    }

    /// Use a specific connector to the parent instead of the default
    /// boundary-clipped arrow.
    pub fn connected(mut self, connector: Connector) -> NodeSpec {
        self.connector = connector;
        self
    }
}

fn default_connector() -> Connector {
    Connector::new(BoundaryClip.into(), ArrowAtStart::default().into())
}

/// A tree of content boxes plus the damage bookkeeping for repainting
/// them incrementally.
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) nodes: Vec<Node>,
    /// Rectangles invalidated since the last paint pass.
    pub(crate) pending_damage: Vec<Rect>,
    pub(crate) drag: Option<Drag>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Insert a node; `parent: None` makes it a root. Roots never draw a
    /// connector regardless of their spec's strategy.
    pub fn insert(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        if let Some(pid) = parent {
            self.nodes[pid.idx()].children.push(id);
        }
        let size = spec.size.max(DVec2::ZERO);
        // The fresh content box needs painting.
        self.pending_damage.push(Rect::from_points(spec.pos, spec.pos + size));
        self.nodes.push(Node {
            name: spec.name,
            parent,
            children: Vec::new(),
            content_pos: spec.pos,
            content_size: size,
            content: spec.content,
            connector: spec.connector,
            line_rect: None,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(idx, node)| (NodeId::new(idx), node))
    }

    /// The node's content box in scene coordinates.
    pub fn content_scene_rect(&self, id: NodeId) -> Rect {
        let node = &self.nodes[id.idx()];
        Rect::from_points(node.content_pos, node.content_pos + node.content_size)
    }

    /// The full painted footprint of a node: its content box, the
    /// connector up to its parent and the connectors down from its
    /// children. Anything that repaints this node must cover all three.
    pub fn bounding_rect(&self, id: NodeId) -> Rect {
        let node = &self.nodes[id.idx()];
        let mut bounds = self.content_scene_rect(id);
        if let Some(rect) = node.line_rect {
            bounds = bounds.union(rect);
        }
        for &child in &node.children {
            if let Some(rect) = self.nodes[child.idx()].line_rect {
                bounds = bounds.union(rect);
            }
        }
        bounds
    }

    /// Move the content box. The connector is recomputed on the next
    /// paint pass.
    pub fn set_position(&mut self, id: NodeId, pos: DVec2) {
        self.record_geometry_change(id);
        self.nodes[id.idx()].content_pos = pos;
        let after = self.bounding_rect(id);
        self.pending_damage.push(after);
    }

    /// Resize the content box; negative components clamp to zero.
    pub fn set_size(&mut self, id: NodeId, size: DVec2) {
        self.record_geometry_change(id);
        self.nodes[id.idx()].content_size = size.max(DVec2::ZERO);
        let after = self.bounding_rect(id);
        self.pending_damage.push(after);
    }

    /// Replace a text node's string. Returns false (and changes nothing)
    /// when the node holds an image.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        let rect = self.content_scene_rect(id);
        match &mut self.nodes[id.idx()].content {
            NodeContent::Text(current) => {
                *current = text.into();
                self.pending_damage.push(rect);
                true
            }
            NodeContent::Image(_) => false,
        }
    }

    /// Replace an image node's handle and record damage for it. Returns
    /// false (and changes nothing) when the node holds text.
    pub fn swap_image(&mut self, id: NodeId, handle: ImageHandle) -> bool {
        let rect = self.content_scene_rect(id);
        match &self.nodes[id.idx()].content {
            NodeContent::Image(slot) => {
                slot.swap(handle);
                self.pending_damage.push(rect);
                true
            }
            NodeContent::Text(_) => false,
        }
    }

    /// Clone the node's image slot for a producer thread, or None for a
    /// text node.
    pub fn image_slot(&self, id: NodeId) -> Option<ImageSlot> {
        match &self.nodes[id.idx()].content {
            NodeContent::Image(slot) => Some(slot.clone()),
            NodeContent::Text(_) => None,
        }
    }

    /// Record the node's current footprint as damage before a geometry
    /// change, so the next paint erases it from its old place.
    fn record_geometry_change(&mut self, id: NodeId) {
        let before = self.bounding_rect(id);
        self.pending_damage.push(before);
    }
}
