//! Groups

#![allow(dead_code)]
use core::geometry::Bounds3;
use core::intersection::ShapeId;

/// A non-rendering shape whose only role is to own and transform a
/// collection of child shapes together. Children are arena indices, not
/// owned values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Child shapes, in insertion order.
    children: Vec<ShapeId>,

    /// Cached bounding box of the children in group space, refreshed by
    /// the arena before rendering. While unset, intersection skips the
    /// early-reject test and simply visits every child.
    bounds: Option<Bounds3>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child shapes in insertion order.
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }

    /// Returns true if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child and invalidates the bound cache. The arena is
    /// responsible for updating the child's parent link.
    ///
    /// * `child` - The child's arena index.
    pub(crate) fn push_child(&mut self, child: ShapeId) {
        self.children.push(child);
        self.bounds = None;
    }

    /// Returns the cached bounding box, if it has been refreshed since the
    /// last child was added.
    pub fn cached_bounds(&self) -> Option<Bounds3> {
        self.bounds
    }

    /// Caches a freshly computed bounding box.
    ///
    /// * `bounds` - The box enclosing all children in group space.
    pub(crate) fn set_bounds(&mut self, bounds: Bounds3) {
        self.bounds = Some(bounds);
    }
}
