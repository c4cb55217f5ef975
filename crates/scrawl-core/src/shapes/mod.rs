//! Shape definitions for the whiteboard.

mod path;

pub use path::{outline, ARROW_BARB_LEN};

use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Unique identifier for shapes.
///
/// Assigned by the [`Board`](crate::Board) from a monotonic counter when a
/// shape is committed and never reused afterwards, so identity stays stable
/// if shapes are later reordered or removed.
pub type ShapeId = u64;

/// The geometric primitives a shape can be.
///
/// Pan and select are tool modes, never shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Diamond,
    Ellipse,
    Arrow,
    Line,
}

/// A committed shape.
///
/// `from` and `to` are the two corners of the drag gesture that created the
/// shape; together with `kind` they fully determine the geometry. There is no
/// independently stored width or height. Degenerate shapes (`from == to`) are
/// legal and render as zero-size geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub from: Point,
    pub to: Point,
}

impl Shape {
    /// Create a new shape. Corners must be finite.
    pub fn new(id: ShapeId, kind: ShapeKind, from: Point, to: Point) -> Self {
        debug_assert!(from.is_finite() && to.is_finite());
        Self { id, kind, from, to }
    }

    /// Get the bounding box of the drag gesture, normalized so that corner
    /// order does not matter.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.from, self.to)
    }

    /// Translate both corners by a world-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.from += delta;
        self.to += delta;
    }

    /// Get the outline path at the given camera zoom.
    ///
    /// The same path is used for stroking and for hit-testing. Only the
    /// arrow depends on zoom (its barbs keep a constant screen size).
    pub fn outline(&self, zoom: f64) -> BezPath {
        outline(self.kind, self.from, self.to, zoom)
    }
}
