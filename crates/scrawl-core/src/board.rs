//! The committed shape list and its identity counter.

use crate::hit;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// The committed shapes of a drawing.
///
/// Shapes are kept in insertion order. Ids come from a monotonic counter and
/// are never reused, so identity stays stable if shapes are reordered or
/// removed. A shape being actively drawn is never part of this list; it is
/// committed on pointer-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a shape, assigning it the next unique id.
    pub fn commit(&mut self, kind: ShapeKind, from: Point, to: Point) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.push(Shape::new(id, kind, from, to));
        id
    }

    /// All committed shapes, in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Check whether a shape with this id currently exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id == id)
    }

    /// Translate every listed shape by the same world-space delta.
    ///
    /// Shapes not listed are untouched; unknown ids are ignored.
    pub fn translate(&mut self, ids: &[ShapeId], delta: Vec2) {
        for shape in self.shapes.iter_mut().filter(|s| ids.contains(&s.id)) {
            shape.translate(delta);
        }
    }

    /// Shapes whose outline passes within stroke tolerance of a world point,
    /// in list order.
    pub fn shapes_at_point(&self, point: Point, zoom: f64) -> Vec<ShapeId> {
        hit::hit_test(&self.shapes, point, zoom)
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
