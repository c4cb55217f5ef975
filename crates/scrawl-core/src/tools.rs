//! Tool modes and the external tool store contract.

use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Available tools.
///
/// Pan and select are interaction modes; the rest draw a shape of the
/// matching kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Rect,
    Diamond,
    Ellipse,
    Arrow,
    Line,
}

impl ToolKind {
    /// The shape kind this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Rect => Some(ShapeKind::Rect),
            ToolKind::Diamond => Some(ShapeKind::Diamond),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
            ToolKind::Arrow => Some(ShapeKind::Arrow),
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Select | ToolKind::Pan => None,
        }
    }
}

/// Read access to the externally owned tool selection.
///
/// The toolbar owns tool state; the controller never mutates it and only
/// reads the current value at the start of each gesture.
pub trait ToolStore {
    fn active_tool(&self) -> ToolKind;
}

/// A single-threaded tool store backed by a [`Cell`].
#[derive(Debug, Default)]
pub struct ToolCell(Cell<ToolKind>);

impl ToolCell {
    /// Create a store with the given initial tool.
    pub fn new(tool: ToolKind) -> Self {
        Self(Cell::new(tool))
    }

    /// Change the active tool.
    pub fn set(&self, tool: ToolKind) {
        self.0.set(tool);
    }
}

impl ToolStore for ToolCell {
    fn active_tool(&self) -> ToolKind {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_mapping() {
        assert_eq!(ToolKind::Rect.shape_kind(), Some(ShapeKind::Rect));
        assert_eq!(ToolKind::Diamond.shape_kind(), Some(ShapeKind::Diamond));
        assert_eq!(ToolKind::Select.shape_kind(), None);
        assert_eq!(ToolKind::Pan.shape_kind(), None);
    }

    #[test]
    fn test_tool_cell() {
        let tools = ToolCell::default();
        assert_eq!(tools.active_tool(), ToolKind::Select);
        tools.set(ToolKind::Ellipse);
        assert_eq!(tools.active_tool(), ToolKind::Ellipse);
    }
}
