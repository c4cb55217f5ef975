//! Scrawl Core Library
//!
//! Platform-agnostic geometry, viewport, and interaction logic for the
//! Scrawl whiteboard.

pub mod board;
pub mod camera;
pub mod controller;
pub mod hit;
pub mod input;
pub mod shapes;
pub mod tools;

pub use board::Board;
pub use camera::Camera;
pub use controller::{Controller, Draft, Gesture};
pub use input::{MouseButton, PointerEvent};
pub use shapes::{Shape, ShapeId, ShapeKind};
pub use tools::{ToolCell, ToolKind, ToolStore};
