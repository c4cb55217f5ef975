//! Pointer and wheel events consumed by the controller.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Pointer event type for unified input handling.
///
/// Positions are in screen coordinates. `Leave` is handled identically to
/// `Up`: an in-progress gesture is simply abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up,
    Leave,
    Wheel { delta_y: f64 },
}
