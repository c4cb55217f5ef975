//! The interaction state machine.
//!
//! Consumes pointer/wheel events and turns them into camera and board
//! mutations, depending on the tool that was active when the gesture began.

use crate::board::Board;
use crate::camera::Camera;
use crate::input::{MouseButton, PointerEvent};
use crate::shapes::{outline, ShapeId, ShapeKind};
use crate::tools::{ToolKind, ToolStore};
use kurbo::{BezPath, Point};

/// A shape being drawn but not yet committed.
///
/// It carries no id; pointer-up appends it to the board, which assigns the
/// next unique id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draft {
    pub kind: ShapeKind,
    pub from: Point,
    pub to: Point,
}

impl Draft {
    /// Outline path of the draft at the given zoom.
    pub fn outline(&self, zoom: f64) -> BezPath {
        outline(self.kind, self.from, self.to, zoom)
    }
}

/// The in-progress gesture, if any.
///
/// One cohesive value instead of scattered flags, so an active drag always
/// carries its anchor. Discarded on pointer-up or pointer-leave.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging out a new shape. The anchor is the world point under the
    /// initial press.
    Drawing { kind: ShapeKind, anchor: Point },
    /// Dragging the canvas. Tracks the last screen position so each move
    /// applies an incremental offset delta.
    Panning { last_screen: Point },
    /// Dragging the current selection. Tracks the last world position so
    /// repeated moves compose correctly.
    Moving { last_world: Point },
}

/// Owns the board, camera, and gesture state, and routes input events.
///
/// Single-threaded: events are processed one at a time, synchronously, and
/// nothing here blocks or suspends.
#[derive(Debug, Default)]
pub struct Controller {
    pub board: Board,
    pub camera: Camera,
    gesture: Gesture,
    draft: Option<Draft>,
    selection: Vec<ShapeId>,
    needs_redraw: bool,
}

impl Controller {
    /// Create a new controller with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The uncommitted shape being drawn, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Currently selected shape ids.
    pub fn selection(&self) -> &[ShapeId] {
        &self.selection
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// Route one event. The tool store is read once, at pointer-down.
    pub fn handle_event(&mut self, event: PointerEvent, tools: &dyn ToolStore) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_down(position, button, tools.active_tool());
            }
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up | PointerEvent::Leave => self.pointer_up(),
            PointerEvent::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    /// Take the pending redraw flag, clearing it.
    ///
    /// Set whenever the camera, committed shapes, draft, or selection
    /// changed, so callers redraw once per mutating event.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Drop selection entries whose shapes no longer exist on the board.
    pub fn prune_selection(&mut self) {
        let before = self.selection.len();
        let board = &self.board;
        self.selection.retain(|&id| board.contains(id));
        if self.selection.len() != before {
            self.needs_redraw = true;
        }
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton, tool: ToolKind) {
        // Middle button pans regardless of the active tool.
        if tool == ToolKind::Pan || button == MouseButton::Middle {
            self.gesture = Gesture::Panning {
                last_screen: position,
            };
            return;
        }

        let world = self.camera.screen_to_world(position);
        match tool.shape_kind() {
            Some(kind) => {
                self.gesture = Gesture::Drawing {
                    kind,
                    anchor: world,
                };
            }
            None => {
                let hits = self.board.shapes_at_point(world, self.camera.zoom);
                if hits.is_empty() {
                    // Empty click clears the selection; no drag starts.
                    if !self.selection.is_empty() {
                        self.selection.clear();
                        self.needs_redraw = true;
                    }
                } else {
                    log::debug!("selected {} shape(s)", hits.len());
                    self.selection = hits;
                    self.gesture = Gesture::Moving { last_world: world };
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn pointer_move(&mut self, position: Point) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Panning { last_screen } => {
                self.camera.pan(position - last_screen);
                self.gesture = Gesture::Panning {
                    last_screen: position,
                };
                self.needs_redraw = true;
            }
            Gesture::Drawing { kind, anchor } => {
                let world = self.camera.screen_to_world(position);
                self.draft = Some(Draft {
                    kind,
                    from: anchor,
                    to: world,
                });
                self.needs_redraw = true;
            }
            Gesture::Moving { last_world } => {
                let world = self.camera.screen_to_world(position);
                self.board.translate(&self.selection, world - last_world);
                self.gesture = Gesture::Moving { last_world: world };
                self.needs_redraw = true;
            }
        }
    }

    fn pointer_up(&mut self) {
        if let Some(draft) = self.draft.take() {
            let id = self.board.commit(draft.kind, draft.from, draft.to);
            log::debug!("committed {:?} shape {}", draft.kind, id);
            self.needs_redraw = true;
        }
        // Selection persists until a later empty-hit select click clears it.
        self.gesture = Gesture::Idle;
    }

    fn wheel(&mut self, delta_y: f64) {
        // Zoom applies in any state and never cancels an in-progress drag.
        self.camera.apply_wheel(delta_y);
        self.needs_redraw = true;
    }
}
