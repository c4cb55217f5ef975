//! Scrawl Render Library
//!
//! Turns the core controller state into ordered stroke commands each frame,
//! and defines the painting-backend abstraction.

pub mod frame;
pub mod renderer;

pub use frame::{build_frame, Frame, StrokeCmd, STROKE_WIDTH};
pub use renderer::{Recorder, RenderContext, RenderResult, Renderer, RendererError, Theme};
