//! Renderer trait abstraction.

use crate::frame::{self, Frame};
use kurbo::Size;
use peniko::Color;
use scrawl_core::Controller;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors used when painting a frame.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Normal stroke color.
    pub stroke: Color,
    /// Stroke color for selected shapes and the in-progress draft.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(3, 7, 18, 255),
            stroke: Color::from_rgba8(255, 255, 255, 255),
            highlight: Color::from_rgba8(59, 130, 246, 255),
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The controller whose state is rendered.
    pub controller: &'a Controller,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Colors for this frame.
    pub theme: Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the default theme.
    pub fn new(controller: &'a Controller, viewport_size: Size) -> Self {
        Self {
            controller,
            viewport_size,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Assemble the frame for this context.
    pub fn frame(&self) -> Frame {
        frame::build_frame(self.controller, &self.theme)
    }
}

/// Trait for painting backends.
pub trait Renderer {
    /// Resize the drawing surface to the current window bounds.
    ///
    /// Called on mount and on window resize; the surface is exclusively
    /// owned by the renderer.
    fn resize(&mut self, size: Size) -> RenderResult<()>;

    /// Paint one assembled frame onto the surface.
    fn paint(&mut self, frame: &Frame) -> RenderResult<()>;
}

/// A headless backend that records what it was asked to paint.
///
/// Stands in for a GPU surface in tests and benchmarks.
#[derive(Debug, Default)]
pub struct Recorder {
    surface: Option<Size>,
    last_frame_strokes: usize,
    frames_painted: usize,
}

impl Recorder {
    /// Create an unmounted recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current surface size, if mounted.
    pub fn surface(&self) -> Option<Size> {
        self.surface
    }

    /// Stroke count of the most recently painted frame.
    pub fn last_frame_strokes(&self) -> usize {
        self.last_frame_strokes
    }

    /// Total number of frames painted.
    pub fn frames_painted(&self) -> usize {
        self.frames_painted
    }
}

impl Renderer for Recorder {
    fn resize(&mut self, size: Size) -> RenderResult<()> {
        if !size.width.is_finite() || !size.height.is_finite() || size.width <= 0.0 || size.height <= 0.0
        {
            return Err(RendererError::Surface(format!(
                "invalid surface size {}x{}",
                size.width, size.height
            )));
        }
        log::debug!("surface resized to {}x{}", size.width, size.height);
        self.surface = Some(size);
        Ok(())
    }

    fn paint(&mut self, frame: &Frame) -> RenderResult<()> {
        if self.surface.is_none() {
            return Err(RendererError::InitFailed("surface not mounted".into()));
        }
        self.last_frame_strokes = frame.strokes.len();
        self.frames_painted += 1;
        Ok(())
    }
}
