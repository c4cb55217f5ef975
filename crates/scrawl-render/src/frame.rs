//! Frame assembly.
//!
//! Replays the committed shape list (and the draft, if any) through outline
//! generation into an ordered list of stroke commands for a painting backend.

use crate::renderer::Theme;
use kurbo::{Affine, BezPath};
use peniko::Color;
use scrawl_core::Controller;

/// Base stroke width in screen pixels.
///
/// Divided by the camera zoom so strokes keep a constant on-screen width.
pub const STROKE_WIDTH: f64 = 2.0;

/// One stroke to paint: an outline in world coordinates plus color and width.
#[derive(Debug, Clone)]
pub struct StrokeCmd {
    pub path: BezPath,
    pub color: Color,
    pub width: f64,
}

/// A fully assembled frame, ready for a painting backend.
///
/// Strokes are ordered: committed shapes in list order, then the draft.
#[derive(Debug, Clone)]
pub struct Frame {
    /// World-to-screen transform to apply before stroking.
    pub transform: Affine,
    pub background: Color,
    pub strokes: Vec<StrokeCmd>,
}

/// Assemble the frame for the controller's current state.
///
/// Selected shapes and the draft use the highlight color; everything else the
/// normal stroke color.
pub fn build_frame(controller: &Controller, theme: &Theme) -> Frame {
    let zoom = controller.camera.zoom;
    let width = STROKE_WIDTH / zoom;

    let mut strokes = Vec::with_capacity(controller.board.len() + 1);
    for shape in controller.board.shapes() {
        let color = if controller.is_selected(shape.id) {
            theme.highlight
        } else {
            theme.stroke
        };
        strokes.push(StrokeCmd {
            path: shape.outline(zoom),
            color,
            width,
        });
    }
    if let Some(draft) = controller.draft() {
        strokes.push(StrokeCmd {
            path: draft.outline(zoom),
            color: theme.highlight,
            width,
        });
    }

    Frame {
        transform: controller.camera.transform(),
        background: theme.background,
        strokes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use scrawl_core::{MouseButton, PointerEvent, ToolCell, ToolKind};

    fn event(c: &mut Controller, tools: &ToolCell, ev: PointerEvent) {
        c.handle_event(ev, tools);
    }

    fn same_color(a: Color, b: Color) -> bool {
        let (a, b) = (a.to_rgba8(), b.to_rgba8());
        (a.r, a.g, a.b, a.a) == (b.r, b.g, b.b, b.a)
    }

    fn draw_rect(c: &mut Controller, tools: &ToolCell, from: Point, to: Point) {
        tools.set(ToolKind::Rect);
        event(
            c,
            tools,
            PointerEvent::Down {
                position: from,
                button: MouseButton::Left,
            },
        );
        event(c, tools, PointerEvent::Move { position: to });
        event(c, tools, PointerEvent::Up);
    }

    #[test]
    fn test_frame_orders_and_colors_strokes() {
        let tools = ToolCell::default();
        let mut c = Controller::new();
        let theme = Theme::default();

        draw_rect(&mut c, &tools, Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        draw_rect(&mut c, &tools, Point::new(200.0, 0.0), Point::new(300.0, 50.0));

        tools.set(ToolKind::Select);
        event(
            &mut c,
            &tools,
            PointerEvent::Down {
                position: Point::new(0.0, 25.0),
                button: MouseButton::Left,
            },
        );
        event(&mut c, &tools, PointerEvent::Up);

        let frame = build_frame(&c, &theme);
        assert_eq!(frame.strokes.len(), 2);
        assert!(same_color(frame.strokes[0].color, theme.highlight));
        assert!(same_color(frame.strokes[1].color, theme.stroke));
        assert!(same_color(frame.background, theme.background));
    }

    #[test]
    fn test_draft_is_highlighted_and_last() {
        let tools = ToolCell::new(ToolKind::Ellipse);
        let mut c = Controller::new();
        let theme = Theme::default();

        draw_rect(&mut c, &tools, Point::new(0.0, 0.0), Point::new(50.0, 50.0));

        tools.set(ToolKind::Ellipse);
        event(
            &mut c,
            &tools,
            PointerEvent::Down {
                position: Point::new(100.0, 100.0),
                button: MouseButton::Left,
            },
        );
        event(
            &mut c,
            &tools,
            PointerEvent::Move {
                position: Point::new(150.0, 150.0),
            },
        );

        let frame = build_frame(&c, &theme);
        assert_eq!(frame.strokes.len(), 2);
        assert!(same_color(frame.strokes[0].color, theme.stroke));
        assert!(same_color(frame.strokes[1].color, theme.highlight));
    }

    #[test]
    fn test_stroke_width_tracks_zoom() {
        let tools = ToolCell::default();
        let mut c = Controller::new();
        let theme = Theme::default();

        draw_rect(&mut c, &tools, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
        event(&mut c, &tools, PointerEvent::Wheel { delta_y: -1000.0 });
        assert!((c.camera.zoom - 2.0).abs() < f64::EPSILON);

        let frame = build_frame(&c, &theme);
        assert!((frame.strokes[0].width - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_board_empty_frame() {
        let c = Controller::new();
        let frame = build_frame(&c, &Theme::default());
        assert!(frame.strokes.is_empty());
        assert_eq!(frame.transform.as_coeffs(), c.camera.transform().as_coeffs());
    }
}
