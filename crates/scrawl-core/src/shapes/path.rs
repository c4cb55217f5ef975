//! Outline generation for shapes.
//!
//! Each shape kind maps to one vector path in world coordinates. The path is
//! consumed both by the renderer (stroking) and by hit-testing
//! (distance-to-point), so per-kind geometry lives in exactly one place.

use super::ShapeKind;
use kurbo::{BezPath, Ellipse, Point, Rect, Shape as KurboShape};
use std::f64::consts::FRAC_PI_6;

/// Screen-space length of each arrowhead barb, in pixels.
pub const ARROW_BARB_LEN: f64 = 10.0;

/// Curve flattening tolerance for rectangle and ellipse conversion.
const PATH_TOLERANCE: f64 = 0.1;

/// Build the outline path for a shape, in world coordinates.
///
/// `zoom` only affects arrows: the barb length is `ARROW_BARB_LEN / zoom` so
/// the arrowhead keeps a constant screen-space size at any zoom level.
pub fn outline(kind: ShapeKind, from: Point, to: Point, zoom: f64) -> BezPath {
    let bounds = Rect::from_points(from, to);
    match kind {
        ShapeKind::Rect => bounds.to_path(PATH_TOLERANCE),
        ShapeKind::Diamond => diamond_path(bounds),
        ShapeKind::Ellipse => Ellipse::new(
            bounds.center(),
            (bounds.width() / 2.0, bounds.height() / 2.0),
            0.0,
        )
        .to_path(PATH_TOLERANCE),
        ShapeKind::Arrow => arrow_path(from, to, ARROW_BARB_LEN / zoom),
        ShapeKind::Line => {
            let mut path = BezPath::new();
            path.move_to(from);
            path.line_to(to);
            path
        }
    }
}

/// Closed polygon through the midpoints of each side of the bounding box.
fn diamond_path(bounds: Rect) -> BezPath {
    let center = bounds.center();
    let mut path = BezPath::new();
    path.move_to(Point::new(center.x, bounds.y0));
    path.line_to(Point::new(bounds.x1, center.y));
    path.line_to(Point::new(center.x, bounds.y1));
    path.line_to(Point::new(bounds.x0, center.y));
    path.close_path();
    path
}

/// Shaft from start to tip, plus two barbs at ±30° off the shaft direction.
fn arrow_path(from: Point, to: Point, barb_len: f64) -> BezPath {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    for barb_angle in [angle - FRAC_PI_6, angle + FRAC_PI_6] {
        path.move_to(to);
        path.line_to(Point::new(
            to.x - barb_len * barb_angle.cos(),
            to.y - barb_len * barb_angle.sin(),
        ));
    }
    path
}
