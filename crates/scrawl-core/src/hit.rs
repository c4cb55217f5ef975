//! Point hit-testing against shape outlines.

use crate::shapes::{Shape, ShapeId};
use kurbo::{BezPath, ParamCurveNearest, Point};

/// Screen-space hit tolerance, in pixels.
///
/// Divided by the camera zoom before use, so the tolerance band around a
/// stroke keeps a constant width on screen regardless of zoom, mirroring the
/// arrowhead scaling.
pub const HIT_TOLERANCE: f64 = 10.0;

/// Accuracy passed to the nearest-point solver.
const NEAREST_ACCURACY: f64 = 1e-6;

/// Minimum distance from a point to a path outline.
///
/// Returns `f64::INFINITY` for an empty path.
pub fn distance_to_outline(path: &BezPath, point: Point) -> f64 {
    path.segments()
        .map(|seg| seg.nearest(point, NEAREST_ACCURACY).distance_sq)
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Find every shape whose outline passes within stroke tolerance of a
/// world-space point.
///
/// Results preserve shape list order, not distance order: a point touching
/// multiple overlapping strokes selects all of them, with no nearest-shape
/// tie-break. Returns an empty vec when nothing hits.
pub fn hit_test(shapes: &[Shape], point: Point, zoom: f64) -> Vec<ShapeId> {
    let tolerance = HIT_TOLERANCE / zoom;
    shapes
        .iter()
        .filter(|shape| distance_to_outline(&shape.outline(zoom), point) <= tolerance)
        .map(|shape| shape.id)
        .collect()
}
