//! Cubic Bézier evaluation
//!
//! Position and unit-tangent sampling for a 4-point cubic curve,
//! using the Bernstein basis and its derivative

use super::states::{NVec2, unit_or_zero};

/// Point on the cubic Bézier curve at parameter `t`.
///
/// Bernstein weights: `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3`.
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
pub fn cubic_point(t: f64, p0: NVec2, p1: NVec2, p2: NVec2, p3: NVec2) -> NVec2 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;

    // Weighted sum of the four control points
    uu * u * p0
        + 3.0 * uu * t * p1
        + 3.0 * u * tt * p2
        + tt * t * p3
}

/// Unit tangent direction of the curve at parameter `t`.
///
/// Standard cubic derivative:
/// `3(1-t)^2 (p1-p0) + 6(1-t)t (p2-p1) + 3t^2 (p3-p2)`,
/// normalized via [`unit_or_zero`]. Where the raw derivative vanishes
/// (coincident control points) this returns the zero vector.
pub fn cubic_tangent(t: f64, p0: NVec2, p1: NVec2, p2: NVec2, p3: NVec2) -> NVec2 {
    let u = 1.0 - t;

    let d = 3.0 * u * u * (p1 - p0)
        + 6.0 * u * t * (p2 - p1)
        + 3.0 * t * t * (p3 - p2);

    unit_or_zero(d)
}
