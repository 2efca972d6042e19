//! Core state types for the rope simulation.
//!
//! Defines the 2D vector alias and the state structs:
//! - `ControlBody` — one spring-driven interior control point
//! - `RopeState`   — the two fixed anchors plus both control bodies
//! - `Surface`     — current drawing-surface dimensions
//!
//! All positions are in surface coordinates: origin top-left, y down,
//! one unit per logical pixel.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One interior Bézier control point driven by the spring integrator.
#[derive(Debug, Clone)]
pub struct ControlBody {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub target: NVec2, // chase target, reassigned every frame
}

/// The full evolving curve state: two fixed anchors and two control bodies.
///
/// Exactly one instance exists per session. The anchors are computed once
/// from the surface dimensions at build time and never touched again.
#[derive(Debug, Clone)]
pub struct RopeState {
    pub start: NVec2, // fixed start anchor
    pub end: NVec2, // fixed end anchor
    pub control_a: ControlBody,
    pub control_b: ControlBody,
}

impl RopeState {
    /// Marker dot positions in draw order: start, end, control A, control B.
    pub fn marker_positions(&self) -> [NVec2; 4] {
        [self.start, self.end, self.control_a.x, self.control_b.x]
    }
}

/// Drawing-surface dimensions, updated on host resize events.
#[derive(Debug, Clone)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

/// Normalize `v` to unit length, treating a zero-length input as length 1.
///
/// The degenerate case therefore returns the zero vector unchanged instead
/// of producing NaN components. Direction is undefined there but the output
/// is stable.
pub fn unit_or_zero(v: NVec2) -> NVec2 {
    let l = v.norm();
    let l = if l == 0.0 { 1.0 } else { l };
    v / l
}
