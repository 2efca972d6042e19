//! Runtime tuning values for the simulation
//!
//! `Tuning` holds every constant that shapes the motion and the drawing:
//! - spring stiffness and friction,
//! - the two pointer-relative target offsets,
//! - curve/tangent sampling steps and tick length

use super::states::NVec2;

#[derive(Debug, Clone)]
pub struct Tuning {
    pub spring_k: f64, // stiffness; larger snaps toward the target faster, risking overshoot
    pub friction: f64, // damping in [0,1]; near 0 kills motion quickly, near 1 preserves momentum
    pub offset_a: NVec2, // control A target offset from the pointer
    pub offset_b: NVec2, // control B target offset from the pointer
    pub curve_step: f64, // t step for the curve polyline
    pub tangent_step: f64, // t step for the tangent ticks
    pub tangent_len: f64, // tangent tick length in surface units
}
