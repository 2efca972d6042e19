//! Fixed-step spring integrator for the control bodies
//!
//! One explicit-Euler damped-spring update per frame, driven by
//! `Tuning::spring_k` and `Tuning::friction`

use super::states::ControlBody;
use super::params::Tuning;

/// Advance one control body a single step toward its target.
/// Updates velocity and position in-place, in this order:
///
/// 1. `pull = target - x`
/// 2. `v += pull * spring_k` (spring force, unit mass, unit timestep)
/// 3. `v *= friction` (damping)
/// 4. `x += v`
///
/// Stable for the shipped tuning (k ≈ 0.075, friction ≈ 0.82); no
/// stability guarantee is made for arbitrary constants.
pub fn apply_spring(body: &mut ControlBody, params: &Tuning) {
    // pull is the displacement from the body to its target
    let pull = body.target - body.x;

    // Spring kick: accelerate along the pull
    body.v += pull * params.spring_k;

    // Damping: bleed off a fixed fraction of the velocity each step
    body.v *= params.friction;

    // Advance the position by the damped velocity
    body.x += body.v;
}
