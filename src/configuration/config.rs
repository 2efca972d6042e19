//! Configuration types for loading scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SurfaceConfig`]  – surface dimensions and anchor placement
//! - [`SpringConfig`]   – spring stiffness and friction
//! - [`OffsetsConfig`]  – pointer-relative target offsets per control body
//! - [`SamplingConfig`] – curve/tangent sampling steps for drawing
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! surface:
//!   width: 1280.0          # initial window width, logical pixels
//!   height: 720.0          # initial window height, logical pixels
//!   anchor_inset: 140.0    # anchor distance from the left/right edges
//!
//! spring:
//!   k: 0.075               # stiffness; larger snaps faster, may overshoot
//!   friction: 0.82         # damping in [0,1]; lower kills motion faster
//!
//! offsets:
//!   control_a: [ -90.0, -90.0 ]
//!   control_b: [  90.0,  90.0 ]
//!
//! sampling:
//!   curve_step: 0.012      # t step for the curve polyline
//!   tangent_step: 0.15     # t step for the tangent ticks
//!   tangent_len: 28.0      # tick length in surface units
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation

use serde::Deserialize;

/// Surface dimensions and anchor placement
/// Anchors sit `anchor_inset` in from the left/right edges, vertically centered
#[derive(Deserialize, Debug, Clone)]
pub struct SurfaceConfig {
    pub width: f64, // initial surface width in logical pixels
    pub height: f64, // initial surface height in logical pixels
    pub anchor_inset: f64, // anchor distance from the vertical edges
}

/// Spring integrator constants
#[derive(Deserialize, Debug, Clone)]
pub struct SpringConfig {
    pub k: f64, // stiffness coefficient
    pub friction: f64, // damping coefficient in [0,1]
}

/// Pointer-relative target offsets, one `[x, y]` pair per control body
#[derive(Deserialize, Debug, Clone)]
pub struct OffsetsConfig {
    pub control_a: Vec<f64>, // offset added to the pointer for control A's target
    pub control_b: Vec<f64>, // offset added to the pointer for control B's target
}

/// Sampling steps used by the renderer
#[derive(Deserialize, Debug, Clone)]
pub struct SamplingConfig {
    pub curve_step: f64, // t step for the curve polyline
    pub tangent_step: f64, // t step for the tangent ticks
    pub tangent_len: f64, // tick length in surface units
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub surface: SurfaceConfig, // surface dimensions and anchor placement
    pub spring: SpringConfig, // spring integrator constants
    pub offsets: OffsetsConfig, // pointer-relative target offsets
    pub sampling: SamplingConfig, // renderer sampling steps
}
