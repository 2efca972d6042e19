//! Build a fully-initialized runtime scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - tuning values (`Tuning`)
//! - curve state (`RopeState` with anchors derived from the surface size)
//! - surface dimensions (`Surface`)
//! - the live pointer position, initialized to the surface center
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration, and drawing systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Tuning;
use crate::simulation::states::{RopeState, ControlBody, Surface, NVec2};

/// Bevy resource holding the entire mutable state of the toy
///
/// Single-writer-per-tick: the input systems write `pointer` and `surface`,
/// the physics system writes `state`, and the drawing systems only read.
/// There are no module-level globals
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Tuning,
    pub state: RopeState,
    pub surface: Surface,
    pub pointer: NVec2,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let s_cfg = cfg.surface;
        let surface = Surface {
            width: s_cfg.width,
            height: s_cfg.height,
        };

        // Anchors: inset from the left/right edges, vertically centered.
        // Computed once here; resize events do not recompute them
        let start = NVec2::new(s_cfg.anchor_inset, surface.height / 2.0);
        let end = NVec2::new(surface.width - s_cfg.anchor_inset, surface.height / 2.0);

        // Control bodies start flanking the surface center, at rest.
        // Targets are placeholders; the first frame overwrites them
        let center = NVec2::new(surface.width / 2.0, surface.height / 2.0);
        let control_a = ControlBody {
            x: center + NVec2::new(-120.0, -120.0),
            v: NVec2::zeros(),
            target: NVec2::zeros(),
        };
        let control_b = ControlBody {
            x: center + NVec2::new(120.0, 120.0),
            v: NVec2::zeros(),
            target: NVec2::zeros(),
        };

        let state = RopeState {
            start,
            end,
            control_a,
            control_b,
        };

        // Tuning (runtime) from the spring/offsets/sampling config sections
        let sp = cfg.spring;
        let off = cfg.offsets;
        let sam = cfg.sampling;
        let parameters = Tuning {
            spring_k: sp.k,
            friction: sp.friction,
            offset_a: NVec2::new(off.control_a[0], off.control_a[1]),
            offset_b: NVec2::new(off.control_b[0], off.control_b[1]),
            curve_step: sam.curve_step,
            tangent_step: sam.tangent_step,
            tangent_len: sam.tangent_len,
        };

        Self {
            parameters,
            state,
            surface,
            pointer: center,
        }
    }
}
