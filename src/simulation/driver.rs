//! Frame driver: one simulate step per display tick
//!
//! `advance_frame` is the whole per-tick state update: retarget both
//! control bodies from the live pointer, then integrate each exactly once.
//! `run_loop` wraps it in an explicit cooperative loop driven by a
//! [`FrameClock`], so the tick sequence can run against a synthetic clock
//! in tests instead of the real display refresh.

use super::states::{RopeState, NVec2};
use super::params::Tuning;
use super::spring::apply_spring;
use super::scenario::Scenario;

/// Advance the simulation by one frame.
///
/// In fixed order:
/// 1. `control_a.target = pointer + offset_a`
/// 2. `control_b.target = pointer + offset_b`
/// 3. integrate A, then B — exactly once each per tick
///
/// Rendering is a separate read-only pass over the resulting state.
pub fn advance_frame(state: &mut RopeState, pointer: NVec2, params: &Tuning) {
    // Targets come from the pointer and nowhere else
    state.control_a.target = pointer + params.offset_a;
    state.control_b.target = pointer + params.offset_b;

    // The bodies are independent; order does not matter, count does
    apply_spring(&mut state.control_a, params);
    apply_spring(&mut state.control_b, params);
}

/// One tick per `next_frame()` call; returning `false` stops the loop.
///
/// The Bevy viewer plays this role through its `Update` schedule; tests
/// inject [`TickBudget`] to run a bounded, display-free tick sequence.
pub trait FrameClock {
    fn next_frame(&mut self) -> bool;
}

/// Synthetic clock that grants a fixed number of ticks, then stops.
pub struct TickBudget {
    remaining: u64,
}

impl TickBudget {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl FrameClock for TickBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Explicit cooperative runner: compute next state, render, await the clock.
///
/// Runs until the clock declines the next frame. `render` receives the
/// post-integration state once per tick.
pub fn run_loop<C, R>(scenario: &mut Scenario, clock: &mut C, mut render: R)
where
    C: FrameClock,
    R: FnMut(&RopeState),
{
    while clock.next_frame() {
        // Split &mut Scenario into &mut fields in one destructuring step
        let Scenario {
            state,
            parameters,
            pointer,
            ..
        } = scenario;

        advance_frame(state, *pointer, parameters);
        render(&scenario.state);
    }
}
