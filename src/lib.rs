pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{ControlBody, RopeState, Surface, NVec2, unit_or_zero};
pub use simulation::params::Tuning;
pub use simulation::spring::apply_spring;
pub use simulation::bezier::{cubic_point, cubic_tangent};
pub use simulation::driver::{advance_frame, run_loop, FrameClock, TickBudget};
pub use simulation::scenario::Scenario;

pub use configuration::config::{SurfaceConfig, SpringConfig, OffsetsConfig, SamplingConfig, ScenarioConfig};

pub use visualization::ropesim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_spring, bench_bezier};
