use std::time::Instant;
use crate::simulation::states::{ControlBody, NVec2};
use crate::simulation::params::Tuning;
use crate::simulation::spring::apply_spring;
use crate::simulation::bezier::{cubic_point, cubic_tangent};

/// Helper to build a tuning with the shipped defaults
fn make_tuning() -> Tuning {
    Tuning {
        spring_k: 0.075,
        friction: 0.82,
        offset_a: NVec2::new(-90.0, -90.0),
        offset_b: NVec2::new(90.0, 90.0),
        curve_step: 0.012,
        tangent_step: 0.15,
        tangent_len: 28.0,
    }
}

/// Settle time and raw step throughput of the spring across stiffness values
/// Paste output directly into excel to graph
pub fn bench_spring() {
    // Stiffness values to sweep; friction stays at the shipped default
    let ks = [0.025, 0.05, 0.075, 0.1, 0.15, 0.25];
    let steps = 1_000_000; // integration steps for the timing pass

    println!("k,settle_steps,ns_per_step");

    for k in ks {
        let mut params = make_tuning();
        params.spring_k = k;

        // Settle: steps until the body stays within 0.01 of a fixed target
        let mut body = ControlBody {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            target: NVec2::new(100.0, 0.0),
        };

        let mut settle_steps = 0u32;
        for i in 0..10_000u32 {
            apply_spring(&mut body, &params);
            if (body.target - body.x).norm() < 0.01 {
                settle_steps = i + 1;
                break;
            }
        }

        // Throughput: time a long run of raw integration steps
        let mut body = ControlBody {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            target: NVec2::new(100.0, 0.0),
        };

        // Warm up
        apply_spring(&mut body, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            apply_spring(&mut body, &params);
        }
        let ns_per_step = t0.elapsed().as_secs_f64() * 1e9 / steps as f64;

        println!("{},{},{:.2}", k, settle_steps, ns_per_step);
    }
}

/// Curve sampling throughput: points plus tangents per full redraw
pub fn bench_bezier() {
    let params = make_tuning();
    let redraws = 100_000; // simulated full-curve redraws to time

    let p0 = NVec2::new(140.0, 360.0);
    let p1 = NVec2::new(520.0, 240.0);
    let p2 = NVec2::new(760.0, 480.0);
    let p3 = NVec2::new(1140.0, 360.0);

    // Warm up one redraw
    let mut acc = NVec2::zeros();
    let mut t = 0.0;
    while t <= 1.001 {
        acc += cubic_point(t, p0, p1, p2, p3);
        t += params.curve_step;
    }

    let t0 = Instant::now();
    for _ in 0..redraws {
        let mut t = 0.0;
        while t <= 1.001 {
            acc += cubic_point(t, p0, p1, p2, p3);
            t += params.curve_step;
        }
        let mut t = 0.0;
        while t <= 1.0 {
            acc += cubic_tangent(t, p0, p1, p2, p3);
            t += params.tangent_step;
        }
    }
    let us_per_redraw = t0.elapsed().as_secs_f64() * 1e6 / redraws as f64;

    // acc keeps the loops from being optimized away
    println!("redraw = {:8.4} us (checksum {:.3})", us_per_redraw, acc.norm());
}
