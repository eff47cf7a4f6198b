//! Headless benchmark of the physics step.
//! Runs each particle count with the cursor circling the window center.

use repel_core::SimConfig;
use repel_physics::particle::generate_seeded;
use repel_physics::{step, thermodynamics};
use std::time::Instant;

const FRAMES: u32 = 300;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Cursor position on a circle around the window center
fn cursor_at(frame: u32, config: &SimConfig) -> [f32; 2] {
    let angle = frame as f32 / FRAMES as f32 * std::f32::consts::TAU;
    let radius = config.height * 0.3;
    [
        config.width * 0.5 + radius * angle.cos(),
        config.height * 0.5 + radius * angle.sin(),
    ]
}

fn main() {
    let config = SimConfig::default();
    let counts = [100u32, 500, 1000, 2500];
    let dt = FRAME_DT * config.slow_motion;

    eprintln!("Stepping {} frames per run...", FRAMES);

    println!(
        "{:>6} | {:>12} | {:>10} | {:>12} | {:>9}",
        "count", "step (ms)", "avg speed", "kinetic E", "contacts"
    );

    for (i, &count) in counts.iter().enumerate() {
        let seed = 1000 + i as u64 * 7919;
        let mut particles = generate_seeded(count, &config, seed);

        let mut total_contacts = 0usize;
        let start = Instant::now();
        for frame in 0..FRAMES {
            let mouse = cursor_at(frame, &config);
            total_contacts += step(&mut particles, dt, Some(mouse), &config);
        }
        let elapsed = start.elapsed();

        println!(
            "{:>6} | {:>12.3} | {:>10.2} | {:>12.1} | {:>9.1}",
            count,
            elapsed.as_secs_f64() * 1000.0 / FRAMES as f64,
            thermodynamics::mean_speed(&particles),
            thermodynamics::kinetic_energy(&particles),
            total_contacts as f64 / FRAMES as f64,
        );
    }
}
