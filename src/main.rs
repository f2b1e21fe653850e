/*
 * Boid Flocking Simulation - Headless Driver
 *
 * Runs the flocking simulation without any rendering: spawns a flock
 * inside the default boundary sphere, steps it at a fixed timestep, and
 * logs per-tick statistics through tracing. Useful for profiling the
 * neighbor scan and for watching the boundary guard behave on real
 * populations.
 */

use anyhow::{Context, Result};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use shoal::{
    spawn_boids, BoidSettings, BoundarySphere, Simulation, DEFAULT_BOUNDARY_RADIUS,
};

const SEED: u64 = 0x5EA_F00D;
const TICKS: usize = 1_200;
const DT: f32 = 1.0 / 60.0;
const LOG_EVERY: usize = 60;

fn main() -> Result<()> {
    init_tracing();

    let settings = BoidSettings::default();
    let boundary = BoundarySphere::new(Vec3::ZERO, DEFAULT_BOUNDARY_RADIUS);
    let mut sim = Simulation::new(settings, boundary);

    let mut rng = SmallRng::seed_from_u64(SEED);
    let spawned = spawn_boids(&mut sim, &mut rng).context("spawning initial flock")?;
    info!(spawned, boundary_radius = boundary.radius, "flock ready");

    for tick in 0..TICKS {
        sim.step(DT);
        if (tick + 1) % LOG_EVERY == 0 {
            let stats = sim.stats;
            info!(
                tick = tick + 1,
                boids = stats.boids,
                mean_neighbors = stats.mean_neighbors(),
                turning = stats.turning,
                step_us = stats.step_time.as_micros() as u64,
                "tick"
            );
        }
    }

    info!(ticks = TICKS, "simulation finished");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
