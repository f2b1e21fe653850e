/*
 * Spawning Module
 *
 * This module creates the boid population inside the simulation's boundary
 * sphere. Configuration is validated before any boid is created, so a
 * rejected spawn leaves the flock exactly as it was. The caller supplies
 * the RNG, which keeps spawning deterministic under a seeded generator.
 */

use glam::Vec3;
use rand::Rng;
use thiserror::Error;

use crate::boid::Boid;
use crate::settings::SettingsError;
use crate::sim::Simulation;
use crate::SPAWN_AREA_MARGIN;

// Configuration problems reported to the spawning collaborator.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("invalid boid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    #[error("boundary radius must be positive and finite, got {0}")]
    InvalidBoundary(f32),
}

// Create the configured number of boids at random positions inside the
// boundary sphere, each with a random heading and already moving at full
// speed. Returns the number of boids created.
pub fn spawn_boids(sim: &mut Simulation, rng: &mut impl Rng) -> Result<usize, SpawnError> {
    sim.settings.validate()?;
    if !sim.boundary.radius.is_finite() || sim.boundary.radius <= 0.0 {
        return Err(SpawnError::InvalidBoundary(sim.boundary.radius));
    }

    let spawn_radius = sim.boundary.radius * SPAWN_AREA_MARGIN;
    for _ in 0..sim.settings.boid_count {
        let offset = random_unit_vector(rng) * rng.gen_range(0.0..spawn_radius);
        let heading = random_unit_vector(rng);
        sim.flock.spawn(Boid::new(
            sim.boundary.center + offset,
            heading,
            sim.settings.speed,
        ));
    }

    Ok(sim.settings.boid_count)
}

// Destroy all boids and create a fresh population.
pub fn respawn_boids(sim: &mut Simulation, rng: &mut impl Rng) -> Result<usize, SpawnError> {
    sim.settings.validate()?;
    sim.flock.clear();
    spawn_boids(sim, rng)
}

// Uniformly distributed unit direction, by rejection sampling the cube.
fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = candidate.length_squared();
        if len_sq > 1.0e-4 && len_sq <= 1.0 {
            return candidate / len_sq.sqrt();
        }
    }
}
