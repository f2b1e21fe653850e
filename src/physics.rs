/*
 * Physics Module
 *
 * This module runs one simulation tick: neighbor scans, the three flocking
 * forces, boundary turning, and integration for every boid.
 *
 * Every scan reads a snapshot of positions and velocities taken at the
 * start of the tick, so no boid ever observes another boid's post-tick
 * state and the result does not depend on update order. The force passes
 * can run sequentially or fan out on the rayon pool; both paths feed the
 * same sequential commit loop, which acts as the synchronization barrier
 * before the next tick.
 */

use glam::Vec3;
use rayon::prelude::*;
use std::time::Instant;

use crate::debug::{ForceSample, TickStats};
use crate::forces;
use crate::neighbors::NeighborScratch;
use crate::settings::BoidSettings;
use crate::sim::Simulation;

// Result of the read-only force pass for one boid.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ForcePass {
    separation: Vec3,
    alignment: Vec3,
    cohesion: Vec3,
    neighbors: usize,
}

// Advance every boid by one tick of `dt` seconds.
pub fn step(sim: &mut Simulation, dt: f32) {
    let started = Instant::now();
    let Simulation {
        flock,
        settings,
        boundary,
        stats,
        positions,
        velocities,
        passes,
        scratch,
    } = sim;
    let settings = *settings;
    let boundary = *boundary;

    // Snapshot the population as it was at the start of the tick
    positions.clear();
    velocities.clear();
    positions.extend(flock.iter().map(|boid| boid.position));
    velocities.extend(flock.iter().map(|boid| boid.velocity));
    let positions: &[Vec3] = positions;
    let velocities: &[Vec3] = velocities;
    let count = positions.len();

    // Read-only pass: scan and compute forces against the snapshot
    passes.clear();
    if settings.enable_parallel {
        (0..count)
            .into_par_iter()
            .map_init(NeighborScratch::new, |scratch, index| {
                force_pass(scratch, index, positions, velocities, &settings)
            })
            .collect_into_vec(passes);
    } else {
        passes.extend(
            (0..count).map(|index| force_pass(scratch, index, positions, velocities, &settings)),
        );
    }

    // Commit pass: apply forces, steer at the boundary, integrate. Runs
    // sequentially after every scan has finished, so it is the barrier
    // between this tick's reads and writes.
    let mut neighbor_total = 0;
    let mut turning = 0;
    for (boid, pass) in flock.iter_mut().zip(passes.iter()) {
        if settings.debug_forces {
            boid.debug_forces = ForceSample {
                separation: pass.separation,
                alignment: pass.alignment,
                cohesion: pass.cohesion,
            };
        }

        boid.apply_force(pass.separation, settings.mass);
        boid.apply_force(pass.alignment, settings.mass);
        boid.apply_force(pass.cohesion, settings.mass);
        boid.turn_at_bounds(&boundary, &settings, dt);
        boid.integrate(&settings, dt);
        boid.reset_forces();

        neighbor_total += pass.neighbors;
        turning += usize::from(boid.is_turning_around());
    }

    *stats = TickStats {
        boids: count,
        neighbor_total,
        turning,
        step_time: started.elapsed(),
    };
}

fn force_pass(
    scratch: &mut NeighborScratch,
    index: usize,
    positions: &[Vec3],
    velocities: &[Vec3],
    settings: &BoidSettings,
) -> ForcePass {
    let records = scratch.scan(index, positions, velocities, settings.perception_range);
    ForcePass {
        separation: forces::separation(records, settings),
        alignment: forces::alignment(records, settings),
        cohesion: forces::cohesion(positions[index], records, settings),
        neighbors: records.len(),
    }
}
