/*
 * Simulation Module
 *
 * This module defines the Simulation struct owning everything one
 * independent flocking simulation needs: the flock registry, the shared
 * settings, the boundary sphere, and the scratch buffers the tick reuses
 * across frames. Hosts construct these explicitly and pass the simulation
 * around; there is no global registry or singleton lookup.
 */

use glam::Vec3;

use crate::bounds::BoundarySphere;
use crate::debug::TickStats;
use crate::flock::Flock;
use crate::neighbors::NeighborScratch;
use crate::physics::{self, ForcePass};
use crate::settings::BoidSettings;

pub struct Simulation {
    pub flock: Flock,
    pub settings: BoidSettings,
    pub boundary: BoundarySphere,
    /// Counters from the most recent tick.
    pub stats: TickStats,
    // Per-tick scratch, kept allocated between frames
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) passes: Vec<ForcePass>,
    pub(crate) scratch: NeighborScratch,
}

impl Simulation {
    pub fn new(settings: BoidSettings, boundary: BoundarySphere) -> Self {
        Self {
            flock: Flock::new(),
            settings,
            boundary,
            stats: TickStats::default(),
            positions: Vec::new(),
            velocities: Vec::new(),
            passes: Vec::new(),
            scratch: NeighborScratch::new(),
        }
    }

    // Advance the simulation by one tick of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        physics::step(self, dt);
    }
}
