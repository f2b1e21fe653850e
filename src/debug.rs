/*
 * Debug Information Module
 *
 * Diagnostic data exposed to presentation collaborators:
 * - ForceSample: the last force vectors computed for one boid, kept only
 *   when the debug_forces setting is on
 * - TickStats: per-tick counters a host can log or display
 */

use glam::Vec3;
use std::time::Duration;

// Copy of the three force vectors from the most recent tick. Diagnostic
// only; the simulation never reads these back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceSample {
    pub separation: Vec3,
    pub alignment: Vec3,
    pub cohesion: Vec3,
}

// Counters refreshed by every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    /// Population size at the start of the tick.
    pub boids: usize,
    /// Sum of neighbor-set sizes across all boids this tick.
    pub neighbor_total: usize,
    /// Boids in the turning-around state at the end of the tick.
    pub turning: usize,
    /// Wall time the tick took.
    pub step_time: Duration,
}

impl TickStats {
    // Mean neighbors sensed per boid, zero for an empty flock.
    pub fn mean_neighbors(&self) -> f32 {
        if self.boids == 0 {
            0.0
        } else {
            self.neighbor_total as f32 / self.boids as f32
        }
    }
}
