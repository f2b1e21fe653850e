/*
 * Neighbor Scan Module
 *
 * This module finds, for one boid, every other boid within perception range
 * and caches the relative data the force rules need. The scan is a
 * brute-force pass over the whole population: O(n) per boid and O(n^2) per
 * tick, which is the documented scaling bottleneck of the simulation.
 *
 * Optimized for per-tick reuse by:
 * - Using squared distances throughout (no square roots)
 * - Keeping the record buffer allocated between scans
 */

use glam::Vec3;

// Everything the force rules read about one neighbor, valid for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborRecord {
    /// Neighbor position at the start of the tick.
    pub position: Vec3,
    /// Neighbor velocity at the start of the tick.
    pub velocity: Vec3,
    /// Vector from the scanning boid to the neighbor.
    pub offset: Vec3,
    /// Squared length of `offset`.
    pub dist_sq: f32,
}

// Reusable scan buffer. The sequential tick path owns one; the parallel
// path creates one per rayon worker. Cleared at the start of every scan.
#[derive(Debug, Default)]
pub struct NeighborScratch {
    records: Vec<NeighborRecord>,
}

impl NeighborScratch {
    pub fn new() -> Self {
        Self::default()
    }

    // Scan the start-of-tick snapshot for boids within `perception_range`
    // of the boid at `index`. An empty result is a valid outcome, not an
    // error.
    pub fn scan(
        &mut self,
        index: usize,
        positions: &[Vec3],
        velocities: &[Vec3],
        perception_range: f32,
    ) -> &[NeighborRecord] {
        self.records.clear();
        let position = positions[index];
        let range_sq = perception_range * perception_range;

        for (other, (&other_position, &other_velocity)) in
            positions.iter().zip(velocities).enumerate()
        {
            if other == index {
                continue;
            }
            let offset = other_position - position;
            let dist_sq = offset.length_squared();
            if dist_sq < range_sq {
                self.records.push(NeighborRecord {
                    position: other_position,
                    velocity: other_velocity,
                    offset,
                    dist_sq,
                });
            }
        }

        &self.records
    }
}
