/*
 * Flocking Forces Module
 *
 * The three classical flocking rules, each a pure function of the scanning
 * boid, its neighbor records, and the shared settings:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average velocity of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Every rule returns the zero vector when its strength is zero or the
 * neighbor set is empty, so callers never divide by a zero count.
 */

use glam::Vec3;

use crate::math::clamp_magnitude;
use crate::neighbors::NeighborRecord;
use crate::settings::BoidSettings;

// Push away from close neighbors. Only neighbors whose squared distance is
// below `perception_range * separation_strength` contribute; the raw offset
// is subtracted without normalization, so closer neighbors push harder.
// Note the threshold compares a squared distance against a length scaled by
// a dimensionless weight, so lowering the strength also shrinks the subset
// of neighbors that get avoided.
pub fn separation(records: &[NeighborRecord], settings: &BoidSettings) -> Vec3 {
    if settings.separation_strength <= 0.0 || records.is_empty() {
        return Vec3::ZERO;
    }

    let threshold = settings.perception_range * settings.separation_strength;
    let mut force = Vec3::ZERO;
    for record in records {
        if record.dist_sq < threshold {
            force -= record.offset;
        }
    }

    force *= settings.separation_strength;
    clamp_magnitude(force, settings.max_accel / 2.0)
}

// Match the mean velocity of all sensed neighbors.
pub fn alignment(records: &[NeighborRecord], settings: &BoidSettings) -> Vec3 {
    if settings.alignment_strength <= 0.0 || records.is_empty() {
        return Vec3::ZERO;
    }

    let mut force = Vec3::ZERO;
    for record in records {
        force += record.velocity;
    }

    force /= records.len() as f32;
    force *= settings.alignment_strength;
    clamp_magnitude(force, settings.max_accel)
}

// Steer towards the centroid of all sensed neighbors.
pub fn cohesion(position: Vec3, records: &[NeighborRecord], settings: &BoidSettings) -> Vec3 {
    if settings.cohesion_strength <= 0.0 || records.is_empty() {
        return Vec3::ZERO;
    }

    let mut force = Vec3::ZERO;
    for record in records {
        force += record.position;
    }

    force /= records.len() as f32;
    force -= position;
    force *= settings.cohesion_strength;
    clamp_magnitude(force, settings.max_accel)
}
