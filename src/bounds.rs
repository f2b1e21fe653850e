/*
 * Boundary Module
 *
 * This module defines the BoundarySphere that boids are steered to stay
 * inside. The sphere lives for the whole simulation session and is
 * reassigned when the spawn area changes.
 */

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundarySphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundarySphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    // Squared-distance containment test, matching the squared-distance
    // convention used by the neighbor scan.
    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        (position - self.center).length_squared() <= self.radius * self.radius
    }
}
