/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-tick behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average velocity of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * A boundary-turn state machine keeps the boid inside the simulation's
 * boundary sphere, and the integrator enforces a minimum-speed floor so a
 * boid can never stall to a standstill.
 */

use glam::Vec3;

use crate::bounds::BoundarySphere;
use crate::debug::ForceSample;
use crate::math;
use crate::settings::BoidSettings;

// Angular error, in degrees, below which a turning boid counts as aligned
// with its turn target.
const TURN_ALIGNED_DEGREES: f32 = 0.01;

#[derive(Clone, Debug)]
pub struct Boid {
    /// World position.
    pub position: Vec3,
    /// Unit facing direction.
    pub heading: Vec3,
    /// Current velocity, magnitude at most the configured speed.
    pub velocity: Vec3,
    /// Last force vectors, refreshed each tick when debug_forces is on.
    pub debug_forces: ForceSample,
    // Transient per-tick state
    acceleration: Vec3,
    // Boundary-turn state machine
    turning_around: bool,
    target_position: Vec3,
    target_heading: Vec3,
}

impl Boid {
    // Create a boid facing `heading` and already moving at full speed, the
    // state the spawner hands out.
    pub fn new(position: Vec3, heading: Vec3, speed: f32) -> Self {
        let heading = heading.try_normalize().unwrap_or(Vec3::Z);
        Self {
            position,
            heading,
            velocity: heading * speed,
            debug_forces: ForceSample::default(),
            acceleration: Vec3::ZERO,
            turning_around: false,
            target_position: Vec3::ZERO,
            // Identity forward direction until the first turn is triggered
            target_heading: Vec3::Z,
        }
    }

    // Whether the boundary guard is currently steering this boid back.
    pub fn is_turning_around(&self) -> bool {
        self.turning_around
    }

    // Apply a force to the boid, scaled by its mass.
    pub fn apply_force(&mut self, force: Vec3, mass: f32) {
        self.acceleration += force / mass;
    }

    // Clear the transient per-tick state. Forces never carry over between
    // ticks.
    pub fn reset_forces(&mut self) {
        self.acceleration = Vec3::ZERO;
    }

    // Steer back towards the inside of the boundary sphere. While the boid
    // is outside, heading and velocity are pulled towards a target point
    // mirrored through the sphere center; the turning flag clears once the
    // boid is back inside and its heading has settled on the target
    // direction. With bounds disabled the boid drifts freely.
    pub fn turn_at_bounds(
        &mut self,
        boundary: &BoundarySphere,
        settings: &BoidSettings,
        dt: f32,
    ) {
        if !settings.bounds_on {
            return;
        }

        if !boundary.contains(self.position) {
            if !self.turning_around {
                // Aim for the point diametrically opposite the overshoot
                self.target_position =
                    boundary.center + (boundary.center - self.position);
                self.turning_around = true;
            }

            if let Some(direction) = self.target_position.try_normalize() {
                self.target_heading = direction;
            }
            let rate = dt * settings.speed;
            self.heading = math::slerp(self.heading, self.target_heading, rate);
            self.velocity =
                math::slerp(self.velocity, self.target_position - self.position, rate);
        } else if math::angle_between_degrees(self.heading, self.target_heading)
            <= TURN_ALIGNED_DEGREES
        {
            self.turning_around = false;
        }
    }

    // Integrate accumulated forces into velocity and pose.
    pub fn integrate(&mut self, settings: &BoidSettings, dt: f32) {
        self.acceleration = math::clamp_magnitude(self.acceleration, settings.max_accel);
        self.velocity += self.acceleration;
        self.velocity = math::clamp_magnitude(self.velocity, settings.speed);

        // Minimum-speed floor: a stalled boid resumes full speed along its
        // current heading instead of freezing in place.
        if self.velocity.length_squared() <= settings.stall_threshold {
            self.velocity = self.heading * settings.speed;
        }

        if self.velocity != Vec3::ZERO {
            self.position += self.velocity * dt;
            self.heading = self.velocity.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn settings() -> BoidSettings {
        BoidSettings::default()
    }

    #[test]
    fn new_boid_moves_at_full_speed_along_its_heading() {
        let boid = Boid::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 2.5);
        assert_relative_eq!(boid.heading.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(boid.velocity.distance(Vec3::new(0.0, 0.0, 2.5)), 0.0, epsilon = 1e-6);
        assert!(!boid.is_turning_around());
    }

    #[test]
    fn apply_force_divides_by_mass() {
        let mut s = settings();
        s.max_accel = 1.0;
        s.speed = 8.0;
        let mut boid = Boid::new(Vec3::ZERO, Vec3::X, 0.0);
        boid.velocity = Vec3::ZERO;
        boid.apply_force(Vec3::new(0.8, 0.0, 0.0), 2.0);
        boid.integrate(&s, 1.0);
        // 0.8 / mass 2.0 = 0.4 acceleration, below every clamp, but the
        // stall floor does not trigger because 0.4^2 > 0.1
        assert_relative_eq!(boid.velocity.x, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn integrate_clamps_acceleration_then_velocity() {
        let mut s = settings();
        s.max_accel = 0.5;
        s.speed = 1.0;
        s.stall_threshold = 0.0;
        let mut boid = Boid::new(Vec3::ZERO, Vec3::X, 1.0);
        boid.apply_force(Vec3::new(100.0, 0.0, 0.0), 1.0);
        boid.integrate(&s, 1.0);
        // Acceleration capped at 0.5, added to the 1.0 velocity, then the
        // sum is capped back to speed
        assert_relative_eq!(boid.velocity.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn stall_floor_restores_full_speed_along_heading() {
        let s = settings();
        let mut boid = Boid::new(Vec3::ZERO, Vec3::Y, s.speed);
        boid.velocity = Vec3::new(0.1, 0.0, 0.0);
        boid.integrate(&s, 0.1);
        // 0.01 squared speed is below the 0.1 floor
        assert_relative_eq!(
            boid.velocity.distance(Vec3::new(0.0, s.speed, 0.0)),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn zero_speed_boid_does_not_move_or_turn() {
        let mut s = settings();
        s.speed = 0.0;
        let mut boid = Boid::new(Vec3::ONE, Vec3::X, 0.0);
        boid.integrate(&s, 1.0);
        assert_eq!(boid.position, Vec3::ONE);
        assert_eq!(boid.heading, Vec3::X);
    }

    #[test]
    fn heading_faces_the_velocity_after_integration() {
        let mut s = settings();
        s.stall_threshold = 0.0;
        s.speed = 8.0;
        s.max_accel = 1.0;
        let mut boid = Boid::new(Vec3::ZERO, Vec3::X, 1.0);
        boid.apply_force(Vec3::new(0.0, 1.0, 0.0), 1.0);
        boid.integrate(&s, 1.0);
        assert_relative_eq!(
            boid.heading.distance(boid.velocity.normalize()),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn reset_forces_clears_accumulated_acceleration() {
        let mut s = settings();
        s.stall_threshold = 0.0;
        let mut boid = Boid::new(Vec3::ZERO, Vec3::X, 1.0);
        boid.apply_force(Vec3::new(0.3, 0.0, 0.0), 1.0);
        boid.reset_forces();
        let before = boid.velocity;
        boid.integrate(&s, 1.0);
        assert_relative_eq!(boid.velocity.distance(before), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn leaving_the_boundary_enters_the_turning_state() {
        let s = settings();
        let boundary = BoundarySphere::new(Vec3::ZERO, 10.0);
        let mut boid = Boid::new(Vec3::new(12.0, 0.0, 0.0), Vec3::X, s.speed);
        boid.turn_at_bounds(&boundary, &s, 0.02);
        assert!(boid.is_turning_around());
    }

    #[test]
    fn turn_target_is_mirrored_through_the_center() {
        let s = settings();
        let boundary = BoundarySphere::new(Vec3::new(1.0, 0.0, 0.0), 5.0);
        let mut boid = Boid::new(Vec3::new(8.0, 0.0, 0.0), Vec3::X, s.speed);
        boid.turn_at_bounds(&boundary, &s, 0.02);
        // target = center + (center - position) = (-6, 0, 0)
        assert_relative_eq!(
            boid.target_position.distance(Vec3::new(-6.0, 0.0, 0.0)),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn heading_error_strictly_decreases_while_turning() {
        let s = settings();
        let boundary = BoundarySphere::new(Vec3::ZERO, 10.0);
        let mut boid = Boid::new(Vec3::new(0.0, 0.0, 15.0), Vec3::Z, s.speed);

        boid.turn_at_bounds(&boundary, &s, 0.02);
        let mut error = math::angle_between_degrees(boid.heading, boid.target_heading);
        for _ in 0..50 {
            boid.turn_at_bounds(&boundary, &s, 0.02);
            let next = math::angle_between_degrees(boid.heading, boid.target_heading);
            assert!(next < error || error <= TURN_ALIGNED_DEGREES);
            error = next;
        }
    }

    #[test]
    fn turning_flag_clears_once_inside_and_aligned() {
        let s = settings();
        let boundary = BoundarySphere::new(Vec3::ZERO, 10.0);
        let mut boid = Boid::new(Vec3::new(0.0, 0.0, 10.5), Vec3::Z, s.speed);
        boid.turn_at_bounds(&boundary, &s, 0.02);
        assert!(boid.is_turning_around());

        // Back inside with the heading already settled on the target
        boid.position = Vec3::ZERO;
        boid.heading = boid.target_heading;
        boid.turn_at_bounds(&boundary, &s, 0.02);
        assert!(!boid.is_turning_around());
    }

    #[test]
    fn bounds_off_never_transitions() {
        let mut s = settings();
        s.bounds_on = false;
        let boundary = BoundarySphere::new(Vec3::ZERO, 10.0);
        let mut boid = Boid::new(Vec3::new(1.0e4, 0.0, 0.0), Vec3::X, s.speed);
        for _ in 0..10 {
            boid.turn_at_bounds(&boundary, &s, 0.02);
            boid.integrate(&s, 0.02);
        }
        assert!(!boid.is_turning_around());
    }
}
