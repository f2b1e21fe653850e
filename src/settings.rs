/*
 * Simulation Settings Module
 *
 * This module defines the BoidSettings struct that contains all the
 * adjustable parameters for the flocking simulation. A host configuration
 * layer mutates values through the clamping setters, so every field is
 * guaranteed to be inside its documented range at the point of mutation and
 * is never re-checked at the point of use.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Default values
const INIT_BOID_COUNT: usize = 250;
const MAX_BOID_COUNT: usize = 500;
const INIT_SEPARATION_STRENGTH: f32 = 0.65;
const INIT_ALIGNMENT_STRENGTH: f32 = 0.55;
const INIT_COHESION_STRENGTH: f32 = 0.4;
const INIT_MASS: f32 = 1.0;
const INIT_SPEED: f32 = 2.5;
const INIT_MAX_ACCEL: f32 = 0.4;
const INIT_PERCEPTION_RANGE: f32 = 1.0;
const INIT_STALL_THRESHOLD: f32 = 0.1;

// Parameters for the simulation that can be adjusted by the host at runtime
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoidSettings {
    /// Number of boids created by a spawn pass, in [1, 500].
    pub boid_count: usize,
    /// How strongly boids avoid each other, in [0, 1].
    pub separation_strength: f32,
    /// How strongly boids match neighbor velocities, in [0, 1].
    pub alignment_strength: f32,
    /// How strongly boids group together, in [0, 1].
    pub cohesion_strength: f32,
    /// Mass dividing each applied force, in [0.1, 5].
    pub mass: f32,
    /// Maximum linear speed, in [0, 8].
    pub speed: f32,
    /// Maximum acceleration magnitude per tick, in [0, 1].
    pub max_accel: f32,
    /// How far a boid senses neighbors, in [0, 2].
    pub perception_range: f32,
    /// Whether boids turn around at the boundary sphere.
    pub bounds_on: bool,
    /// Keep a per-boid copy of the last computed force vectors.
    pub debug_forces: bool,
    /// Compute force passes on the rayon pool instead of sequentially.
    pub enable_parallel: bool,
    /// Squared-speed floor below which velocity snaps back to full speed
    /// along the current heading. Tunable because at very low configured
    /// speeds the floor dominates normal motion.
    pub stall_threshold: f32,
}

impl Default for BoidSettings {
    fn default() -> Self {
        Self {
            boid_count: INIT_BOID_COUNT,
            separation_strength: INIT_SEPARATION_STRENGTH,
            alignment_strength: INIT_ALIGNMENT_STRENGTH,
            cohesion_strength: INIT_COHESION_STRENGTH,
            mass: INIT_MASS,
            speed: INIT_SPEED,
            max_accel: INIT_MAX_ACCEL,
            perception_range: INIT_PERCEPTION_RANGE,
            bounds_on: true,
            debug_forces: false,
            enable_parallel: true,
            stall_threshold: INIT_STALL_THRESHOLD,
        }
    }
}

impl BoidSettings {
    // Setters used by configuration collaborators; each clamps to the
    // documented range so invalid values never enter the simulation.
    pub fn set_count(&mut self, count: usize) {
        self.boid_count = count.clamp(1, MAX_BOID_COUNT);
    }

    pub fn set_separation(&mut self, separation: f32) {
        self.separation_strength = separation.clamp(0.0, 1.0);
    }

    pub fn set_alignment(&mut self, alignment: f32) {
        self.alignment_strength = alignment.clamp(0.0, 1.0);
    }

    pub fn set_cohesion(&mut self, cohesion: f32) {
        self.cohesion_strength = cohesion.clamp(0.0, 1.0);
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.clamp(0.1, 5.0);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(0.0, 8.0);
    }

    pub fn set_max_accel(&mut self, max_accel: f32) {
        self.max_accel = max_accel.clamp(0.0, 1.0);
    }

    pub fn set_perception(&mut self, perception: f32) {
        self.perception_range = perception.clamp(0.0, 2.0);
    }

    pub fn toggle_bounds(&mut self) {
        self.bounds_on = !self.bounds_on;
    }

    pub fn toggle_debug_forces(&mut self) {
        self.debug_forces = !self.debug_forces;
    }

    // Checked at spawn time; a settings record that was only ever mutated
    // through the setters always passes.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.boid_count < 1 || self.boid_count > MAX_BOID_COUNT {
            return Err(SettingsError::BoidCount(self.boid_count));
        }
        for (name, value) in [
            ("separation_strength", self.separation_strength),
            ("alignment_strength", self.alignment_strength),
            ("cohesion_strength", self.cohesion_strength),
            ("stall_threshold", self.stall_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Negative { name, value });
            }
        }
        for (name, value) in [
            ("mass", self.mass),
            ("speed", self.speed),
            ("max_accel", self.max_accel),
            ("perception_range", self.perception_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NotPositive { name, value });
            }
        }
        Ok(())
    }

    // Parameter ranges for host UI sliders
    pub fn count_range() -> std::ops::RangeInclusive<usize> {
        1..=MAX_BOID_COUNT
    }

    pub fn strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=8.0
    }

    pub fn max_accel_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn perception_range_range() -> std::ops::RangeInclusive<f32> {
        0.0..=2.0
    }
}

// Rejected configuration values, reported to the spawning collaborator.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("boid count {0} is outside [1, {max}]", max = MAX_BOID_COUNT)]
    BoidCount(usize),
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}
