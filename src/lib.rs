/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation core.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use bounds::BoundarySphere;
pub use debug::{ForceSample, TickStats};
pub use flock::Flock;
pub use neighbors::{NeighborRecord, NeighborScratch};
pub use settings::{BoidSettings, SettingsError};
pub use sim::Simulation;
pub use spawn::{respawn_boids, spawn_boids, SpawnError};

// Define modules
pub mod boid;
pub mod bounds;
pub mod debug;
pub mod flock;
pub mod forces;
pub mod math;
pub mod neighbors;
pub mod physics;
pub mod settings;
pub mod sim;
pub mod spawn;

// Constants
pub const DEFAULT_BOUNDARY_RADIUS: f32 = 10.0;
pub const SPAWN_AREA_MARGIN: f32 = 0.9;
