//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs ECS world, runs systems once per discrete tick,
//! and produces SimSnapshots for an external renderer.

pub mod engine;
pub mod guidance;
pub mod scenario;
pub mod score;
pub mod systems;
pub mod trail;
pub mod world_setup;

pub use engine::SimulationEngine;
