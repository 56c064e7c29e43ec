//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state. Per-tick order is fixed by `SimulationEngine::tick`.

pub mod intercept;
pub mod sensor;
pub mod snapshot;
pub mod threat_kinematics;
