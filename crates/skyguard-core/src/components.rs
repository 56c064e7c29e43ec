//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components. `Position` and `Velocity`
//! from `types.rs` are also used as components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{InterceptorId, ThreatId};

/// Marks an entity as a threat (inbound ballistic missile).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threat;

/// Marks an entity as a friendly interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Per-threat bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatState {
    pub id: ThreatId,
    /// Unique name from the scenario configuration.
    pub name: String,
    pub status: ThreatStatus,
    /// Set once the sensor has launched an interceptor at this threat.
    pub interceptor_spawned: bool,
}

/// Interceptor pursuit state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterceptorState {
    pub id: InterceptorId,
    /// Threat being pursued. A lookup key, not an owning reference.
    pub target: ThreatId,
    /// Constant speed (meters per tick).
    pub speed: f64,
    pub status: InterceptorStatus,
    /// Tick on which the sensor launched this interceptor.
    pub launch_tick: u64,
}
