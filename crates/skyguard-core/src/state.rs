//! Simulation state snapshot — the complete visible state handed to a renderer.
//!
//! Snapshots are detached copies. Nothing in here refers back into the engine.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{InterceptorId, Position, SimTime, ThreatId, Velocity};

/// Complete simulation state after the most recent tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    /// Ordered by `ThreatId`.
    pub threats: Vec<ThreatView>,
    /// Ordered by `InterceptorId`.
    pub interceptors: Vec<InterceptorView>,
    /// Recent interceptor positions, oldest first.
    pub trail: Vec<TrailSample>,
    /// Events emitted during the most recent tick.
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// A threat as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatView {
    pub id: ThreatId,
    pub name: String,
    pub position: Position,
    pub velocity: Velocity,
    pub status: ThreatStatus,
    /// Range from the sensor origin (meters).
    pub range_to_sensor: f64,
    pub interceptor_spawned: bool,
}

/// An interceptor as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: InterceptorId,
    pub target: ThreatId,
    pub target_name: String,
    pub position: Position,
    pub status: InterceptorStatus,
    pub launch_tick: u64,
}

/// One timestamped interceptor position in the trail history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub interceptor: InterceptorId,
    pub position: Position,
    pub tick: u64,
}

/// Running tally for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub threats_total: u32,
    pub threats_destroyed: u32,
    pub threats_grounded: u32,
    pub interceptors_launched: u32,
    pub misses: u32,
}
