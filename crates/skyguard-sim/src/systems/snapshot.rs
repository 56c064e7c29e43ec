//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only — it never modifies the world.

use std::collections::HashMap;

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::events::SimEvent;
use skyguard_core::state::*;
use skyguard_core::types::{Position, SimTime, ThreatId, Velocity};

use crate::score::ScoreState;
use crate::systems::sensor::Sensor;
use crate::trail::TrailLog;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    sensor: &Sensor,
    trail: &TrailLog,
    events: &[SimEvent],
    score: &ScoreState,
) -> SimSnapshot {
    let threats = build_threats(world, sensor);
    let names: HashMap<ThreatId, &str> = threats.iter().map(|t| (t.id, t.name.as_str())).collect();
    let interceptors = build_interceptors(world, &names);

    SimSnapshot {
        time: *time,
        threats,
        interceptors,
        trail: trail.to_vec(),
        events: events.to_vec(),
        score: score.view(),
    }
}

fn build_threats(world: &World, sensor: &Sensor) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<(&Threat, &Position, &Velocity, &ThreatState)>()
        .iter()
        .map(|(_, (_, pos, vel, state))| ThreatView {
            id: state.id,
            name: state.name.clone(),
            position: *pos,
            velocity: *vel,
            status: state.status,
            range_to_sensor: sensor.range_to(pos),
            interceptor_spawned: state.interceptor_spawned,
        })
        .collect();

    threats.sort_by_key(|t| t.id);
    threats
}

fn build_interceptors(world: &World, names: &HashMap<ThreatId, &str>) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Interceptor, &Position, &InterceptorState)>()
        .iter()
        .map(|(_, (_, pos, state))| InterceptorView {
            id: state.id,
            target: state.target,
            target_name: names
                .get(&state.target)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            position: *pos,
            status: state.status,
            launch_tick: state.launch_tick,
        })
        .collect();

    interceptors.sort_by_key(|i| i.id);
    interceptors
}
