//! Entity spawn factories for setting up the simulation world.
//!
//! Creates threat and interceptor entities with the appropriate
//! component bundles.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::config::SimConfig;
use skyguard_core::enums::*;
use skyguard_core::types::{InterceptorId, Position, ThreatId};

/// Spawn every configured threat in order. The returned vector is indexed
/// by `ThreatId`.
pub fn spawn_threats(world: &mut World, config: &SimConfig) -> Vec<hecs::Entity> {
    config
        .threats
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let state = ThreatState {
                id: ThreatId(i as u32),
                name: spec.name.clone(),
                status: ThreatStatus::Flying,
                interceptor_spawned: false,
            };
            world.spawn((Threat, spec.position(), spec.velocity(), state))
        })
        .collect()
}

/// Spawn an interceptor at the sensor origin, bound to `target`.
pub fn spawn_interceptor(
    world: &mut World,
    id: InterceptorId,
    target: ThreatId,
    origin: Position,
    speed: f64,
    launch_tick: u64,
) -> hecs::Entity {
    let state = InterceptorState {
        id,
        target,
        speed,
        status: InterceptorStatus::Active,
        launch_tick,
    };
    world.spawn((Interceptor, origin, state))
}
