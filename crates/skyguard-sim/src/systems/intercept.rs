//! Intercept system — lead-pursuit guidance and hit/miss resolution.
//!
//! Runs after threat kinematics and the sensor pass, so every interceptor
//! steers toward its target's post-move position for this tick.

use hecs::{Entity, World};

use skyguard_core::components::{Interceptor, InterceptorState, ThreatState};
use skyguard_core::enums::*;
use skyguard_core::events::SimEvent;
use skyguard_core::state::TrailSample;
use skyguard_core::types::{Position, Velocity};

use crate::guidance::{self, GuidanceStep};
use crate::score::ScoreState;
use crate::trail::TrailLog;

/// Run one guidance pass over all active interceptors, in id order.
///
/// `threat_entities` is indexed by `ThreatId`.
pub fn run(
    world: &mut World,
    threat_entities: &[Entity],
    hit_radius: f64,
    tick: u64,
    trail: &mut TrailLog,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    let mut active: Vec<(Entity, InterceptorState)> = world
        .query::<(&Interceptor, &InterceptorState)>()
        .iter()
        .filter(|(_, (_, state))| state.status.is_active())
        .map(|(entity, (_, state))| (entity, *state))
        .collect();
    active.sort_by_key(|(_, state)| state.id);

    for (entity, state) in active {
        let Some(&target_entity) = threat_entities.get(state.target.index()) else {
            continue;
        };

        let (target_pos, target_vel, target_status, target_name) =
            match read_target(world, target_entity) {
                Some(t) => t,
                None => continue,
            };

        // Target left flight for some other reason: stand down.
        if target_status.is_terminal() {
            resolve(world, entity, InterceptResult::Miss);
            score.misses += 1;
            log::debug!(
                "Interceptor {} stands down: {target_name} is {target_status:?}",
                state.id.0
            );
            events.push(SimEvent::Splash {
                interceptor: state.id,
                target: state.target,
                result: InterceptResult::Miss,
            });
            continue;
        }

        let interceptor_pos = match world.get::<&Position>(entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        match guidance::lead_pursuit_step(
            &interceptor_pos,
            &target_pos,
            &target_vel,
            state.speed,
            hit_radius,
        ) {
            GuidanceStep::Hit { range } => {
                if let Ok(mut target) = world.get::<&mut ThreatState>(target_entity) {
                    target.status = ThreatStatus::Destroyed;
                }
                resolve(world, entity, InterceptResult::Hit);
                score.threats_destroyed += 1;
                log::info!("Intercepted {target_name} at tick {tick}, miss distance {range:.0}m");
                events.push(SimEvent::Splash {
                    interceptor: state.id,
                    target: state.target,
                    result: InterceptResult::Hit,
                });
            }
            GuidanceStep::Advance { position } => {
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    *pos = position;
                }
                trail.push(TrailSample {
                    interceptor: state.id,
                    position,
                    tick,
                });
            }
            GuidanceStep::Hold => {
                trail.push(TrailSample {
                    interceptor: state.id,
                    position: interceptor_pos,
                    tick,
                });
            }
        }
    }
}

/// Copy out the target's kinematic state so no borrow outlives the read.
fn read_target(
    world: &World,
    target: Entity,
) -> Option<(Position, Velocity, ThreatStatus, String)> {
    let pos = *world.get::<&Position>(target).ok()?;
    let vel = *world.get::<&Velocity>(target).ok()?;
    let state = world.get::<&ThreatState>(target).ok()?;
    Some((pos, vel, state.status, state.name.clone()))
}

fn resolve(world: &mut World, interceptor: Entity, result: InterceptResult) {
    if let Ok(mut state) = world.get::<&mut InterceptorState>(interceptor) {
        state.status = InterceptorStatus::Resolved(result);
    }
}
