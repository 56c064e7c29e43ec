//! Threat kinematic integration.
//!
//! Flying threats move by exactly one tick of velocity. A threat whose new
//! altitude is at or below zero is grounded. Grounded and destroyed threats
//! are frozen in place.

use hecs::World;

use skyguard_core::components::{Threat, ThreatState};
use skyguard_core::enums::ThreatStatus;
use skyguard_core::events::SimEvent;
use skyguard_core::types::{Position, Velocity};

use crate::score::ScoreState;

pub fn run(world: &mut World, tick: u64, events: &mut Vec<SimEvent>, score: &mut ScoreState) {
    for (_entity, (_threat, pos, vel, state)) in
        world.query_mut::<(&Threat, &mut Position, &Velocity, &mut ThreatState)>()
    {
        if state.status.is_terminal() {
            continue;
        }

        pos.x += vel.x;
        pos.y += vel.y;

        if pos.y <= 0.0 {
            state.status = ThreatStatus::Grounded;
            score.threats_grounded += 1;
            log::info!("Threat {} hit the ground at tick {tick}", state.name);
            events.push(SimEvent::ThreatGrounded {
                threat: state.id,
                name: state.name.clone(),
                position: *pos,
            });
        }
    }
}
