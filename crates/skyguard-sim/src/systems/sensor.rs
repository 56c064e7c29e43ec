//! Sensor detection trigger.
//!
//! Must run AFTER threat kinematics (so ranges use post-move positions) and
//! BEFORE intercept guidance. Fires at most once per threat; the caller
//! spawns the interceptors once the query borrow is released.

use hecs::World;

use skyguard_core::components::{Threat, ThreatState};
use skyguard_core::enums::ThreatStatus;
use skyguard_core::events::SimEvent;
use skyguard_core::types::{Position, ThreatId};

/// Fixed sensor parameters.
#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pub origin: Position,
    pub detection_radius: f64,
}

impl Sensor {
    /// Range from the sensor origin (meters).
    pub fn range_to(&self, pos: &Position) -> f64 {
        self.origin.range_to(pos)
    }
}

/// Flag newly detected threats and return their ids, in id order.
pub fn run(
    world: &mut World,
    sensor: &Sensor,
    tick: u64,
    events: &mut Vec<SimEvent>,
) -> Vec<ThreatId> {
    let mut detected = Vec::new();

    for (_entity, (_threat, pos, state)) in
        world.query_mut::<(&Threat, &Position, &mut ThreatState)>()
    {
        if state.status != ThreatStatus::Flying || state.interceptor_spawned {
            continue;
        }

        let range = sensor.range_to(pos);
        if range > sensor.detection_radius {
            continue;
        }

        state.interceptor_spawned = true;
        log::info!(
            "Threat {} detected at tick {tick}, range {range:.0}m",
            state.name
        );
        events.push(SimEvent::ThreatDetected {
            threat: state.id,
            name: state.name.clone(),
            range,
        });
        detected.push(state.id);
    }

    detected.sort();
    detected
}
