//! Simulation engine — the core of the simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, runs all systems once per tick
//! in a fixed order, and produces `SimSnapshot`s. Completely headless, with
//! no hidden randomness: the same config and tick count give the same state.

use hecs::World;

use skyguard_core::components::{InterceptorState, ThreatState};
use skyguard_core::config::{ConfigError, SimConfig};
use skyguard_core::events::SimEvent;
use skyguard_core::state::SimSnapshot;
use skyguard_core::types::{InterceptorId, SimTime, ThreatId};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::sensor::Sensor;
use crate::trail::TrailLog;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    sensor: Sensor,
    /// Threat entities indexed by `ThreatId`.
    threat_entities: Vec<hecs::Entity>,
    next_interceptor_id: u32,
    trail: TrailLog,
    /// Events from the most recent tick only.
    events: Vec<SimEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Validate the config and spawn the initial threats.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let threat_entities = world_setup::spawn_threats(&mut world, &config);
        let sensor = Sensor {
            origin: config.sensor_origin,
            detection_radius: config.detection_radius,
        };
        let score = ScoreState {
            threats_total: threat_entities.len() as u32,
            ..Default::default()
        };

        log::debug!(
            "Simulation created: {} threats, detection radius {:.0}m, hit radius {:.0}m",
            threat_entities.len(),
            config.detection_radius,
            config.hit_radius
        );

        Ok(Self {
            world,
            time: SimTime::default(),
            trail: TrailLog::new(config.trail_window),
            sensor,
            threat_entities,
            next_interceptor_id: 0,
            events: Vec::new(),
            score,
            config,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// Once quiescent the clock still advances and the trail still ages,
    /// but no entity changes.
    pub fn tick(&mut self) {
        self.time.advance();
        let tick = self.time.tick;
        let mut events = Vec::new();

        if !self.is_quiescent() {
            self.run_systems(tick, &mut events);
        }

        self.trail.prune(tick);
        self.events = events;
    }

    /// Read-only view of the current state. Calling this repeatedly without
    /// an intervening `tick()` returns equal snapshots.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.sensor,
            &self.trail,
            &self.events,
            &self.score,
        )
    }

    /// True when no threat is flying and no interceptor is active.
    pub fn is_quiescent(&self) -> bool {
        let any_flying = self
            .world
            .query::<&ThreatState>()
            .iter()
            .any(|(_, state)| !state.status.is_terminal());
        let any_active = self
            .world
            .query::<&InterceptorState>()
            .iter()
            .any(|(_, state)| state.status.is_active());
        !any_flying && !any_active
    }

    /// Tick until quiescent or until `max_ticks` ticks have run.
    /// Returns the number of ticks executed.
    pub fn run_until_quiescent(&mut self, max_ticks: u64) -> u64 {
        let mut ran = 0;
        while ran < max_ticks && !self.is_quiescent() {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the validated configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Launch one interceptor at `target`. Only the sensor trigger calls this.
    pub(crate) fn spawn_interceptor(&mut self, target: ThreatId, events: &mut Vec<SimEvent>) {
        let id = InterceptorId(self.next_interceptor_id);
        self.next_interceptor_id += 1;

        world_setup::spawn_interceptor(
            &mut self.world,
            id,
            target,
            self.sensor.origin,
            self.config.interceptor_speed,
            self.time.tick,
        );
        self.score.interceptors_launched += 1;

        log::info!(
            "Interceptor {} launched at threat {} on tick {}",
            id.0,
            target.0,
            self.time.tick
        );
        events.push(SimEvent::InterceptorLaunched {
            interceptor: id,
            target,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, tick: u64, events: &mut Vec<SimEvent>) {
        // 1. Threat kinematics + ground check
        systems::threat_kinematics::run(&mut self.world, tick, events, &mut self.score);
        // 2. Sensor trigger on post-move positions
        let detected = systems::sensor::run(&mut self.world, &self.sensor, tick, events);
        // 3. Deferred spawns, after the sensor query borrow is released
        for target in detected {
            self.spawn_interceptor(target, events);
        }
        // 4. Guidance + hit resolution, including interceptors launched this tick
        systems::intercept::run(
            &mut self.world,
            &self.threat_entities,
            self.config.hit_radius,
            tick,
            &mut self.trail,
            events,
            &mut self.score,
        );
    }
}
