//! Scenario configuration and construction-time validation.
//!
//! A `SimConfig` is checked once, before the engine runs any tick.
//! Every rejected configuration maps to one `ConfigError` variant.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::{Position, Velocity};

/// Initial state of one threat. Serialized flat: `{ name, x, y, vx, vy }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Meters per tick.
    pub vx: f64,
    /// Meters per tick.
    pub vy: f64,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Threats in the order they are assigned ids.
    pub threats: Vec<ThreatSpec>,
    /// Fixed sensor location. Interceptors launch from here.
    pub sensor_origin: Position,
    /// Sensor detection radius (meters, >= 0).
    pub detection_radius: f64,
    /// Interceptor-to-threat hit radius (meters, >= 0).
    pub hit_radius: f64,
    /// Interceptor speed (meters per tick, > 0).
    pub interceptor_speed: f64,
    /// Age in ticks beyond which trail samples are dropped.
    pub trail_window: u64,
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("interceptor speed must be positive and finite, got {0}")]
    InvalidInterceptorSpeed(f64),
    #[error("detection radius must be non-negative and finite, got {0}")]
    InvalidDetectionRadius(f64),
    #[error("hit radius must be non-negative and finite, got {0}")]
    InvalidHitRadius(f64),
    #[error("duplicate threat name `{0}`")]
    DuplicateThreatName(String),
    #[error("threat `{0}` has a non-finite position or velocity")]
    NonFiniteThreat(String),
    #[error("sensor origin must be finite, got ({}, {})", .0.x, .0.y)]
    NonFiniteSensorOrigin(Position),
}

impl ThreatSpec {
    pub fn new(name: impl Into<String>, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            vx,
            vy,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.vx, self.vy)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            threats: Vec::new(),
            sensor_origin: Position::new(SENSOR_ORIGIN.0, SENSOR_ORIGIN.1),
            detection_radius: DETECTION_RADIUS,
            hit_radius: HIT_RADIUS,
            interceptor_speed: INTERCEPTOR_SPEED,
            trail_window: TRAIL_WINDOW_TICKS,
        }
    }
}

impl SimConfig {
    /// The two-missile reference raid with reference sensor and interceptor values.
    pub fn reference() -> Self {
        let (fx, fy, fvx, fvy) = FATTAH_1;
        let (rx, ry, rvx, rvy) = REZVAN;
        Self {
            threats: vec![
                ThreatSpec::new("Fattah-1", fx, fy, fvx, fvy),
                ThreatSpec::new("Rezvan", rx, ry, rvx, rvy),
            ],
            ..Self::default()
        }
    }

    /// Builder-style helper for tests and tools.
    pub fn with_threat(mut self, spec: ThreatSpec) -> Self {
        self.threats.push(spec);
        self
    }

    /// Fail-fast check run before any tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.interceptor_speed.is_finite() && self.interceptor_speed > 0.0) {
            return Err(ConfigError::InvalidInterceptorSpeed(self.interceptor_speed));
        }
        if !(self.detection_radius.is_finite() && self.detection_radius >= 0.0) {
            return Err(ConfigError::InvalidDetectionRadius(self.detection_radius));
        }
        if !(self.hit_radius.is_finite() && self.hit_radius >= 0.0) {
            return Err(ConfigError::InvalidHitRadius(self.hit_radius));
        }
        if !self.sensor_origin.is_finite() {
            return Err(ConfigError::NonFiniteSensorOrigin(self.sensor_origin));
        }

        let mut seen = HashSet::with_capacity(self.threats.len());
        for spec in &self.threats {
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateThreatName(spec.name.clone()));
            }
            if !(spec.position().is_finite() && spec.velocity().is_finite()) {
                return Err(ConfigError::NonFiniteThreat(spec.name.clone()));
            }
        }
        Ok(())
    }
}
