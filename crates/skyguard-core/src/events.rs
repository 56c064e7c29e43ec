//! Events emitted by the simulation for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::InterceptResult;
use crate::types::{InterceptorId, Position, ThreatId};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Threat entered the detection envelope for the first time.
    ThreatDetected {
        threat: ThreatId,
        name: String,
        /// Range from the sensor origin at detection (meters).
        range: f64,
    },
    /// Interceptor launched from the sensor origin.
    InterceptorLaunched {
        interceptor: InterceptorId,
        target: ThreatId,
    },
    /// Pursuit finished.
    Splash {
        interceptor: InterceptorId,
        target: ThreatId,
        result: InterceptResult,
    },
    /// Threat reached the ground.
    ThreatGrounded {
        threat: ThreatId,
        name: String,
        position: Position,
    },
}
