//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Threat flight status. `Grounded` and `Destroyed` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatStatus {
    /// Moving along its constant-velocity track.
    #[default]
    Flying,
    /// Reached y <= 0 before any interceptor closed.
    Grounded,
    /// Killed by an interceptor hit.
    Destroyed,
}

/// Intercept result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterceptResult {
    Hit,
    /// Target left flight for another reason (grounded, or destroyed elsewhere).
    Miss,
}

/// Interceptor pursuit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterceptorStatus {
    /// Steering toward the predicted target position each tick.
    #[default]
    Active,
    /// Pursuit finished. Never transitions back to `Active`.
    Resolved(InterceptResult),
}

impl ThreatStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ThreatStatus::Flying)
    }
}

impl InterceptorStatus {
    pub fn is_active(self) -> bool {
        matches!(self, InterceptorStatus::Active)
    }

    /// The result, once the pursuit is over.
    pub fn result(self) -> Option<InterceptResult> {
        match self {
            InterceptorStatus::Active => None,
            InterceptorStatus::Resolved(result) => Some(result),
        }
    }
}
