//! Interceptor trail history — a time-windowed log of recent positions.
//!
//! Kept outside the ECS world. Not part of the authoritative simulation
//! state; only the renderer reads it.

use std::collections::VecDeque;

use skyguard_core::state::TrailSample;

/// Samples younger than `window` ticks, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TrailLog {
    samples: VecDeque<TrailSample>,
    window: u64,
}

impl TrailLog {
    pub fn new(window: u64) -> Self {
        Self {
            samples: VecDeque::new(),
            window,
        }
    }

    pub fn push(&mut self, sample: TrailSample) {
        self.samples.push_back(sample);
    }

    /// Drop samples with `current_tick - sample.tick >= window`.
    pub fn prune(&mut self, current_tick: u64) {
        while let Some(front) = self.samples.front() {
            if current_tick.saturating_sub(front.tick) >= self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn to_vec(&self) -> Vec<TrailSample> {
        self.samples.iter().copied().collect()
    }
}
