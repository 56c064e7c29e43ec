//! Scenario builders.
//!
//! `SimConfig::reference()` covers the fixed two-missile raid. This module
//! adds seeded random raids: same seed, same configuration.

use std::f64::consts::FRAC_PI_3;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyguard_core::config::{SimConfig, ThreatSpec};

/// Launch range from the sensor origin (meters).
const RAID_RANGE: std::ops::Range<f64> = 200_000.0..260_000.0;

/// Threat speed (meters per tick).
const RAID_SPEED: std::ops::Range<f64> = 4_000.0..6_000.0;

/// Aim points are scattered along the ground within this distance of the sensor.
const RAID_AIM_SPREAD: f64 = 30_000.0;

/// Build a raid of `count` threats inbound toward the sensor origin, with the
/// reference sensor and interceptor values.
pub fn random_raid(seed: u64, count: usize) -> SimConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let config = SimConfig::default();
    let origin = DVec2::from(config.sensor_origin);

    let threats = (0..count)
        .map(|i| {
            // Bearing measured from straight up, so every launch point is above ground.
            let bearing: f64 = rng.gen_range(-FRAC_PI_3..FRAC_PI_3);
            let range: f64 = rng.gen_range(RAID_RANGE);
            let speed: f64 = rng.gen_range(RAID_SPEED);
            let aim_x: f64 = rng.gen_range(-RAID_AIM_SPREAD..RAID_AIM_SPREAD);

            let start = origin + DVec2::new(bearing.sin(), bearing.cos()) * range;
            let aim = DVec2::new(origin.x + aim_x, 0.0);
            let vel = (aim - start).normalize_or_zero() * speed;

            ThreatSpec::new(format!("Raid-{:02}", i + 1), start.x, start.y, vel.x, vel.y)
        })
        .collect();

    SimConfig { threats, ..config }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_raid() {
        assert_eq!(random_raid(7, 5), random_raid(7, 5));
    }

    #[test]
    fn test_different_seed_different_raid() {
        assert_ne!(random_raid(7, 5), random_raid(8, 5));
    }

    #[test]
    fn test_raid_is_valid_and_inbound() {
        let config = random_raid(42, 12);
        assert_eq!(config.threats.len(), 12);
        assert_eq!(config.validate(), Ok(()));
        for spec in &config.threats {
            assert!(spec.y > 0.0, "{} starts below ground", spec.name);
            assert!(spec.vy < 0.0, "{} is not descending", spec.name);
            let speed = spec.velocity().speed();
            assert!(
                (4_000.0..6_000.0 + 1e-6).contains(&speed),
                "{} speed {speed}",
                spec.name
            );
        }
    }
}
