#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, SimConfig, ThreatSpec};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;
    use crate::types::{InterceptorId, Position, SimTime, ThreatId, Velocity};

    #[test]
    fn test_interceptor_status_serde() {
        let variants = vec![
            InterceptorStatus::Active,
            InterceptorStatus::Resolved(InterceptResult::Hit),
            InterceptorStatus::Resolved(InterceptResult::Miss),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: InterceptorStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_status_helpers() {
        assert!(!ThreatStatus::Flying.is_terminal());
        assert!(ThreatStatus::Grounded.is_terminal());
        assert!(ThreatStatus::Destroyed.is_terminal());

        assert!(InterceptorStatus::Active.is_active());
        assert_eq!(InterceptorStatus::Active.result(), None);
        assert_eq!(
            InterceptorStatus::Resolved(InterceptResult::Miss).result(),
            Some(InterceptResult::Miss)
        );
    }

    /// Events are a tagged union on the wire.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::ThreatDetected {
                threat: ThreatId(0),
                name: "Fattah-1".to_string(),
                range: 74_662.5,
            },
            SimEvent::InterceptorLaunched {
                interceptor: InterceptorId(0),
                target: ThreatId(0),
            },
            SimEvent::Splash {
                interceptor: InterceptorId(0),
                target: ThreatId(1),
                result: InterceptResult::Hit,
            },
            SimEvent::ThreatGrounded {
                threat: ThreatId(1),
                name: "Rezvan".to_string(),
                position: Position::new(-10.0, -50.0),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            assert!(json.contains("\"type\""), "missing tag in {json}");
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(
            json.len() < 512,
            "Empty snapshot should be small, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(a.range_to(&b), b.range_to(&a));
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(-3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_dvec2_conversion() {
        let p = Position::new(1.5, -2.5);
        let v: glam::DVec2 = p.into();
        assert_eq!(Position::from(v), p);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
    }

    // ---- Configuration ----

    #[test]
    fn test_reference_config_is_valid() {
        let config = SimConfig::reference();
        assert_eq!(config.threats.len(), 2);
        assert_eq!(config.threats[0].name, "Fattah-1");
        assert_eq!(
            config.threats[1].position(),
            Position::new(210_000.0, 240_000.0)
        );
        assert_eq!(config.detection_radius, 80_000.0);
        assert_eq!(config.hit_radius, 500.0);
        assert_eq!(config.interceptor_speed, 7_000.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SimConfig {
                interceptor_speed: speed,
                ..SimConfig::reference()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidInterceptorSpeed(_))
                ),
                "speed {speed} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_rejects_negative_radii() {
        let config = SimConfig {
            detection_radius: -1.0,
            ..SimConfig::reference()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDetectionRadius(-1.0))
        );

        let config = SimConfig {
            hit_radius: -0.5,
            ..SimConfig::reference()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidHitRadius(-0.5)));

        // Zero radii are allowed: the sensor or the fuze simply never triggers
        // except at exact coincidence.
        let config = SimConfig {
            detection_radius: 0.0,
            hit_radius: 0.0,
            ..SimConfig::reference()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_duplicate_names() {
        let duplicate = ThreatSpec::new("Rezvan", 1.0, 2.0, 3.0, 4.0);
        let config = SimConfig::reference().with_threat(duplicate);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateThreatName("Rezvan".to_string()))
        );
    }

    #[test]
    fn test_config_rejects_non_finite_threat() {
        let bad = ThreatSpec::new("bad", f64::NAN, 1.0, 0.0, 0.0);
        let config = SimConfig::default().with_threat(bad);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteThreat("bad".to_string()))
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::DuplicateThreatName("Rezvan".to_string());
        assert_eq!(err.to_string(), "duplicate threat name `Rezvan`");
        let err = ConfigError::NonFiniteSensorOrigin(Position::new(f64::NAN, 0.0));
        assert!(err.to_string().starts_with("sensor origin must be finite"));
    }

    /// Config files may omit everything but the threats.
    #[test]
    fn test_config_json_defaults() {
        let json = r#"{
            "threats": [ { "name": "a", "x": 1.0, "y": 2.0, "vx": -3.0, "vy": -4.0 } ]
        }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.threats[0].velocity(), Velocity::new(-3.0, -4.0));
        assert_eq!(config.hit_radius, 500.0);
        assert_eq!(config.trail_window, 10);
    }
}
