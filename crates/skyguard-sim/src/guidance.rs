//! Guidance algorithms for interceptors.
//!
//! Lead pursuit: each tick the interceptor estimates time-to-impact from the
//! *current* range, predicts where the target will be after that time, and
//! flies a straight step of fixed length toward that point. This is a one-step
//! lag approximation, not a closed-form intercept solution and not
//! proportional navigation.

use glam::DVec2;

use skyguard_core::types::{Position, Velocity};

/// Outcome of one guidance step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidanceStep {
    /// Target within hit radius before moving. No motion this tick.
    Hit { range: f64 },
    /// Interceptor moved to a new position.
    Advance { position: Position },
    /// Predicted point coincides with the interceptor. No motion, still active.
    Hold,
}

/// Time-to-impact estimate using current range and interceptor speed.
pub fn time_to_impact(range: f64, interceptor_speed: f64) -> f64 {
    range / interceptor_speed
}

/// Where the target will be after `tti` ticks of constant-velocity flight.
pub fn predict_position(target_pos: &Position, target_vel: &Velocity, tti: f64) -> Position {
    let predicted = DVec2::from(*target_pos) + DVec2::from(*target_vel) * tti;
    predicted.into()
}

/// Move `speed` meters from `from` toward `to`.
///
/// Returns `None` when the two points coincide (no defined heading).
pub fn steer_toward(from: &Position, to: &Position, speed: f64) -> Option<Position> {
    let from = DVec2::from(*from);
    let offset = DVec2::from(*to) - from;
    let dist = offset.length();
    if dist > 0.0 {
        Some((from + offset / dist * speed).into())
    } else {
        None
    }
}

/// One tick of lead-pursuit guidance.
///
/// The hit check uses the target's current position and takes precedence over
/// everything else, including the degenerate zero-heading case.
pub fn lead_pursuit_step(
    interceptor_pos: &Position,
    target_pos: &Position,
    target_vel: &Velocity,
    interceptor_speed: f64,
    hit_radius: f64,
) -> GuidanceStep {
    let range = interceptor_pos.range_to(target_pos);
    if range <= hit_radius {
        return GuidanceStep::Hit { range };
    }

    let tti = time_to_impact(range, interceptor_speed);
    let predicted = predict_position(target_pos, target_vel, tti);

    match steer_toward(interceptor_pos, &predicted, interceptor_speed) {
        Some(position) => GuidanceStep::Advance { position },
        None => GuidanceStep::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tti_uses_current_range() {
        assert_eq!(time_to_impact(14_000.0, 7_000.0), 2.0);
        assert_eq!(time_to_impact(0.0, 7_000.0), 0.0);
    }

    #[test]
    fn test_prediction_leads_target() {
        let t_pos = Position::new(10_000.0, 50_000.0);
        let t_vel = Velocity::new(-100.0, -200.0);
        let predicted = predict_position(&t_pos, &t_vel, 3.0);
        assert_eq!(predicted, Position::new(9_700.0, 49_400.0));
    }

    #[test]
    fn test_steer_moves_exactly_speed() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(30_000.0, 40_000.0);
        let next = steer_toward(&from, &to, 7_000.0).unwrap();
        assert!((from.range_to(&next) - 7_000.0).abs() < 1e-6);
        assert!((next.x - 4_200.0).abs() < 1e-6);
        assert!((next.y - 5_600.0).abs() < 1e-6);
    }

    /// Overshoot is allowed: the step length is fixed, not clamped to the gap.
    #[test]
    fn test_steer_overshoots_close_point() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(0.0, 100.0);
        let next = steer_toward(&from, &to, 7_000.0).unwrap();
        assert_eq!(next, Position::new(0.0, 7_000.0));
    }

    #[test]
    fn test_steer_degenerate_is_none() {
        let p = Position::new(123.0, 456.0);
        assert_eq!(steer_toward(&p, &p, 7_000.0), None);
    }

    #[test]
    fn test_step_hit_inside_radius() {
        let step = lead_pursuit_step(
            &Position::new(0.0, 0.0),
            &Position::new(300.0, 400.0),
            &Velocity::new(-5_000.0, -5_000.0),
            7_000.0,
            500.0,
        );
        assert_eq!(step, GuidanceStep::Hit { range: 500.0 });
    }

    #[test]
    fn test_step_hold_when_prediction_coincides() {
        // Target closing head-on at exactly interceptor speed: after tti = 2
        // ticks it would sit on the interceptor.
        let step = lead_pursuit_step(
            &Position::new(0.0, 0.0),
            &Position::new(0.0, 14_000.0),
            &Velocity::new(0.0, -7_000.0),
            7_000.0,
            500.0,
        );
        assert_eq!(step, GuidanceStep::Hold);
    }

    #[test]
    fn test_step_hit_wins_over_hold() {
        // Same degenerate geometry, but inside the hit radius.
        let step = lead_pursuit_step(
            &Position::new(0.0, 0.0),
            &Position::new(0.0, 400.0),
            &Velocity::new(0.0, -7_000.0),
            7_000.0,
            500.0,
        );
        assert!(matches!(step, GuidanceStep::Hit { .. }));
    }

    #[test]
    fn test_step_leads_crossing_target() {
        // Target 50km up, crossing east. Pure pursuit would head straight up;
        // lead pursuit must head east of north.
        let step = lead_pursuit_step(
            &Position::new(0.0, 0.0),
            &Position::new(0.0, 50_000.0),
            &Velocity::new(2_000.0, 0.0),
            7_000.0,
            500.0,
        );
        match step {
            GuidanceStep::Advance { position } => {
                assert!(position.x > 0.0, "should lead east, got {position:?}");
                assert!((position.range_to(&Position::new(0.0, 0.0)) - 7_000.0).abs() < 1e-6);
            }
            other => panic!("expected Advance, got {other:?}"),
        }
    }

    /// Repeated steps against a slow straight-line target converge inside the hit radius.
    #[test]
    fn test_pursuit_converges_on_slow_target() {
        let mut m_pos = Position::new(0.0, 0.0);
        let mut t_pos = Position::new(60_000.0, 80_000.0);
        let t_vel = Velocity::new(-1_000.0, -500.0);

        let mut hit_tick = None;
        for tick in 0..100 {
            t_pos = Position::new(t_pos.x + t_vel.x, t_pos.y + t_vel.y);
            match lead_pursuit_step(&m_pos, &t_pos, &t_vel, 7_000.0, 500.0) {
                GuidanceStep::Hit { .. } => {
                    hit_tick = Some(tick);
                    break;
                }
                GuidanceStep::Advance { position } => m_pos = position,
                GuidanceStep::Hold => {}
            }
        }
        assert!(hit_tick.is_some(), "pursuit should converge");
    }
}
