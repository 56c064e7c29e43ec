//! Reference tuning values.
//!
//! Distances are meters and speeds are meters per tick. These are
//! tick-normalized, not true physical units. The engine never reads them
//! directly; they seed `SimConfig::default()` and the reference raid.

// --- Sensor ---

/// Sensor origin (x, y).
pub const SENSOR_ORIGIN: (f64, f64) = (0.0, 0.0);

/// Detection radius around the sensor origin.
pub const DETECTION_RADIUS: f64 = 80_000.0;

// --- Interceptor ---

/// Interceptor speed (meters per tick).
pub const INTERCEPTOR_SPEED: f64 = 7_000.0;

/// Distance at or below which an interceptor hit resolves.
pub const HIT_RADIUS: f64 = 500.0;

// --- Display ---

/// Trail samples older than this many ticks are dropped from the history log.
pub const TRAIL_WINDOW_TICKS: u64 = 10;

/// Default tick budget for headless runs (the reference animation ran 400 frames).
pub const DEFAULT_TICK_BUDGET: u64 = 400;

// --- Reference raid ---

/// Fattah-1: initial (x, y, vx, vy).
pub const FATTAH_1: (f64, f64, f64, f64) = (200_000.0, 250_000.0, -5_100.0, -5_100.0);

/// Rezvan: initial (x, y, vx, vy).
pub const REZVAN: (f64, f64, f64, f64) = (210_000.0, 240_000.0, -4_400.0, -4_300.0);
