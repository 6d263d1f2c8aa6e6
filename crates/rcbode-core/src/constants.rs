//! Fixed circuit values and sweep geometry
//!
//! Provides the process-wide filter configuration and the standard
//! Bode sweep parameters used throughout the library.

/// Resistance of the RC stage in ohms (10 kΩ).
pub const RESISTANCE: f64 = 10_000.0;

/// Capacitance of the RC stage in farads (0.01 µF).
pub const CAPACITANCE: f64 = 1e-8;

/// Input voltage in volts.
pub const INPUT_VOLTAGE: f64 = 10.0;

/// Start frequency of the standard Bode sweep in Hz (10^0).
pub const SWEEP_START_HZ: f64 = 1.0;

/// Stop frequency of the standard Bode sweep in Hz (10^5).
pub const SWEEP_STOP_HZ: f64 = 100_000.0;

/// Number of points in the standard Bode sweep.
pub const SWEEP_POINTS: usize = 100;
