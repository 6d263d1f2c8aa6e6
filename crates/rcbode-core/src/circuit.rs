//! Circuit module - RC stage model and filter type selection
//!
//! A single resistor/capacitor pair driven by a fixed input voltage,
//! evaluated as either a low-pass or high-pass single-pole filter.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{CAPACITANCE, INPUT_VOLTAGE, RESISTANCE};

/// Error returned when a filter type string is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid filter type {0:?}: expected \"low-pass\" or \"high-pass\"")]
pub struct InvalidFilterType(pub String);

/// Filter topology enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    LowPass,
    HighPass,
}

impl FilterType {
    /// Get the wire representation of this filter type
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::LowPass => "low-pass",
            FilterType::HighPass => "high-pass",
        }
    }
}

impl FromStr for FilterType {
    type Err = InvalidFilterType;

    /// Parse from the wire strings `"low-pass"` / `"high-pass"` (case-sensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low-pass" => Ok(FilterType::LowPass),
            "high-pass" => Ok(FilterType::HighPass),
            other => Err(InvalidFilterType(other.to_string())),
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A first-order RC filter stage
///
/// Immutable value type; all response calculations are pure functions of
/// the circuit values and the requested frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCircuit {
    /// Resistance in ohms, must be > 0
    resistance: f64,
    /// Capacitance in farads, must be > 0
    capacitance: f64,
    /// Input voltage in volts
    vin: f64,
}

impl RcCircuit {
    /// Create a new circuit from component values
    ///
    /// # Arguments
    /// * `resistance` - Resistance in ohms (> 0)
    /// * `capacitance` - Capacitance in farads (> 0)
    /// * `vin` - Input voltage in volts
    pub const fn new(resistance: f64, capacitance: f64, vin: f64) -> Self {
        Self {
            resistance,
            capacitance,
            vin,
        }
    }

    /// Resistance in ohms
    #[inline]
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Capacitance in farads
    #[inline]
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Input voltage in volts
    #[inline]
    pub fn vin(&self) -> f64 {
        self.vin
    }

    /// Time constant τ = RC in seconds
    #[inline]
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// Cutoff (-3 dB) frequency in Hz: f_c = 1 / (2πRC)
    pub fn cutoff_frequency(&self) -> f64 {
        1.0 / (2.0 * PI * self.time_constant())
    }
}

impl Default for RcCircuit {
    /// The fixed process-wide configuration: 10 kΩ, 0.01 µF, 10 V
    fn default() -> Self {
        Self::new(RESISTANCE, CAPACITANCE, INPUT_VOLTAGE)
    }
}
