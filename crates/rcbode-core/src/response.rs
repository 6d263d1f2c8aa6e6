//! Response module - filter evaluation and frequency sweep
//!
//! The two library operations: single-frequency evaluation of the
//! transfer function and a fixed-geometry logarithmic gain sweep.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::circuit::{FilterType, RcCircuit};
use crate::constants::{SWEEP_POINTS, SWEEP_START_HZ, SWEEP_STOP_HZ};
use crate::conversions::{complex_2_magnitude, magnitude_2_db};
use crate::frequency::{Frequency, SweepType};

/// Filter response at a single frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterResponse {
    /// Evaluation frequency in Hz
    pub frequency: f64,
    /// Transfer function magnitude |H|, in [0, 1]
    pub magnitude: f64,
    /// Gain in dB, 20*log10(|H|); negative infinity at |H| = 0
    pub gain_db: f64,
    /// Output voltage Vin * |H| in volts
    pub vout: f64,
    /// Filter topology used for the evaluation
    pub filter_type: FilterType,
}

/// Gain-vs-frequency sweep data for a Bode plot
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Frequency points in Hz, log-spaced, ascending
    pub frequencies: Vec<f64>,
    /// Gain in dB at each frequency, positionally aligned
    pub gains_db: Vec<f64>,
    /// Filter topology used for the sweep
    pub filter_type: FilterType,
}

impl RcCircuit {
    /// Complex transfer function H(jω) at the given frequency
    ///
    /// Low-pass: H = 1 / (1 + jωRC). High-pass: H = jωRC / (1 + jωRC).
    pub fn transfer(&self, frequency: f64, filter_type: FilterType) -> Complex64 {
        let omega_rc = 2.0 * PI * frequency * self.time_constant();
        let pole = Complex64::new(1.0, omega_rc);
        match filter_type {
            FilterType::LowPass => Complex64::new(1.0, 0.0) / pole,
            FilterType::HighPass => Complex64::new(0.0, omega_rc) / pole,
        }
    }

    /// Evaluate magnitude, gain and output voltage at a single frequency
    ///
    /// Defined for every finite frequency, including 0 Hz: a high-pass
    /// filter at DC has zero magnitude and a gain of negative infinity.
    /// Pure and deterministic; never panics for finite input.
    pub fn response(&self, frequency: f64, filter_type: FilterType) -> FilterResponse {
        let magnitude = complex_2_magnitude(self.transfer(frequency, filter_type));
        FilterResponse {
            frequency,
            magnitude,
            gain_db: magnitude_2_db(magnitude),
            vout: self.vin() * magnitude,
            filter_type,
        }
    }

    /// Generate the standard Bode gain sweep: 100 log-spaced points
    /// from 1 Hz to 100 kHz inclusive
    ///
    /// Repeated calls with the same filter type produce bit-identical
    /// results.
    pub fn sweep(&self, filter_type: FilterType) -> Sweep {
        self.sweep_over(
            &Frequency::new(SWEEP_START_HZ, SWEEP_STOP_HZ, SWEEP_POINTS, SweepType::Log),
            filter_type,
        )
    }

    /// Generate a gain sweep over an explicit frequency band
    pub fn sweep_over(&self, band: &Frequency, filter_type: FilterType) -> Sweep {
        let gains_db = band
            .f()
            .iter()
            .map(|&f| self.response(f, filter_type).gain_db)
            .collect();
        Sweep {
            frequencies: band.f().to_vec(),
            gains_db,
            filter_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_low_pass_at_1khz() {
        // ωRC = 2π·1000·1e-4 ≈ 0.628319, |H| = 1/sqrt(1 + 0.3948) ≈ 0.846
        let r = RcCircuit::default().response(1000.0, FilterType::LowPass);
        assert_relative_eq!(r.magnitude, 0.846733, epsilon = 1e-5);
        assert_relative_eq!(r.gain_db, -1.44507, epsilon = 1e-4);
        assert_relative_eq!(r.vout, 8.46733, epsilon = 1e-4);
    }

    #[test]
    fn test_high_pass_at_1khz() {
        // |H| = ωRC/sqrt(1 + (ωRC)²) ≈ 0.532
        let r = RcCircuit::default().response(1000.0, FilterType::HighPass);
        assert_relative_eq!(r.magnitude, 0.532018, epsilon = 1e-5);
        assert_relative_eq!(r.gain_db, -5.48148, epsilon = 1e-4);
        assert_relative_eq!(r.vout, 5.32018, epsilon = 1e-4);
    }

    #[test]
    fn test_high_pass_at_dc() {
        let r = RcCircuit::default().response(0.0, FilterType::HighPass);
        assert_eq!(r.magnitude, 0.0);
        assert_eq!(r.gain_db, f64::NEG_INFINITY);
        assert_eq!(r.vout, 0.0);
    }

    #[test]
    fn test_low_pass_at_dc() {
        let r = RcCircuit::default().response(0.0, FilterType::LowPass);
        assert_relative_eq!(r.magnitude, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.gain_db, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.vout, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_both_types_3db_at_cutoff() {
        let circuit = RcCircuit::default();
        let fc = circuit.cutoff_frequency();
        for ft in [FilterType::LowPass, FilterType::HighPass] {
            let r = circuit.response(fc, ft);
            assert_relative_eq!(r.magnitude, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
            assert_relative_eq!(r.gain_db, -10.0 * 2.0_f64.log10(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_transfer_functions_are_complementary() {
        // |H_lp|² + |H_hp|² = 1 for a shared pole
        let circuit = RcCircuit::default();
        for &f in &[0.0, 1.0, 100.0, 1591.5, 1e4, 1e6] {
            let lp = circuit.transfer(f, FilterType::LowPass).norm();
            let hp = circuit.transfer(f, FilterType::HighPass).norm();
            assert_relative_eq!(lp * lp + hp * hp, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sweep_geometry() {
        let sweep = RcCircuit::default().sweep(FilterType::LowPass);
        assert_eq!(sweep.frequencies.len(), 100);
        assert_eq!(sweep.gains_db.len(), 100);
        assert_relative_eq!(sweep.frequencies[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(sweep.frequencies[99], 1e5, epsilon = 1e-9);
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let circuit = RcCircuit::default();
        let a = circuit.sweep(FilterType::HighPass);
        let b = circuit.sweep(FilterType::HighPass);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sweep_gains_align_with_responses() {
        let circuit = RcCircuit::default();
        let sweep = circuit.sweep(FilterType::LowPass);
        for (&f, &g) in sweep.frequencies.iter().zip(&sweep.gains_db) {
            assert_eq!(g, circuit.response(f, FilterType::LowPass).gain_db);
        }
    }
}
