//! Unit conversion functions
//!
//! Provides conversions between complex transfer-function values,
//! linear magnitude and decibels.

use num_complex::Complex64;

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert magnitude to dB (20*log10(mag))
///
/// A magnitude of exactly zero maps to negative infinity rather than
/// raising a domain error.
pub fn magnitude_2_db(mag: f64) -> f64 {
    if mag > 0.0 {
        20.0 * mag.log10()
    } else {
        f64::NEG_INFINITY
    }
}

/// Convert dB to magnitude (10^(dB/20))
pub fn db_2_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}
