//! Frequency module - represents a frequency band
//!
//! Provides a convenient way to work with ordered frequency vectors in Hz.

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    Linear,
    #[default]
    Log,
}

/// A frequency band representation
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    /// Frequency vector in Hz, ascending
    f: Vec<f64>,
    /// Sweep type (linear or log)
    sweep_type: SweepType,
}

impl Frequency {
    /// Create a new Frequency with start/stop/npoints
    ///
    /// # Arguments
    /// * `start` - Start frequency in Hz
    /// * `stop` - Stop frequency in Hz
    /// * `npoints` - Number of frequency points
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// Log sweeps are spaced in base-10 exponent: point i of n lies at
    /// 10^(lo + (hi - lo) * i / (n - 1)) where lo/hi are the decade
    /// exponents of start/stop. Both endpoints are included exactly.
    pub fn new(start: f64, stop: f64, npoints: usize, sweep_type: SweepType) -> Self {
        let f = match sweep_type {
            SweepType::Linear => {
                if npoints == 1 {
                    vec![start]
                } else {
                    let step = (stop - start) / (npoints - 1) as f64;
                    (0..npoints).map(|i| start + i as f64 * step).collect()
                }
            }
            SweepType::Log => {
                if npoints == 1 {
                    vec![start]
                } else {
                    let log_start = start.log10();
                    let log_stop = stop.log10();
                    let span = log_stop - log_start;
                    (0..npoints)
                        .map(|i| {
                            let exp = log_start + span * i as f64 / (npoints - 1) as f64;
                            10.0_f64.powf(exp)
                        })
                        .collect()
                }
            }
        };

        Self { f, sweep_type }
    }

    /// Get the frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        *self.f.first().unwrap_or(&0.0)
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.f.last().unwrap_or(&0.0)
    }

    /// Get the sweep type
    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }
}
