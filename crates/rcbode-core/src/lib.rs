//! rcbode-core: Single-pole RC filter frequency response library
//!
//! Computes the magnitude, gain (dB) and output voltage of a first-order
//! RC low-pass or high-pass filter, and generates logarithmic frequency
//! sweeps for Bode-style gain plots.
//!
//! ## Modules
//!
//! - `circuit` - RC circuit model and filter type selection
//! - `constants` - Fixed circuit values and sweep geometry
//! - `conversions` - Magnitude/dB conversion functions
//! - `frequency` - Frequency band representation
//! - `response` - Single-point evaluation and frequency sweep

pub mod circuit;
pub mod constants;
pub mod conversions;
pub mod frequency;
pub mod response;

pub use circuit::{FilterType, InvalidFilterType, RcCircuit};
pub use frequency::Frequency;
pub use response::{FilterResponse, Sweep};
