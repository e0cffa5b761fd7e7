//! Error Types for Signal Generation
//!
//! ## Design Philosophy
//!
//! The generator fails in exactly two places, and the error types mirror that:
//!
//! 1. **Construction**: [`ConfigurationError`] is raised once, by
//!    [`GeneratorConfigBuilder::build`](crate::config::GeneratorConfigBuilder::build)
//!    or by stream construction. A stream that was built never reports a
//!    configuration problem later.
//!
//! 2. **Per call**: [`InputError`] is raised by a generation call when the time
//!    vector it was handed is unusable. The call has no side effects, so the
//!    caller can fix the input and call again.
//!
//! Both enums are `Copy` and carry only `&'static str` or numeric context, so
//! they cost nothing to return from the hot path and work without an allocator.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use metrowave_core::{GeneratorConfig, InputError, MultiWaveGenerator};
//!
//! let config = GeneratorConfig::builder().noisy(false).build()?;
//! let generator = MultiWaveGenerator::new(config);
//!
//! match generator.generate(&[]) {
//!     Ok(values) => { let _ = values; }
//!     Err(InputError::EmptyTimeVector) => {
//!         // Driver asked for an empty batch - nothing to do
//!     }
//!     Err(InputError::NonFiniteTime { index }) => {
//!         // Clock produced garbage at `index`
//!         let _ = index;
//!     }
//! }
//! # Ok::<(), metrowave_core::ConfigurationError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for driver operations that can fail either way
pub type MetroResult<T> = Result<T, MetroError>;

/// Malformed or inconsistent construction parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// Frequency, amplitude and phase sequences differ in length
    #[error("Wave component length mismatch: {frequencies} frequencies, {amplitudes} amplitudes, {phases} phases")]
    ComponentLengthMismatch {
        /// Number of configured frequencies
        frequencies: usize,
        /// Number of configured amplitudes
        amplitudes: usize,
        /// Number of configured initial phases
        phases: usize,
    },

    /// Sampling frequency is zero, negative or not a number
    #[error("Sampling frequency {value} is not positive")]
    NonPositiveSamplingFrequency {
        /// The rejected sampling frequency
        value: f64,
    },

    /// A wave parameter or the intercept is NaN or infinite
    #[error("Parameter '{name}' is not finite")]
    NonFiniteParameter {
        /// Name of the offending parameter
        name: &'static str,
    },

    /// Uncertainty is empty, negative or not finite
    #[error("Uncertainty '{name}' must be finite, non-negative and non-empty")]
    InvalidUncertainty {
        /// Which uncertainty was rejected ("value_unc" or "time_unc")
        name: &'static str,
    },

    /// Noise requested without a seed on a target that has no entropy source
    #[error("Noise is enabled but no seed was given and no entropy source is available")]
    MissingNoiseSeed,

    /// Metadata record is inconsistent
    #[error("Invalid metadata: {reason}")]
    InvalidMetadata {
        /// What is wrong with the metadata
        reason: &'static str,
    },
}

/// Malformed time vector handed to a generation call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Nothing to evaluate
    #[error("Time vector is empty")]
    EmptyTimeVector,

    /// Time value is NaN or infinite
    #[error("Time value at index {index} is not finite")]
    NonFiniteTime {
        /// Position of the first offending time value
        index: usize,
    },
}

/// Either kind of failure, for operations that both construct and generate
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MetroError {
    /// See [`ConfigurationError`]
    #[error("Configuration error: {0}")]
    Configuration(ConfigurationError),

    /// See [`InputError`]
    #[error("Input error: {0}")]
    Input(InputError),

    /// Signal function returned a different number of values than times
    #[error("Signal returned {actual} values for {expected} time steps")]
    SignalLength {
        /// Number of time steps handed to the signal
        expected: usize,
        /// Number of values it returned
        actual: usize,
    },
}

impl From<ConfigurationError> for MetroError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<InputError> for MetroError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigurationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ComponentLengthMismatch { frequencies, amplitudes, phases } =>
                defmt::write!(fmt, "Components: {} freq, {} ampl, {} phase", frequencies, amplitudes, phases),
            Self::NonPositiveSamplingFrequency { value } =>
                defmt::write!(fmt, "Sampling frequency {} not positive", value),
            Self::NonFiniteParameter { name } =>
                defmt::write!(fmt, "Parameter {} not finite", name),
            Self::InvalidUncertainty { name } =>
                defmt::write!(fmt, "Invalid uncertainty {}", name),
            Self::MissingNoiseSeed =>
                defmt::write!(fmt, "Noise seed required"),
            Self::InvalidMetadata { reason } =>
                defmt::write!(fmt, "Invalid metadata: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyTimeVector =>
                defmt::write!(fmt, "Empty time vector"),
            Self::NonFiniteTime { index } =>
                defmt::write!(fmt, "Non-finite time at {}", index),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MetroError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Configuration(e) => defmt::write!(fmt, "Configuration: {}", e),
            Self::Input(e) => defmt::write!(fmt, "Input: {}", e),
            Self::SignalLength { expected, actual } =>
                defmt::write!(fmt, "Signal length {} != {}", actual, expected),
        }
    }
}
