//! Default values for generator construction
//!
//! These are the values a stream gets when the caller does not say otherwise.
//! They describe a single 50 Hz mains-like component sampled at 500 Hz with a
//! modest value uncertainty and perfectly known timestamps.

/// Default sampling frequency in samples per second
pub const DEFAULT_SAMPLING_FREQUENCY_HZ: f64 = 500.0;

/// Default frequency of the single wave component (Hz)
pub const DEFAULT_WAVE_FREQUENCY_HZ: f64 = 50.0;

/// Default amplitude of the single wave component
pub const DEFAULT_WAVE_AMPLITUDE: f64 = 1.0;

/// Default initial phase of the single wave component (radians)
pub const DEFAULT_WAVE_PHASE_RAD: f64 = 0.0;

/// Default constant offset of the signal
pub const DEFAULT_INTERCEPT: f64 = 0.0;

/// Default uncertainty attached to every value
pub const DEFAULT_VALUE_UNCERTAINTY: f64 = 0.1;

/// Default uncertainty attached to every timestamp
pub const DEFAULT_TIME_UNCERTAINTY: f64 = 0.0;

/// Noise is on unless switched off
pub const DEFAULT_NOISY: bool = true;

/// Noise standard deviation as a fraction of the value uncertainty.
///
/// Existing consumers calibrate against exactly one half.
pub const NOISE_STD_PER_VALUE_UNCERTAINTY: f64 = 0.5;

/// Default device identifier
pub const DEFAULT_DEVICE_ID: &str = "DataGenerator";

/// Default name of the time axis
pub const DEFAULT_TIME_NAME: &str = "time";

/// Default unit of the time axis
pub const DEFAULT_TIME_UNIT: &str = "s";

/// Default quantity names
pub const DEFAULT_QUANTITY_NAMES: [&str; 2] = ["Length", "Mass"];

/// Default quantity units, index-aligned with [`DEFAULT_QUANTITY_NAMES`]
pub const DEFAULT_QUANTITY_UNITS: [&str; 2] = ["m", "kg"];

/// Default free-text description
pub const DEFAULT_DESCRIPTION: &str = " Generator for a linear sum of cosines";
