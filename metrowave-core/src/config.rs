//! Generator configuration
//!
//! A [`GeneratorConfig`] is built once, validated once, and never mutated. All
//! the checks that can fail happen in [`GeneratorConfigBuilder::build`], so a
//! generator holding a config can only ever fail on bad *input*.
//!
//! ```rust
//! use metrowave_core::GeneratorConfig;
//!
//! // 50 Hz fundamental plus a third harmonic, offset by 2.0
//! let config = GeneratorConfig::builder()
//!     .sampling_frequency(1000.0)
//!     .intercept(2.0)
//!     .waves(&[50.0, 150.0], &[1.0, 0.3], &[0.0, 0.5])
//!     .value_uncertainty(0.05)
//!     .noisy(false)
//!     .build()?;
//!
//! assert_eq!(config.components().count(), 2);
//! # Ok::<(), metrowave_core::ConfigurationError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::{
    constants::*,
    errors::ConfigurationError,
    uncertainty::Uncertainty,
};

/// One cosine term: `amplitude * cos(2π * frequency * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    /// Frequency in Hz
    pub frequency: f64,
    /// Peak amplitude
    pub amplitude: f64,
    /// Initial phase in radians
    pub phase: f64,
}

impl WaveComponent {
    /// Value of this component at time `t` (seconds)
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * libm::cos(2.0 * core::f64::consts::PI * self.frequency * t + self.phase)
    }
}

/// Immutable configuration of a multi-wave generator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratorConfig {
    sampling_frequency: f64,
    intercept: f64,
    frequencies: Vec<f64>,
    amplitudes: Vec<f64>,
    phases: Vec<f64>,
    noisy: bool,
    noise_seed: Option<u64>,
    value_unc: Uncertainty,
    time_unc: Uncertainty,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sampling_frequency: DEFAULT_SAMPLING_FREQUENCY_HZ,
            intercept: DEFAULT_INTERCEPT,
            frequencies: vec![DEFAULT_WAVE_FREQUENCY_HZ],
            amplitudes: vec![DEFAULT_WAVE_AMPLITUDE],
            phases: vec![DEFAULT_WAVE_PHASE_RAD],
            // No entropy source without `std`, and no seed by default
            noisy: DEFAULT_NOISY && cfg!(feature = "std"),
            noise_seed: None,
            value_unc: Uncertainty::Scalar(DEFAULT_VALUE_UNCERTAINTY),
            time_unc: Uncertainty::Scalar(DEFAULT_TIME_UNCERTAINTY),
        }
    }
}

impl GeneratorConfig {
    /// Start from the defaults
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Samples per second
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Constant offset added to every value
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Component frequencies in configured order
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Component amplitudes in configured order
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Component initial phases in configured order
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Wave components in configured order
    pub fn components(&self) -> impl Iterator<Item = WaveComponent> + '_ {
        self.frequencies
            .iter()
            .zip(&self.amplitudes)
            .zip(&self.phases)
            .map(|((&frequency, &amplitude), &phase)| WaveComponent {
                frequency,
                amplitude,
                phase,
            })
    }

    /// Whether Gaussian measurement noise is added
    pub fn is_noisy(&self) -> bool {
        self.noisy
    }

    /// Seed for reproducible noise, if any
    pub fn noise_seed(&self) -> Option<u64> {
        self.noise_seed
    }

    /// Uncertainty attached to every value
    pub fn value_uncertainty(&self) -> &Uncertainty {
        &self.value_unc
    }

    /// Uncertainty attached to every timestamp
    pub fn time_uncertainty(&self) -> &Uncertainty {
        &self.time_unc
    }

    /// Standard deviation of the added noise
    pub fn noise_std(&self) -> f64 {
        self.value_unc.primary() * NOISE_STD_PER_VALUE_UNCERTAINTY
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.sampling_frequency.is_finite() || self.sampling_frequency <= 0.0 {
            return Err(ConfigurationError::NonPositiveSamplingFrequency {
                value: self.sampling_frequency,
            });
        }

        if self.frequencies.len() != self.amplitudes.len()
            || self.frequencies.len() != self.phases.len()
        {
            return Err(ConfigurationError::ComponentLengthMismatch {
                frequencies: self.frequencies.len(),
                amplitudes: self.amplitudes.len(),
                phases: self.phases.len(),
            });
        }

        check_finite("intercept", &[self.intercept])?;
        check_finite("frequencies", &self.frequencies)?;
        check_finite("amplitudes", &self.amplitudes)?;
        check_finite("phases", &self.phases)?;

        self.value_unc.validate("value_unc")?;
        self.time_unc.validate("time_unc")?;

        #[cfg(not(feature = "std"))]
        if self.noisy && self.noise_seed.is_none() {
            return Err(ConfigurationError::MissingNoiseSeed);
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, values: &[f64]) -> Result<(), ConfigurationError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigurationError::NonFiniteParameter { name })
    }
}

/// Builder for [`GeneratorConfig`]
///
/// Every setter is optional; unset fields keep the defaults from
/// [`crate::constants`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Builder preloaded with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples per second, must be positive
    pub fn sampling_frequency(mut self, hz: f64) -> Self {
        self.config.sampling_frequency = hz;
        self
    }

    /// Constant offset of the signal
    pub fn intercept(mut self, intercept: f64) -> Self {
        self.config.intercept = intercept;
        self
    }

    /// Replace all wave components at once.
    ///
    /// The three slices must have equal length; this is checked by
    /// [`build`](Self::build), not here.
    pub fn waves(mut self, frequencies: &[f64], amplitudes: &[f64], phases: &[f64]) -> Self {
        self.config.frequencies = frequencies.to_vec();
        self.config.amplitudes = amplitudes.to_vec();
        self.config.phases = phases.to_vec();
        self
    }

    /// Append a single component
    pub fn add_wave(mut self, frequency: f64, amplitude: f64, phase: f64) -> Self {
        self.config.frequencies.push(frequency);
        self.config.amplitudes.push(amplitude);
        self.config.phases.push(phase);
        self
    }

    /// Drop every component, leaving only the intercept (and noise)
    pub fn clear_waves(mut self) -> Self {
        self.config.frequencies.clear();
        self.config.amplitudes.clear();
        self.config.phases.clear();
        self
    }

    /// Toggle Gaussian measurement noise
    pub fn noisy(mut self, noisy: bool) -> Self {
        self.config.noisy = noisy;
        self
    }

    /// Make noise reproducible: each sample's draw is keyed by `seed` and its time
    pub fn noise_seed(mut self, seed: u64) -> Self {
        self.config.noise_seed = Some(seed);
        self
    }

    /// Uncertainty attached to values, scalar or per quantity
    pub fn value_uncertainty(mut self, unc: impl Into<Uncertainty>) -> Self {
        self.config.value_unc = unc.into();
        self
    }

    /// Uncertainty attached to timestamps, scalar or per quantity
    pub fn time_uncertainty(mut self, unc: impl Into<Uncertainty>) -> Self {
        self.config.time_unc = unc.into();
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<GeneratorConfig, ConfigurationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
