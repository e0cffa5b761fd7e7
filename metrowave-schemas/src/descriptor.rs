//! JSON stream descriptors
//!
//! A descriptor is the configuration file for one stream: a `generator`
//! section with the signal parameters and a `metadata` section describing the
//! output. Every field is optional and falls back to the library defaults, so
//! `{}` is a valid descriptor for the default 50 Hz stream.
//!
//! ```json
//! {
//!   "generator": {
//!     "sampling_frequency": 1000,
//!     "frequencies": [50, 150],
//!     "amplitudes": [1.0, 0.2],
//!     "phases": [0.0, 0.0],
//!     "value_unc": [0.05, 0.2],
//!     "noisy": true,
//!     "noise_seed": 7
//!   },
//!   "metadata": {
//!     "device_id": "mains-sim",
//!     "quantity_names": ["Voltage"],
//!     "quantity_units": ["V"]
//!   }
//! }
//! ```
//!
//! Uncertainties accept either a number or an array with one entry per
//! quantity. Validation runs when the descriptor is turned into a
//! configuration, not when it is parsed.

use std::{fs, path::Path};

use log::debug;
use metrowave_core::{
    constants::*, GeneratorConfig, Metadata, MetrologicalStream, MultiWaveGenerator, Uncertainty,
};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Signal parameters as they appear in a descriptor file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Samples per second
    pub sampling_frequency: f64,
    /// Constant offset
    pub intercept: f64,
    /// Component frequencies (Hz)
    pub frequencies: Vec<f64>,
    /// Component amplitudes
    pub amplitudes: Vec<f64>,
    /// Component initial phases (rad)
    pub phases: Vec<f64>,
    /// Gaussian noise on or off
    pub noisy: bool,
    /// Seed for reproducible noise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_seed: Option<u64>,
    /// Value uncertainty, number or per-quantity array
    pub value_unc: Uncertainty,
    /// Time uncertainty, number or per-quantity array
    pub time_unc: Uncertainty,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            sampling_frequency: DEFAULT_SAMPLING_FREQUENCY_HZ,
            intercept: DEFAULT_INTERCEPT,
            frequencies: vec![DEFAULT_WAVE_FREQUENCY_HZ],
            amplitudes: vec![DEFAULT_WAVE_AMPLITUDE],
            phases: vec![DEFAULT_WAVE_PHASE_RAD],
            noisy: DEFAULT_NOISY,
            noise_seed: None,
            value_unc: Uncertainty::Scalar(DEFAULT_VALUE_UNCERTAINTY),
            time_unc: Uncertainty::Scalar(DEFAULT_TIME_UNCERTAINTY),
        }
    }
}

impl GeneratorSection {
    /// Copy the parameters out of a built configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            sampling_frequency: config.sampling_frequency(),
            intercept: config.intercept(),
            frequencies: config.frequencies().to_vec(),
            amplitudes: config.amplitudes().to_vec(),
            phases: config.phases().to_vec(),
            noisy: config.is_noisy(),
            noise_seed: config.noise_seed(),
            value_unc: config.value_uncertainty().clone(),
            time_unc: config.time_uncertainty().clone(),
        }
    }

    /// Validate into a generator configuration
    pub fn to_config(&self) -> Result<GeneratorConfig, SchemaError> {
        let mut builder = GeneratorConfig::builder()
            .sampling_frequency(self.sampling_frequency)
            .intercept(self.intercept)
            .waves(&self.frequencies, &self.amplitudes, &self.phases)
            .noisy(self.noisy)
            .value_uncertainty(self.value_unc.clone())
            .time_uncertainty(self.time_unc.clone());

        if let Some(seed) = self.noise_seed {
            builder = builder.noise_seed(seed);
        }

        builder.build().map_err(SchemaError::InvalidConfiguration)
    }
}

/// Complete description of one stream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamDescriptor {
    /// Signal parameters
    pub generator: GeneratorSection,
    /// Descriptive metadata
    pub metadata: Metadata,
}

impl StreamDescriptor {
    /// Descriptor for an existing configuration and metadata
    pub fn new(config: &GeneratorConfig, metadata: Metadata) -> Self {
        Self {
            generator: GeneratorSection::from_config(config),
            metadata,
        }
    }

    /// Parse a descriptor from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::Descriptor(e.to_string()))
    }

    /// Read and parse a descriptor file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SchemaError::Io(format!("{}: {}", path.display(), e)))?;

        debug!("Loaded stream descriptor from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Descriptor(e.to_string()))
    }

    /// Validated generator configuration
    pub fn generator_config(&self) -> Result<GeneratorConfig, SchemaError> {
        self.generator.to_config()
    }

    /// Descriptive metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Build the stream this descriptor describes
    pub fn into_stream(self) -> Result<MetrologicalStream<MultiWaveGenerator>, SchemaError> {
        let config = self.generator.to_config()?;
        MetrologicalStream::from_config(config, self.metadata)
            .map_err(SchemaError::InvalidConfiguration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrowave_core::ConfigurationError;

    #[test]
    fn empty_object_uses_defaults() {
        let descriptor = StreamDescriptor::from_json_str("{}").unwrap();
        assert_eq!(descriptor, StreamDescriptor::default());

        let config = descriptor.generator_config().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(descriptor.metadata(), &Metadata::default());
    }

    #[test]
    fn scalar_and_array_uncertainties() {
        let descriptor = StreamDescriptor::from_json_str(
            r#"{"generator": {"value_unc": [0.05, 0.2], "time_unc": 1e-6}}"#,
        )
        .unwrap();

        assert_eq!(descriptor.generator.value_unc, Uncertainty::PerQuantity(vec![0.05, 0.2]));
        assert_eq!(descriptor.generator.time_unc, Uncertainty::Scalar(1e-6));
    }

    #[test]
    fn mismatch_reported_when_converting() {
        let descriptor = StreamDescriptor::from_json_str(
            r#"{"generator": {"frequencies": [50, 60], "amplitudes": [1], "phases": [0, 0]}}"#,
        )
        .unwrap();

        assert!(matches!(
            descriptor.generator_config(),
            Err(SchemaError::InvalidConfiguration(
                ConfigurationError::ComponentLengthMismatch { .. }
            ))
        ));
    }

    #[test]
    fn malformed_json_is_descriptor_error() {
        let result = StreamDescriptor::from_json_str(r#"{"generator": {"noisy": "yes"}}"#);
        assert!(matches!(result, Err(SchemaError::Descriptor(_))));
    }

    #[test]
    fn config_survives_json() {
        let config = GeneratorConfig::builder()
            .sampling_frequency(2000.0)
            .waves(&[50.0, 250.0], &[1.0, 0.1], &[0.0, 1.5])
            .noise_seed(3)
            .build()
            .unwrap();

        let json = StreamDescriptor::new(&config, Metadata::new("bench")).to_json_string().unwrap();
        let parsed = StreamDescriptor::from_json_str(&json).unwrap();

        assert_eq!(parsed.generator_config().unwrap(), config);
        assert_eq!(parsed.metadata().device_id, "bench");
    }
}
