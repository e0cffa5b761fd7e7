//! Metrological stream: a signal function driven by a sample clock
//!
//! A [`MetrologicalStream`] is the smallest possible sampling driver. It owns
//! a [`SampleClock`], hands batches of evenly spaced times to a
//! [`SignalFunction`], and pairs each value with the constant uncertainties
//! and the stream's [`Metadata`]. It never decides *when* it is called.
//!
//! ## Example
//!
//! ```rust
//! use metrowave_core::{GeneratorConfig, Metadata, MetrologicalStream};
//!
//! let config = GeneratorConfig::builder().noisy(false).build()?;
//! let mut stream = MetrologicalStream::from_config(config, Metadata::default())?;
//!
//! let first = stream.next_sample(5)?;
//! let second = stream.next_sample(5)?;
//! assert_eq!(second[0].time, 5.0 / 500.0);
//! # let _ = first;
//! # Ok::<(), metrowave_core::MetroError>(())
//! ```
//!
//! ## Pull-based access
//!
//! The stream also implements [`Stream`], yielding one sample per poll. It is
//! unbounded and never returns `WouldBlock`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    config::GeneratorConfig,
    errors::{ConfigurationError, InputError, MetroError, MetroResult},
    generator::MultiWaveGenerator,
    metadata::Metadata,
    sample::Sample,
    time::SampleClock,
    traits::{SignalFunction, Stream},
};

/// Sampling driver around a [`SignalFunction`]
#[derive(Debug, Clone)]
pub struct MetrologicalStream<G> {
    signal: G,
    clock: SampleClock,
    metadata: Metadata,
}

impl MetrologicalStream<MultiWaveGenerator> {
    /// Stream over a multi-wave generator, clocked at its sampling frequency
    pub fn from_config(config: GeneratorConfig, metadata: Metadata) -> Result<Self, ConfigurationError> {
        let sampling_frequency = config.sampling_frequency();
        Self::new(MultiWaveGenerator::new(config), sampling_frequency, metadata)
    }
}

impl<G: SignalFunction> MetrologicalStream<G> {
    /// Wrap `signal`, sampled at `sampling_frequency` Hz starting from t = 0
    pub fn new(signal: G, sampling_frequency: f64, metadata: Metadata) -> Result<Self, ConfigurationError> {
        metadata.validate()?;
        let clock = SampleClock::new(sampling_frequency)?;

        log_debug!(
            "Stream '{}' at {} Hz ({} quantities)",
            metadata.device_id,
            sampling_frequency,
            metadata.quantity_count()
        );

        Ok(Self {
            signal,
            clock,
            metadata,
        })
    }

    /// Next `batch_size` samples.
    ///
    /// The clock only advances when the batch was produced; a failed call
    /// leaves the stream untouched.
    pub fn next_sample(&mut self, batch_size: usize) -> MetroResult<Vec<Sample>> {
        if batch_size == 0 {
            return Err(MetroError::Input(InputError::EmptyTimeVector));
        }

        let times = self.clock.peek_times(batch_size);
        let values = self.signal.evaluate(&times)?;
        if values.len() != times.len() {
            log_warn!(
                "Stream '{}': signal returned {} values for {} times",
                self.metadata.device_id,
                values.len(),
                times.len()
            );
            return Err(MetroError::SignalLength {
                expected: times.len(),
                actual: values.len(),
            });
        }
        let (time_unc, value_unc) = self.signal.uncertainty();

        self.clock.advance(batch_size);

        Ok(times
            .into_iter()
            .zip(values)
            .map(|(t, x)| Sample::new(t, time_unc, x, value_unc))
            .collect())
    }

    /// Next `N` samples in a fixed-capacity vector
    pub fn fill_batch<const N: usize>(&mut self) -> MetroResult<heapless::Vec<Sample, N>> {
        let samples = self.next_sample(N)?;
        heapless::Vec::from_slice(&samples).map_err(|_| MetroError::SignalLength {
            expected: N,
            actual: samples.len(),
        })
    }

    /// Restart at t = 0
    pub fn reset(&mut self) {
        log_debug!("Stream '{}' reset", self.metadata.device_id);
        self.clock.reset();
    }

    /// Descriptive record of this stream
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The wrapped signal function
    pub fn signal(&self) -> &G {
        &self.signal
    }

    /// The sample clock
    pub fn clock(&self) -> &SampleClock {
        &self.clock
    }
}

impl<G: SignalFunction> Stream for MetrologicalStream<G> {
    type Item = Sample;
    type Error = MetroError;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        let mut batch = self.next_sample(1).map_err(nb::Error::Other)?;
        batch.pop().ok_or(nb::Error::WouldBlock)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_stream() -> MetrologicalStream<MultiWaveGenerator> {
        let config = GeneratorConfig::builder().noisy(false).build().unwrap();
        MetrologicalStream::from_config(config, Metadata::default()).unwrap()
    }

    #[test]
    fn batches_continue_in_time() {
        let mut stream = quiet_stream();

        let first = stream.next_sample(3).unwrap();
        let second = stream.next_sample(2).unwrap();

        let times: Vec<f64> = first.iter().chain(&second).map(|s| s.time).collect();
        let expected: Vec<f64> = (0..5).map(|i| i as f64 / 500.0).collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn samples_carry_default_uncertainty() {
        let mut stream = quiet_stream();
        for sample in stream.next_sample(4).unwrap() {
            assert_eq!(sample.time_uncertainty, 0.0);
            assert_eq!(sample.value_uncertainty, 0.1);
        }
    }

    #[test]
    fn empty_batch_is_an_input_error() {
        let mut stream = quiet_stream();
        assert_eq!(
            stream.next_sample(0),
            Err(MetroError::Input(InputError::EmptyTimeVector))
        );
        assert_eq!(stream.clock().sample_index(), 0);
    }

    #[test]
    fn poll_yields_one_sample_at_a_time() {
        let mut stream = quiet_stream();

        let first = stream.poll_next().unwrap();
        let second = stream.poll_next().unwrap();
        assert_eq!(first.time, 0.0);
        assert_eq!(second.time, 0.002);
        assert_eq!(stream.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn fixed_capacity_batch() {
        let mut stream = quiet_stream();
        let batch = stream.fill_batch::<8>().unwrap();
        assert_eq!(batch.len(), 8);
        assert_eq!(stream.clock().sample_index(), 8);
    }

    #[test]
    fn reset_replays_noiseless_signal() {
        let mut stream = quiet_stream();
        let before = stream.next_sample(10).unwrap();
        stream.reset();
        let after = stream.next_sample(10).unwrap();
        assert_eq!(before, after);
    }

    /// Signal that drops the last value of every batch
    struct Truncating;

    impl SignalFunction for Truncating {
        fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
            Ok(vec![0.0; times.len() - 1])
        }

        fn uncertainty(&self) -> (f64, f64) {
            (0.0, 0.0)
        }
    }

    #[test]
    fn short_signal_output_is_an_error() {
        let mut stream = MetrologicalStream::new(Truncating, 100.0, Metadata::default()).unwrap();

        assert_eq!(
            stream.next_sample(4),
            Err(MetroError::SignalLength { expected: 4, actual: 3 })
        );
        assert_eq!(
            stream.fill_batch::<2>(),
            Err(MetroError::SignalLength { expected: 2, actual: 1 })
        );
        assert_eq!(stream.clock().sample_index(), 0);
    }

    #[test]
    fn fixed_capacity_batch_matches_dynamic_batch() {
        let mut fixed = quiet_stream();
        let mut dynamic = quiet_stream();

        let batch = fixed.fill_batch::<6>().unwrap();
        assert_eq!(batch.as_slice(), dynamic.next_sample(6).unwrap().as_slice());
    }

    #[test]
    fn invalid_metadata_rejected() {
        let config = GeneratorConfig::builder().noisy(false).build().unwrap();
        let metadata = Metadata::new("");
        assert!(matches!(
            MetrologicalStream::from_config(config, metadata),
            Err(ConfigurationError::InvalidMetadata { .. })
        ));
    }
}
