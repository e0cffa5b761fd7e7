//! Sample clock for driving a generator
//!
//! The generator itself has no notion of "now". A [`SampleClock`] supplies it:
//! it counts samples and turns the count into evenly spaced times, so batch
//! after batch continues exactly where the previous one stopped.
//!
//! Times are always `index / sampling_frequency`, never an accumulated sum of
//! periods.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::ConfigurationError;

/// Time in seconds
pub type Seconds = f64;

/// Counts samples at a fixed sampling frequency
#[derive(Debug, Clone, PartialEq)]
pub struct SampleClock {
    sampling_frequency: f64,
    sample_index: u64,
}

impl SampleClock {
    /// Clock at t = 0; the frequency must be positive and finite
    pub fn new(sampling_frequency: f64) -> Result<Self, ConfigurationError> {
        if !sampling_frequency.is_finite() || sampling_frequency <= 0.0 {
            return Err(ConfigurationError::NonPositiveSamplingFrequency {
                value: sampling_frequency,
            });
        }

        Ok(Self {
            sampling_frequency,
            sample_index: 0,
        })
    }

    /// Samples per second
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Spacing between samples
    pub fn period(&self) -> Seconds {
        1.0 / self.sampling_frequency
    }

    /// Index of the next sample to be produced
    pub fn sample_index(&self) -> u64 {
        self.sample_index
    }

    /// Time of the next sample to be produced
    pub fn current_time(&self) -> Seconds {
        self.time_of(self.sample_index)
    }

    /// Time of sample `index`
    pub fn time_of(&self, index: u64) -> Seconds {
        index as f64 / self.sampling_frequency
    }

    /// Times of the next `batch_size` samples without advancing
    pub fn peek_times(&self, batch_size: usize) -> Vec<Seconds> {
        let start = self.sample_index;
        (start..start + batch_size as u64).map(|i| self.time_of(i)).collect()
    }

    /// Skip `count` samples
    pub fn advance(&mut self, count: usize) {
        self.sample_index += count as u64;
    }

    /// Times of the next `batch_size` samples; advances the clock
    pub fn next_times(&mut self, batch_size: usize) -> Vec<Seconds> {
        let times = self.peek_times(batch_size);
        self.advance(batch_size);
        times
    }

    /// Back to t = 0
    pub fn reset(&mut self) {
        self.sample_index = 0;
    }
}
