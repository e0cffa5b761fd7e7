//! Synthetic metrological data for processing pipelines
//!
//! Generates a signal as a sum of cosine waves plus an intercept and optional
//! Gaussian measurement noise. Every value comes with a time uncertainty and a
//! value uncertainty, so consumers receive `(t, u_t, x, u_x)` tuples instead of
//! a bare time series.
//!
//! Key constraints:
//! - Generation is stateless: the only state is the immutable configuration
//! - Runs without `std` (with `alloc`); noise then needs an explicit seed
//! - All validation happens at construction or at the call boundary
//!
//! ```no_run
//! use metrowave_core::{GeneratorConfig, Metadata, MetrologicalStream};
//!
//! let config = GeneratorConfig::builder()
//!     .sampling_frequency(1000.0)
//!     .waves(&[50.0, 120.0], &[1.0, 0.2], &[0.0, 0.0])
//!     .build()?;
//!
//! let mut stream = MetrologicalStream::from_config(config, Metadata::default())?;
//! for sample in stream.next_sample(100)? {
//!     let [t, u_t, x, u_x] = sample.to_array();
//!     // hand off to the pipeline
//!     # let _ = (t, u_t, x, u_x);
//! }
//! # Ok::<(), metrowave_core::MetroError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod metadata;
pub mod sample;
pub mod stream;
pub mod time;
pub mod traits;
pub mod uncertainty;

// Public API
pub use config::{GeneratorConfig, GeneratorConfigBuilder, WaveComponent};
pub use errors::{ConfigurationError, InputError, MetroError, MetroResult};
pub use generator::MultiWaveGenerator;
pub use metadata::Metadata;
pub use sample::Sample;
pub use stream::MetrologicalStream;
pub use time::SampleClock;
pub use traits::{SignalFunction, Stream};
pub use uncertainty::Uncertainty;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MultiWaveGenerator>();
        assert_send_sync::<GeneratorConfig>();
    }
}
