//! Core traits
//!
//! Two seams, kept deliberately small:
//!
//! - [`SignalFunction`] - what a sampling driver calls to turn time values into
//!   measured values. The multi-wave generator is one implementation; a driver
//!   never needs to know which.
//! - [`Stream`] - pull-based access to produced samples, using `nb` so the
//!   same code runs with or without an async runtime.
//!
//! ## Plugging a custom signal into a stream
//!
//! ```rust
//! use metrowave_core::{InputError, Metadata, MetrologicalStream, SignalFunction};
//!
//! /// Linear ramp with a fixed uncertainty
//! struct Ramp;
//!
//! impl SignalFunction for Ramp {
//!     fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
//!         Ok(times.iter().map(|t| 2.0 * t).collect())
//!     }
//!
//!     fn uncertainty(&self) -> (f64, f64) {
//!         (0.0, 0.01)
//!     }
//! }
//!
//! let mut stream = MetrologicalStream::new(Ramp, 10.0, Metadata::default())?;
//! let batch = stream.next_sample(3)?;
//! assert_eq!(batch[2].value, 0.4);
//! # Ok::<(), metrowave_core::MetroError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::InputError;

/// Maps a time vector to a value vector with a constant uncertainty model
///
/// ## Contract
///
/// - Output length equals input length
/// - An empty or non-finite time vector is an [`InputError`]
/// - No state is carried from one call to the next; implementations must be
///   callable through `&self` from several threads at once if they are `Sync`
pub trait SignalFunction {
    /// Evaluate the signal at every time in `times` (seconds)
    fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>, InputError>;

    /// Constant `(time_uncertainty, value_uncertainty)` attached to every sample
    fn uncertainty(&self) -> (f64, f64);
}

impl<F: SignalFunction + ?Sized> SignalFunction for &F {
    fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
        (**self).evaluate(times)
    }

    fn uncertainty(&self) -> (f64, f64) {
        (**self).uncertainty()
    }
}

/// Pull-based sample source
///
/// Streams use a two-level error model:
/// - `nb::Error::WouldBlock` - nothing available yet, try again later
/// - `nb::Error::Other(E)` - something actually went wrong
pub trait Stream {
    /// Type of items produced by the stream
    type Item;

    /// Type of errors that can occur
    type Error;

    /// Attempt to pull the next item
    ///
    /// Must not block indefinitely. After an error the stream may still be
    /// usable.
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;

    /// Bounds on the remaining items, like `Iterator::size_hint`
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Check a time vector against the [`SignalFunction`] contract
pub fn check_time_vector(times: &[f64]) -> Result<(), InputError> {
    if times.is_empty() {
        return Err(InputError::EmptyTimeVector);
    }

    match times.iter().position(|t| !t.is_finite()) {
        Some(index) => Err(InputError::NonFiniteTime { index }),
        None => Ok(()),
    }
}
