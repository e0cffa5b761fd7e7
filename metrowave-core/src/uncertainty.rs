//! Configured measurement uncertainty
//!
//! Uncertainties are supplied by the caller and attached unchanged to every
//! sample. They are never estimated from the signal. Each one is either a
//! single scalar, valid for every quantity, or one entry per quantity.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::ConfigurationError;

/// Uncertainty of a value or of a timestamp
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Uncertainty {
    /// Same uncertainty for every quantity
    Scalar(f64),
    /// One uncertainty per quantity, index-aligned with the quantity names
    PerQuantity(Vec<f64>),
}

impl Uncertainty {
    /// Uncertainty for quantity `channel`, if it is defined
    pub fn for_channel(&self, channel: usize) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::PerQuantity(values) => values.get(channel).copied(),
        }
    }

    /// Uncertainty of the first quantity, the one the generator produces
    pub fn primary(&self) -> f64 {
        self.for_channel(0).unwrap_or(0.0)
    }

    /// Check that the uncertainty is usable; `name` ends up in the error
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigurationError> {
        let ok = |u: f64| u.is_finite() && u >= 0.0;
        let valid = match self {
            Self::Scalar(value) => ok(*value),
            Self::PerQuantity(values) => !values.is_empty() && values.iter().all(|&u| ok(u)),
        };

        if valid {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidUncertainty { name })
        }
    }
}

impl From<f64> for Uncertainty {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Uncertainty {
    fn from(values: Vec<f64>) -> Self {
        Self::PerQuantity(values)
    }
}

impl From<&[f64]> for Uncertainty {
    fn from(values: &[f64]) -> Self {
        Self::PerQuantity(values.to_vec())
    }
}
