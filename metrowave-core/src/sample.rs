//! One metrological observation

/// A value and its timestamp, each with the uncertainty attached to it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Time in seconds
    pub time: f64,
    /// Uncertainty of `time`
    pub time_uncertainty: f64,
    /// Measured value
    pub value: f64,
    /// Uncertainty of `value`
    pub value_uncertainty: f64,
}

impl Sample {
    /// Assemble a sample
    pub const fn new(time: f64, time_uncertainty: f64, value: f64, value_uncertainty: f64) -> Self {
        Self {
            time,
            time_uncertainty,
            value,
            value_uncertainty,
        }
    }

    /// `(time, time_uncertainty, value, value_uncertainty)` in wire order
    pub const fn to_array(&self) -> [f64; 4] {
        [self.time, self.time_uncertainty, self.value, self.value_uncertainty]
    }
}

impl From<Sample> for [f64; 4] {
    fn from(sample: Sample) -> Self {
        sample.to_array()
    }
}

impl From<Sample> for (f64, f64, f64, f64) {
    fn from(s: Sample) -> Self {
        (s.time, s.time_uncertainty, s.value, s.value_uncertainty)
    }
}
