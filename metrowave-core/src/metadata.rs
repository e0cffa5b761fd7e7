//! Descriptive metadata carried alongside a stream
//!
//! Nothing here feeds into the generated values. The record exists so that a
//! consumer receiving bare `(t, u_t, x, u_x)` tuples can tell what they mean.

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{constants::*, errors::ConfigurationError};

/// Static description of a metrological stream
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metadata {
    /// Identifier of the (simulated) device
    pub device_id: String,
    /// Name of the time axis
    pub time_name: String,
    /// Unit of the time axis
    pub time_unit: String,
    /// Names of the measured quantities
    pub quantity_names: Vec<String>,
    /// Units of the measured quantities, index-aligned with the names
    pub quantity_units: Vec<String>,
    /// Free-text description
    pub misc: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            time_name: DEFAULT_TIME_NAME.to_string(),
            time_unit: DEFAULT_TIME_UNIT.to_string(),
            quantity_names: DEFAULT_QUANTITY_NAMES.iter().map(|s| s.to_string()).collect(),
            quantity_units: DEFAULT_QUANTITY_UNITS.iter().map(|s| s.to_string()).collect(),
            misc: Some(DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

impl Metadata {
    /// Metadata with the given device id and defaults elsewhere
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            ..Self::default()
        }
    }

    /// Set name and unit of the time axis
    pub fn with_time(mut self, name: &str, unit: &str) -> Self {
        self.time_name = name.to_string();
        self.time_unit = unit.to_string();
        self
    }

    /// Replace the quantity list with a single quantity
    pub fn with_quantity(mut self, name: &str, unit: &str) -> Self {
        self.quantity_names = vec![name.to_string()];
        self.quantity_units = vec![unit.to_string()];
        self
    }

    /// Replace the quantity list
    pub fn with_quantities(mut self, names: &[&str], units: &[&str]) -> Self {
        self.quantity_names = names.iter().map(|s| s.to_string()).collect();
        self.quantity_units = units.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set or clear the free-text description
    pub fn with_misc(mut self, misc: Option<&str>) -> Self {
        self.misc = misc.map(|s| s.to_string());
        self
    }

    /// Number of described quantities
    pub fn quantity_count(&self) -> usize {
        self.quantity_names.len()
    }

    /// Unit of quantity `index`, if described
    pub fn unit_of(&self, index: usize) -> Option<&str> {
        self.quantity_units.get(index).map(String::as_str)
    }

    /// Reject records a consumer could not interpret
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.device_id.trim().is_empty() {
            return Err(ConfigurationError::InvalidMetadata {
                reason: "device id is empty",
            });
        }

        if self.quantity_names.len() != self.quantity_units.len() {
            return Err(ConfigurationError::InvalidMetadata {
                reason: "quantity names and units differ in length",
            });
        }

        Ok(())
    }
}
