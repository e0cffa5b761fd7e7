//! Record Schemas and Stream Descriptors for metrowave
//!
//! ## Overview
//!
//! A metrological stream is only useful downstream if the consumer knows what
//! each tuple means. This crate provides the two pieces a host driver needs
//! around the core generator:
//!
//! 1. **Avro record schemas** for the produced `(time, time_uncertainty,
//!    value, value_uncertainty)` samples and for the metadata block, plus
//!    conversion of core types into Avro values ([`encoding`]).
//! 2. **JSON stream descriptors** ([`StreamDescriptor`]) so streams can be
//!    configured from files instead of code.
//!
//! Moving the encoded records anywhere is left to the host.
//!
//! ## Sample Schema
//! ```json
//! {
//!   "type": "record",
//!   "name": "MetrologicalSample",
//!   "fields": [
//!     {"name": "time", "type": "double"},
//!     {"name": "time_uncertainty", "type": "double"},
//!     {"name": "value", "type": "double"},
//!     {"name": "value_uncertainty", "type": "double"}
//!   ]
//! }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use metrowave_schemas::{encoding, SchemaRegistry, StreamDescriptor};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.load_defaults()?;
//!
//! let descriptor = StreamDescriptor::from_json_str(r#"{"generator": {"noisy": false}}"#)?;
//! let mut stream = descriptor.into_stream()?;
//!
//! for sample in stream.next_sample(4).expect("valid batch") {
//!     registry.validate("metrological_sample_v1", &encoding::sample_to_avro(&sample))?;
//! }
//! # Ok::<(), metrowave_schemas::SchemaError>(())
//! ```

use apache_avro::{types::Value, Schema};
use metrowave_core::ConfigurationError;
use std::collections::HashMap;

pub mod descriptor;
pub mod encoding;
pub mod schemas;

pub use descriptor::{GeneratorSection, StreamDescriptor};

/// Name under which the sample schema is registered by default
pub const SAMPLE_SCHEMA: &str = "metrological_sample_v1";

/// Name under which the metadata schema is registered by default
pub const METADATA_SCHEMA: &str = "stream_metadata_v1";

/// Schema registry for managing multiple schema versions
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema
    pub fn register(&mut self, name: &str, schema: Schema) {
        self.schemas.insert(name.to_string(), schema);
    }

    /// Get schema by name
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Load default metrowave schemas
    pub fn load_defaults(&mut self) -> Result<(), SchemaError> {
        let sample = schemas::metrological_sample_v1()?;
        self.register(SAMPLE_SCHEMA, sample);

        let metadata = schemas::stream_metadata_v1()?;
        self.register(METADATA_SCHEMA, metadata);

        log::debug!("Registered {} default schemas", self.schemas.len());
        Ok(())
    }

    /// Check `value` against the schema registered as `name`
    pub fn validate(&self, name: &str, value: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        if value.validate(schema) {
            Ok(())
        } else {
            Err(SchemaError::ValidationError(format!("value does not match {}", name)))
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid stream descriptor: {0}")]
    Descriptor(String),

    #[error("Invalid stream configuration: {0}")]
    InvalidConfiguration(ConfigurationError),

    #[error("I/O error: {0}")]
    Io(String),
}
