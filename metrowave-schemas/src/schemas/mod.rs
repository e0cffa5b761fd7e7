//! metrowave Avro record schemas
//!
//! Field order in the sample record is the wire order consumers expect:
//! time, time uncertainty, value, value uncertainty.

use apache_avro::Schema;
use serde_json::json;

use crate::SchemaError;

/// Metrological sample schema v1.0.0
pub fn metrological_sample_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": "io.metrowave.samples.v1",
        "type": "record",
        "name": "MetrologicalSample",
        "doc": "One observation with the uncertainty of its time and value",
        "fields": [
            {
                "name": "time",
                "type": "double",
                "doc": "Time in the unit given by the stream metadata"
            },
            {
                "name": "time_uncertainty",
                "type": "double",
                "doc": "Uncertainty of the time"
            },
            {
                "name": "value",
                "type": "double",
                "doc": "Measured value"
            },
            {
                "name": "value_uncertainty",
                "type": "double",
                "doc": "Uncertainty of the value"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Stream metadata schema v1.0.0
pub fn stream_metadata_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": "io.metrowave.streams.v1",
        "type": "record",
        "name": "StreamMetadata",
        "doc": "Static description sent once per stream",
        "fields": [
            {
                "name": "device_id",
                "type": "string"
            },
            {
                "name": "time_name",
                "type": "string"
            },
            {
                "name": "time_unit",
                "type": "string"
            },
            {
                "name": "quantity_names",
                "type": {"type": "array", "items": "string"}
            },
            {
                "name": "quantity_units",
                "type": {"type": "array", "items": "string"},
                "doc": "Index-aligned with quantity_names"
            },
            {
                "name": "misc",
                "type": ["null", "string"],
                "default": null,
                "doc": "Free-text description"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}
