//! Conversion of samples and metadata into Avro values
//!
//! The produced values follow [`metrological_sample_v1`](crate::schemas::metrological_sample_v1)
//! and [`stream_metadata_v1`](crate::schemas::stream_metadata_v1) field for
//! field, so they can be handed to any Avro writer a host driver uses.

use apache_avro::types::Value;
use metrowave_core::{Metadata, Sample};

/// Avro record for one sample
pub fn sample_to_avro(sample: &Sample) -> Value {
    Value::Record(vec![
        ("time".to_string(), Value::Double(sample.time)),
        ("time_uncertainty".to_string(), Value::Double(sample.time_uncertainty)),
        ("value".to_string(), Value::Double(sample.value)),
        ("value_uncertainty".to_string(), Value::Double(sample.value_uncertainty)),
    ])
}

/// Avro records for a batch, in call order
pub fn samples_to_avro(samples: &[Sample]) -> Vec<Value> {
    samples.iter().map(sample_to_avro).collect()
}

/// Avro record for a metadata block
pub fn metadata_to_avro(metadata: &Metadata) -> Value {
    let strings = |items: &[String]| {
        Value::Array(items.iter().cloned().map(Value::String).collect())
    };

    // Union branch index follows the schema: 0 = null, 1 = string
    let misc = match &metadata.misc {
        Some(text) => Value::Union(1, Box::new(Value::String(text.clone()))),
        None => Value::Union(0, Box::new(Value::Null)),
    };

    Value::Record(vec![
        ("device_id".to_string(), Value::String(metadata.device_id.clone())),
        ("time_name".to_string(), Value::String(metadata.time_name.clone())),
        ("time_unit".to_string(), Value::String(metadata.time_unit.clone())),
        ("quantity_names".to_string(), strings(&metadata.quantity_names)),
        ("quantity_units".to_string(), strings(&metadata.quantity_units)),
        ("misc".to_string(), misc),
    ])
}
