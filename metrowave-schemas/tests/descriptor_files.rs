//! Integration tests for loading streams from descriptor files

use std::io::Write;

use metrowave_core::{Sample, Uncertainty};
use metrowave_schemas::{
    encoding, SchemaError, SchemaRegistry, StreamDescriptor, METADATA_SCHEMA, SAMPLE_SCHEMA,
};
use tempfile::NamedTempFile;

fn write_descriptor(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn file_descriptor_builds_a_working_stream() {
    let file = write_descriptor(
        r#"{
            "generator": {
                "sampling_frequency": 200,
                "frequencies": [50],
                "amplitudes": [2.0],
                "phases": [0.0],
                "intercept": 1.0,
                "noisy": false,
                "value_unc": 0.25
            },
            "metadata": {
                "device_id": "file-stream",
                "quantity_names": ["Force"],
                "quantity_units": ["N"],
                "misc": null
            }
        }"#,
    );

    let descriptor = StreamDescriptor::from_path(file.path()).unwrap();
    assert_eq!(descriptor.metadata().device_id, "file-stream");
    assert_eq!(descriptor.metadata().misc, None);

    let mut stream = descriptor.into_stream().unwrap();
    let samples = stream.next_sample(3).unwrap();

    // 1 + 2·cos(2π·50·t) at t = 0, 1/200, 2/200
    let expected = [3.0, 1.0, -1.0];
    for (sample, want) in samples.iter().zip(expected) {
        assert!((sample.value - want).abs() < 1e-9);
        assert_eq!(sample.value_uncertainty, 0.25);
    }
}

#[test]
fn seeded_file_streams_are_reproducible() {
    let json = r#"{"generator": {"noise_seed": 17, "value_unc": [0.2, 0.4]}}"#;

    let mut a = StreamDescriptor::from_json_str(json).unwrap().into_stream().unwrap();
    let mut b = StreamDescriptor::from_json_str(json).unwrap().into_stream().unwrap();

    let first = a.next_sample(20).unwrap();
    assert_eq!(first, b.next_sample(20).unwrap());
    assert_eq!(first[0].value_uncertainty, 0.2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = StreamDescriptor::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SchemaError::Io(_))));
}

#[test]
fn invalid_parameters_rejected_at_stream_construction() {
    let json = r#"{"generator": {"sampling_frequency": 0}}"#;
    let result = StreamDescriptor::from_json_str(json).unwrap().into_stream();
    assert!(matches!(result, Err(SchemaError::InvalidConfiguration(_))));

    let json = r#"{"generator": {"value_unc": -1.0}}"#;
    let descriptor = StreamDescriptor::from_json_str(json).unwrap();
    assert_eq!(descriptor.generator.value_unc, Uncertainty::Scalar(-1.0));
    assert!(descriptor.generator_config().is_err());

    let json = r#"{"metadata": {"quantity_names": ["A", "B"], "quantity_units": ["m"]}}"#;
    let result = StreamDescriptor::from_json_str(json).unwrap().into_stream();
    assert!(matches!(result, Err(SchemaError::InvalidConfiguration(_))));
}

#[test]
fn streamed_samples_match_registered_schema() {
    let mut registry = SchemaRegistry::new();
    registry.load_defaults().unwrap();

    let mut stream = StreamDescriptor::default().into_stream().unwrap();
    let samples: Vec<Sample> = stream.next_sample(50).unwrap();

    for value in encoding::samples_to_avro(&samples) {
        registry.validate(SAMPLE_SCHEMA, &value).unwrap();
    }

    let metadata = encoding::metadata_to_avro(stream.metadata());
    registry.validate(METADATA_SCHEMA, &metadata).unwrap();
}

#[test]
fn written_descriptor_reloads() {
    let descriptor = StreamDescriptor::from_json_str(
        r#"{"generator": {"frequencies": [10, 20], "amplitudes": [1, 1], "phases": [0, 3.14]}}"#,
    )
    .unwrap();

    let file = write_descriptor(&descriptor.to_json_string().unwrap());
    let reloaded = StreamDescriptor::from_path(file.path()).unwrap();

    assert_eq!(reloaded, descriptor);
}
