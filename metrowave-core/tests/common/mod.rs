//! Common test utilities for integration tests
//!
//! This module provides:
//! - Configuration fixtures for typical generator setups
//! - Floating-point assertion helpers
//! - Small statistics helpers for noise checks

#![allow(dead_code)]

use metrowave_core::{GeneratorConfig, MultiWaveGenerator};

/// Absolute tolerance for noiseless comparisons
pub const TOL: f64 = 1e-9;

/// Default single 50 Hz component, noise off
pub fn quiet_default() -> MultiWaveGenerator {
    MultiWaveGenerator::new(GeneratorConfig::builder().noisy(false).build().unwrap())
}

/// Noiseless generator from explicit component arrays
pub fn quiet_waves(
    intercept: f64,
    frequencies: &[f64],
    amplitudes: &[f64],
    phases: &[f64],
) -> MultiWaveGenerator {
    MultiWaveGenerator::new(
        GeneratorConfig::builder()
            .intercept(intercept)
            .waves(frequencies, amplitudes, phases)
            .noisy(false)
            .build()
            .unwrap(),
    )
}

/// `n` evenly spaced times at `sfreq` Hz, starting at zero
pub fn time_vector(n: usize, sfreq: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 / sfreq).collect()
}

/// Elementwise comparison within `tol`
pub fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {}: {} vs {} (tolerance {})",
            i,
            a,
            e,
            tol
        );
    }
}

/// Sample mean and (population) standard deviation
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}
