//! Wave superposition generator
//!
//! Produces `intercept + noise + Σ amplitude_i · cos(2π · frequency_i · t + phase_i)`
//! for every time value it is handed.
//!
//! ## Noise
//!
//! With noise enabled each time step gets an independent draw from
//! `N(0, (value_unc / 2)²)`. The random source is scoped to the call:
//!
//! - with a configured seed, each sample draws from a `StdRng` keyed by the
//!   seed and its own time value, so a given instant always carries the same
//!   noise while different instants are independent
//! - without a seed, the thread-local RNG is used, so calls differ
//! - [`MultiWaveGenerator::generate_with_rng`] takes any caller-owned RNG
//!
//! No RNG lives inside the generator, which keeps it `Sync`: several threads
//! can share one generator without locking.
//!
//! ## Example
//!
//! ```rust
//! use metrowave_core::{GeneratorConfig, MultiWaveGenerator};
//!
//! let config = GeneratorConfig::builder().noisy(false).build()?;
//! let generator = MultiWaveGenerator::new(config);
//!
//! // One full 50 Hz period sampled at quarter-period steps
//! let values = generator.generate(&[0.0, 0.005, 0.01, 0.015])?;
//! assert!((values[0] - 1.0).abs() < 1e-12);
//! assert!((values[2] + 1.0).abs() < 1e-12);
//! # Ok::<(), metrowave_core::MetroError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::{
    config::GeneratorConfig,
    errors::InputError,
    sample::Sample,
    traits::{check_time_vector, SignalFunction},
};

/// Stateless generator bound to an immutable [`GeneratorConfig`]
#[derive(Debug, Clone)]
pub struct MultiWaveGenerator {
    config: GeneratorConfig,
}

impl MultiWaveGenerator {
    /// Bind a validated configuration
    pub fn new(config: GeneratorConfig) -> Self {
        log_debug!(
            "Multi-wave generator: {} component(s), intercept {}, noise {}",
            config.components().count(),
            config.intercept(),
            if config.is_noisy() { "on" } else { "off" }
        );

        if config.is_noisy() && config.noise_std() == 0.0 {
            log_warn!("Noise enabled with zero value uncertainty - noise has no effect");
        }

        Self { config }
    }

    /// The bound configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Evaluate the signal at every time in `times` (seconds)
    pub fn generate(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
        match self.config.noise_seed() {
            Some(seed) => self.generate_seeded(times, seed),
            None => self.generate_unseeded(times),
        }
    }

    fn generate_seeded(&self, times: &[f64], seed: u64) -> Result<Vec<f64>, InputError> {
        check_time_vector(times)?;

        let mut values = self.superpose(times);

        if self.config.is_noisy() {
            let std = self.config.noise_std();
            for (value, &t) in values.iter_mut().zip(times) {
                let mut rng = StdRng::seed_from_u64(time_keyed_seed(seed, t));
                let z: f64 = StandardNormal.sample(&mut rng);
                *value += std * z;
            }
        }

        Ok(values)
    }

    #[cfg(feature = "std")]
    fn generate_unseeded(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
        self.generate_with_rng(times, &mut rand::thread_rng())
    }

    #[cfg(not(feature = "std"))]
    fn generate_unseeded(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
        // Noise is off here: the builder rejects unseeded noise and the
        // default configuration is noiseless without `std`
        self.generate_with_rng(times, &mut StdRng::seed_from_u64(0))
    }

    /// Same as [`generate`](Self::generate) but draws noise from `rng`
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        times: &[f64],
        rng: &mut R,
    ) -> Result<Vec<f64>, InputError> {
        check_time_vector(times)?;

        let mut values = self.superpose(times);

        if self.config.is_noisy() {
            let std = self.config.noise_std();
            for value in values.iter_mut() {
                let z: f64 = StandardNormal.sample(rng);
                *value += std * z;
            }
        }

        Ok(values)
    }

    /// Intercept plus every component, without noise
    fn superpose(&self, times: &[f64]) -> Vec<f64> {
        let mut values = vec![self.config.intercept(); times.len()];

        for component in self.config.components() {
            for (value, &t) in values.iter_mut().zip(times) {
                *value += component.evaluate(t);
            }
        }

        values
    }

    /// Evaluate and attach the configured uncertainties
    pub fn generate_samples(&self, times: &[f64]) -> Result<Vec<Sample>, InputError> {
        let values = self.generate(times)?;
        let (time_unc, value_unc) = self.uncertainty();

        Ok(times
            .iter()
            .zip(values)
            .map(|(&t, x)| Sample::new(t, time_unc, x, value_unc))
            .collect())
    }

    /// Constant `(time_uncertainty, value_uncertainty)` of the generated quantity
    pub fn uncertainty(&self) -> (f64, f64) {
        (
            self.config.time_uncertainty().primary(),
            self.config.value_uncertainty().primary(),
        )
    }
}

/// Per-sample seed from the configured seed and the sample's time.
///
/// `-0.0` and `0.0` map to the same seed.
fn time_keyed_seed(seed: u64, t: f64) -> u64 {
    let bits = if t == 0.0 { 0 } else { t.to_bits() };
    // splitmix64 finaliser
    let mut z = seed ^ bits.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl From<GeneratorConfig> for MultiWaveGenerator {
    fn from(config: GeneratorConfig) -> Self {
        Self::new(config)
    }
}

impl SignalFunction for MultiWaveGenerator {
    fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>, InputError> {
        self.generate(times)
    }

    fn uncertainty(&self) -> (f64, f64) {
        MultiWaveGenerator::uncertainty(self)
    }
}
