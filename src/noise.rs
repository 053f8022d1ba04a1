//! Additive White Gaussian Noise generator
//!
//! Uses Box-Muller transform for Gaussian samples.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// AWGN generator with configurable power
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of noise power)
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    /// Create a generator producing samples with variance `noise_power`
    ///
    /// The generator runs on its own RNG seeded from `seed_rng`, so one seed
    /// RNG can hand out independent streams to several consumers.
    pub fn new(noise_power: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        let std_dev = noise_power.sqrt();

        // Derive an independent stream from the caller's RNG
        let seed: u64 = seed_rng.gen();
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            std_dev,
            rng,
            cached: None,
        }
    }

    /// AWGN source calibrated against a unit-energy BPSK symbol stream
    ///
    /// Total noise power is `1/snr_linear` (Eb = 1). Half of that power is
    /// assigned to the in-phase branch, mirroring a complex channel whose
    /// quadrature half never reaches the detector. Changing this split would
    /// change the simulated/theoretical curve match.
    pub fn for_snr(snr_linear: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        let noise_variance = 1.0 / snr_linear;
        Self::new(noise_variance / 2.0, seed_rng)
    }

    /// Standard deviation of the generated samples
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Generate next Gaussian noise sample using Box-Muller transform
    pub fn next_sample(&mut self) -> f64 {
        // Return cached value if available
        if let Some(cached) = self.cached.take() {
            return cached * self.std_dev;
        }

        // Box-Muller transform generates two independent Gaussian samples
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let z0 = r * theta.cos();
        let z1 = r * theta.sin();

        // Cache second sample
        self.cached = Some(z1);

        z0 * self.std_dev
    }

    /// Corrupt a symbol stream: one independent noise sample per symbol
    pub fn add_to(&mut self, symbols: &[f64]) -> Vec<f64> {
        symbols.iter().map(|&s| s + self.next_sample()).collect()
    }
}
