//! Per-SNR Monte-Carlo BER estimation loop
//!
//! Each SNR point is independent: fresh bits, fresh noise stream, one
//! [`BerPoint`] out. The caller owns the seed RNG, so a fixed seed gives a
//! fully reproducible sweep.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::bpsk::Bpsk;
use crate::config::{ConfigError, SimConfig};
use crate::noise::NoiseGenerator;
use crate::theory;

/// Simulation outcome for one SNR value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerPoint {
    /// Eb/No in dB
    pub snr_db: f64,

    /// Measured error fraction, in [0, 1]
    pub simulated_ber: f64,

    /// Closed-form BPSK error probability at the same SNR
    pub theoretical_ber: f64,
}

/// Run the full sweep, one [`BerPoint`] per configured SNR value, in input
/// order
///
/// Validates the config before touching the RNG; an invalid config produces
/// no partial output.
pub fn run(config: &SimConfig, rng: &mut ChaCha8Rng) -> Result<Vec<BerPoint>, ConfigError> {
    config.validate()?;

    info!(
        points = config.snr_db_values.len(),
        bits_per_point = config.bits_per_point,
        "starting BPSK over AWGN BER sweep"
    );

    let mut results = Vec::with_capacity(config.snr_db_values.len());
    for &snr_db in &config.snr_db_values {
        let point = simulate_point(snr_db, config.bits_per_point, rng);
        debug!(
            snr_db,
            simulated_ber = point.simulated_ber,
            theoretical_ber = point.theoretical_ber,
            "point complete"
        );
        results.push(point);
    }
    Ok(results)
}

/// Simulate a single SNR point: generate, modulate, corrupt, detect, count
pub fn simulate_point(snr_db: f64, bits_per_point: u64, rng: &mut ChaCha8Rng) -> BerPoint {
    let snr_linear = theory::db_to_linear(snr_db);
    let bpsk = Bpsk;

    let bits: Vec<u8> = (0..bits_per_point).map(|_| rng.gen_range(0..=1)).collect();
    let symbols = bpsk.modulate(&bits);

    let mut noise = NoiseGenerator::for_snr(snr_linear, rng);
    let received = noise.add_to(&symbols);

    let detected = bpsk.detect(&received);
    let errors = bits
        .iter()
        .zip(detected.iter())
        .filter(|(tx, rx)| tx != rx)
        .count() as u64;

    BerPoint {
        snr_db,
        simulated_ber: errors as f64 / bits_per_point as f64,
        theoretical_ber: theory::bpsk_ber(snr_linear),
    }
}
