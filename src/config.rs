//! Simulation configuration and up-front validation

use thiserror::Error;

/// Rejected configuration, reported before any simulation work begins
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// bits_per_point must be at least 1
    #[error("bits_per_point must be positive")]
    ZeroBits,

    /// snr_db_values must contain at least one entry
    #[error("snr_db_values must not be empty")]
    EmptySweep,
}

/// Parameters for one BER sweep
///
/// `bits_per_point` bits are drawn fresh for every SNR value; the SNR values
/// are processed in the order given and results come back in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of random bits simulated per SNR point
    pub bits_per_point: u64,

    /// Eb/No values in dB, one simulation point each
    pub snr_db_values: Vec<f64>,
}

impl SimConfig {
    pub fn new(bits_per_point: u64, snr_db_values: Vec<f64>) -> Self {
        Self {
            bits_per_point,
            snr_db_values,
        }
    }

    /// Evenly spaced sweep: `count` SNR values starting at `first_snr_db`
    /// advancing by `step_db`
    pub fn sweep(bits_per_point: u64, first_snr_db: f64, step_db: f64, count: u32) -> Self {
        let snr_db_values = (0..count)
            .map(|n| first_snr_db + step_db * f64::from(n))
            .collect();
        Self {
            bits_per_point,
            snr_db_values,
        }
    }

    /// Check invariants: at least one bit per point, at least one SNR value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bits_per_point == 0 {
            return Err(ConfigError::ZeroBits);
        }
        if self.snr_db_values.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// 100 000 bits per point over 0–12 dB in 2 dB steps
    fn default() -> Self {
        Self::sweep(100_000, 0.0, 2.0, 7)
    }
}
