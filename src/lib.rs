//! BPSK over AWGN bit error rate simulator
//!
//! Monte-Carlo estimation of BPSK link performance, compared against the
//! closed-form theoretical curve. For each requested SNR point the estimator
//! generates random bits, maps them to ±1 symbols, adds calibrated Gaussian
//! noise, makes hard decisions at zero, and counts errors.
//!
//! The estimator returns plain data ([`BerPoint`] sequences); console
//! printing and plotting live in the binary so the core runs headless.

pub mod bpsk;
pub mod config;
pub mod estimator;
pub mod noise;
pub mod plot;
pub mod theory;

// Re-export core types for convenience
pub use bpsk::Bpsk;
pub use config::{ConfigError, SimConfig};
pub use estimator::BerPoint;
pub use noise::NoiseGenerator;
