//! BPSK symbol mapping (1 bit per symbol)
//!
//! Bit 0 → -1.0
//! Bit 1 → +1.0
//!
//! Real-valued antipodal signaling on the in-phase axis, unit bit energy.
//! Detection is a hard decision at the zero threshold.

/// Binary Phase Shift Keying mapper with hard-decision detection
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpsk;

impl Bpsk {
    /// Map a bit to its antipodal symbol: `2*bit - 1`
    pub fn bit_to_symbol(&self, bit: u8) -> f64 {
        2.0 * f64::from(bit & 0x01) - 1.0
    }

    /// Decide the transmitted bit from a (possibly noisy) symbol
    ///
    /// Values above zero decode as 1, everything else as 0.
    pub fn symbol_to_bit(&self, value: f64) -> u8 {
        if value > 0.0 {
            1
        } else {
            0
        }
    }

    /// Modulate a bit stream into ±1 symbols
    pub fn modulate(&self, bits: &[u8]) -> Vec<f64> {
        bits.iter().map(|&b| self.bit_to_symbol(b)).collect()
    }

    /// Hard-decision demodulation of a received symbol stream
    pub fn detect(&self, received: &[f64]) -> Vec<u8> {
        received.iter().map(|&x| self.symbol_to_bit(x)).collect()
    }
}
