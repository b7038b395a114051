//! Simulated ADC signal.
//!
//! A sinusoid biased to the middle of a 12-bit converter range.

use core::f64::consts::PI;

/// DC bias keeping the simulated signal inside the ADC range.
pub const OFFSET_COUNTS: i32 = 2048;

/// Resolution of the simulated converter.
pub const ADC_BITS: u32 = 12;

/// Largest code the simulated converter produces.
pub const ADC_MAX_COUNT: i32 = (1 << ADC_BITS) - 1;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Live signal parameters for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Sinusoid frequency, Hz
    pub frequency_hz: f64,
    /// Peak amplitude, ADC counts
    pub amplitude_counts: f64,
}

impl SignalParams {
    pub const fn new(frequency_hz: f64, amplitude_counts: f64) -> Self {
        Self {
            frequency_hz,
            amplitude_counts,
        }
    }
}

impl Default for SignalParams {
    fn default() -> Self {
        Self::new(50.0, 1000.0)
    }
}

/// Instantaneous signal value at `time_micros`, before quantization.
pub fn instantaneous(time_micros: u64, params: &SignalParams) -> f64 {
    let phase = 2.0 * PI * time_micros as f64 / MICROS_PER_SECOND * params.frequency_hz;
    params.amplitude_counts * libm::sin(phase) + OFFSET_COUNTS as f64
}

/// Simulated ADC reading at `time_micros`.
///
/// Truncates toward zero. No clamping to the converter range: keeping the
/// amplitude in range is up to the caller.
pub fn synthesize(time_micros: u64, params: &SignalParams) -> i32 {
    instantaneous(time_micros, params) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_is_offset() {
        let params = SignalParams::new(50.0, 1000.0);
        assert_eq!(synthesize(0, &params), OFFSET_COUNTS);
    }

    #[test]
    fn quarter_period_is_peak() {
        let params = SignalParams::new(50.0, 1000.0);
        let peak = synthesize(5_000, &params);
        assert!((3047..=3048).contains(&peak), "peak was {}", peak);
    }

    #[test]
    fn three_quarter_period_is_trough() {
        let params = SignalParams::new(50.0, 1000.0);
        let trough = synthesize(15_000, &params);
        assert!((1048..=1049).contains(&trough), "trough was {}", trough);
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let params = SignalParams::new(123.4, 0.0);
        for t in (0..100_000).step_by(100) {
            assert_eq!(synthesize(t, &params), OFFSET_COUNTS);
        }
    }

    #[test]
    fn adc_max_count() {
        assert_eq!(ADC_MAX_COUNT, 4095);
    }
}
