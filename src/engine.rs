use crate::filters::FilterCascade;
use crate::signal::{OFFSET_COUNTS, SignalParams, synthesize};
use crate::state::FilterState;

/// Output of one sampling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleResult {
    /// Simulated ADC reading, offset by the DC bias
    pub raw_sample: i32,
    /// Once-filtered rectified magnitude
    pub rectified_magnitude: i32,
    /// Twice-filtered magnitude, the RMS-like display value
    pub smoothed_magnitude: i32,
}

impl SampleResult {
    /// Raw reading with the DC bias removed, for plotting around zero.
    ///
    /// Saturates for readings that were themselves clamped to the `i32` range.
    pub const fn centered_raw(&self) -> i32 {
        self.raw_sample.saturating_sub(OFFSET_COUNTS)
    }
}

/// Advance the filter state by one tick.
///
/// Pure: the same state and inputs always give the same result. Inputs are
/// not range-checked; out-of-range values yield well-defined but
/// meaningless output.
pub fn compute_sample(
    state: FilterState,
    time_micros: u64,
    frequency_hz: f64,
    amplitude_counts: f64,
) -> (SampleResult, FilterState) {
    let raw_sample = synthesize(time_micros, &SignalParams::new(frequency_hz, amplitude_counts));

    let mut cascade = FilterCascade::from_state(state);
    let magnitudes = cascade.process(raw_sample);

    let result = SampleResult {
        raw_sample,
        rectified_magnitude: magnitudes.rectified,
        smoothed_magnitude: magnitudes.smoothed,
    };
    (result, cascade.state())
}

/// A running engine instance owning its filter state.
///
/// Calls must be serialized; wrap in a mutex to share between threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Engine {
    state: FilterState,
}

impl Engine {
    pub const fn new() -> Self {
        Self {
            state: FilterState::INITIAL,
        }
    }

    pub const fn with_state(state: FilterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn update(&mut self, time_micros: u64, params: &SignalParams) -> SampleResult {
        let (result, next) = compute_sample(
            self.state,
            time_micros,
            params.frequency_hz,
            params.amplitude_counts,
        );
        self.state = next;
        result
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
