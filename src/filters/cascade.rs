use num_traits::AsPrimitive;

use super::{FAST_TRACK_STRENGTH, RECTIFIED_STRENGTH, SLOW_TRACK_STRENGTH, ShiftFilter};
use crate::state::FilterState;

/// Magnitude outputs of one cascade step, de-scaled to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitudes {
    /// `|fast - slow|` before any smoothing.
    pub rectified_input: i32,
    /// First smoothing stage.
    pub rectified: i32,
    /// Second smoothing stage, the RMS-like estimate.
    pub smoothed: i32,
}

/// Rectifier and RMS-like detector over integer ADC readings.
///
/// Owns its state exclusively; clone it to fork a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCascade {
    fast_track: ShiftFilter<FAST_TRACK_STRENGTH>,
    slow_track: ShiftFilter<SLOW_TRACK_STRENGTH>,
    rectified_stage1: ShiftFilter<RECTIFIED_STRENGTH>,
    rectified_stage2: ShiftFilter<RECTIFIED_STRENGTH>,
}

impl FilterCascade {
    pub const fn new() -> Self {
        Self::from_state(FilterState::INITIAL)
    }

    pub const fn from_state(state: FilterState) -> Self {
        Self {
            fast_track: ShiftFilter::new(state.fast_track),
            slow_track: ShiftFilter::new(state.slow_track),
            rectified_stage1: ShiftFilter::new(state.rectified_stage1),
            rectified_stage2: ShiftFilter::new(state.rectified_stage2),
        }
    }

    pub const fn state(&self) -> FilterState {
        FilterState {
            fast_track: self.fast_track.value(),
            slow_track: self.slow_track.value(),
            rectified_stage1: self.rectified_stage1.value(),
            rectified_stage2: self.rectified_stage2.value(),
        }
    }

    /// Advance every stage by one reading.
    ///
    /// Accepts any primitive the reading arrives as (`u16` register value,
    /// `i32` simulated sample, ...).
    pub fn process<S>(&mut self, raw: S) -> Magnitudes
    where
        S: AsPrimitive<i32>,
    {
        let raw: i32 = raw.as_();

        let fast = self.fast_track.apply(raw);
        let mean = self.slow_track.apply(raw);

        // Full-wave rectification around the tracked mean
        let rectified_input = fast.abs_diff_int(mean);

        let stage1 = self.rectified_stage1.apply(rectified_input);
        let stage2 = self.rectified_stage2.apply(stage1.to_int());

        Magnitudes {
            rectified_input,
            rectified: stage1.to_int(),
            smoothed: stage2.to_int(),
        }
    }

    /// Return every stage to its construction-time value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FilterCascade {
    fn default() -> Self {
        Self::new()
    }
}
