use crate::fixed::Q16;
use crate::signal::OFFSET_COUNTS;

/// Persistent accumulators of the filter cascade.
///
/// All four values keep their 16 fractional bits between calls; only the
/// engine's returned integers are de-scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterState {
    /// Light smoothing (strength 1) of the instantaneous reading
    pub fast_track: Q16,
    /// Long-term mean (strength 16), approximates the DC bias
    pub slow_track: Q16,
    /// First smoothing (strength 8) of `|fast_track - slow_track|`
    pub rectified_stage1: Q16,
    /// Second smoothing (strength 8), the reported magnitude
    pub rectified_stage2: Q16,
}

impl FilterState {
    /// Construction-time values: both trackers at the ADC midpoint.
    pub const INITIAL: FilterState = FilterState {
        fast_track: Q16::from_int(OFFSET_COUNTS),
        slow_track: Q16::from_int(OFFSET_COUNTS),
        rectified_stage1: Q16::ZERO,
        rectified_stage2: Q16::ZERO,
    };

    pub const fn initial() -> Self {
        Self::INITIAL
    }

    /// Return to the construction-time values.
    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::INITIAL
    }
}
