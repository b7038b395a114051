/// Fixed-point filter stages
///
/// All filtering happens on Q16 accumulators. The cascade topology is fixed:
/// a fast and a slow tracker of the raw reading, a rectifier, and two
/// smoothing stages on the rectified magnitude.
mod cascade;
mod shift;

pub use cascade::{FilterCascade, Magnitudes};
pub use shift::ShiftFilter;

/// Strength of the near pass-through tracker of the raw reading.
pub const FAST_TRACK_STRENGTH: u32 = 1;

/// Strength of the long-run mean tracker (DC component).
pub const SLOW_TRACK_STRENGTH: u32 = 16;

/// Strength of both rectified-magnitude smoothing stages.
pub const RECTIFIED_STRENGTH: u32 = 8;
