//! Q16 fixed-point arithmetic.
//!
//! Values carry 16 fractional bits. Storage is 64 bits wide so any `i32`
//! reading can be scaled up without overflow; for readings inside the ADC
//! range every result matches a 32-bit implementation bit for bit. Gaps
//! wider than the `i32` range saturate when de-scaled.

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 16;

/// Fixed-point value with 16 fractional bits (`raw / 65536`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Q16(i64);

impl Q16 {
    pub const ZERO: Q16 = Q16(0);

    /// Wrap an already-scaled raw value.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Scale an integer up by `2^16`.
    pub const fn from_int(value: i32) -> Self {
        Self((value as i64) << FRAC_BITS)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_int(self) -> i32 {
        (self.0 >> FRAC_BITS) as i32
    }

    /// `|self - other|` de-scaled to an integer, saturating at `i32::MAX`.
    pub const fn abs_diff_int(self, other: Q16) -> i32 {
        let diff = self.0.abs_diff(other.0) >> FRAC_BITS;
        if diff > i32::MAX as u64 { i32::MAX } else { diff as i32 }
    }
}

/// One step of a single-pole low-pass filter in Q16.
///
/// `acc + ceil(((input << 16) - acc) / 2^strength)`
///
/// The right shift is arithmetic (floor), so the `2^strength - 1` bias turns
/// it into a ceiling division for both signs of `delta`. Larger `strength`
/// means a longer time constant.
#[inline]
pub const fn shift_filter(acc: Q16, input: i32, strength: u32) -> Q16 {
    let delta = Q16::from_int(input).0 - acc.0;
    let rounding = (1_i64 << strength) - 1;
    Q16(acc.0 + ((delta + rounding) >> strength))
}
