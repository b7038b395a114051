use crate::fixed::{Q16, shift_filter};

/// Single-pole low-pass stage with a compile-time shift strength.
///
/// The time constant is roughly `2^STRENGTH` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftFilter<const STRENGTH: u32> {
    acc: Q16,
}

impl<const STRENGTH: u32> ShiftFilter<STRENGTH> {
    const VALID_STRENGTH: () = assert!(
        STRENGTH >= 1 && STRENGTH <= 30,
        "ShiftFilter strength must be in range 1..=30"
    );

    /// Create a stage whose accumulator starts at `initial`.
    pub const fn new(initial: Q16) -> Self {
        let () = Self::VALID_STRENGTH;
        Self { acc: initial }
    }

    /// Feed one integer sample, returning the updated accumulator.
    #[inline]
    pub fn apply(&mut self, input: i32) -> Q16 {
        self.acc = shift_filter(self.acc, input, STRENGTH);
        self.acc
    }

    pub const fn value(&self) -> Q16 {
        self.acc
    }

    /// Reset filter state
    pub fn reset(&mut self, initial: Q16) {
        self.acc = initial;
    }
}
