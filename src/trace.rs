use heapless::Deque;

use crate::sweep::{SampleSink, Tick};

/// Most recent `N` ticks, oldest first.
///
/// Fixed capacity, no allocation. RAM cost: `N * size_of::<Tick>()`.
#[derive(Debug, Clone)]
pub struct Trace<const N: usize> {
    ticks: Deque<Tick, N>,
}

impl<const N: usize> Trace<N> {
    pub const fn new() -> Self {
        Self { ticks: Deque::new() }
    }

    /// Append a tick, dropping the oldest one when full.
    pub fn record(&mut self, tick: Tick) {
        if self.ticks.is_full() {
            self.ticks.pop_front();
        }
        // Cannot fail: a slot was freed above
        let _ = self.ticks.push_back(tick);
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn latest(&self) -> Option<&Tick> {
        self.ticks.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter()
    }

    /// Raw readings centred on zero, ready for plotting.
    pub fn centered_raw(&self) -> impl Iterator<Item = i32> + '_ {
        self.ticks.iter().map(|tick| tick.result.centered_raw())
    }

    pub fn smoothed(&self) -> impl Iterator<Item = i32> + '_ {
        self.ticks.iter().map(|tick| tick.result.smoothed_magnitude)
    }

    pub fn clear(&mut self) {
        self.ticks.clear();
    }
}

impl<const N: usize> Default for Trace<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleSink for Trace<N> {
    fn push(&mut self, tick: &Tick) {
        self.record(*tick);
    }
}
