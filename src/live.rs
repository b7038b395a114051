//! Lock-free signal parameters shared with a control surface.
//!
//! Frequency (tenths of a hertz) and amplitude (whole counts) are packed into
//! one `AtomicU32`, so a reader always sees both halves of the same update.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::signal::SignalParams;

const FREQ_SHIFT: u32 = 16;
const AMPL_MASK: u32 = 0xFFFF;

fn encode_frequency(frequency_hz: f64) -> u32 {
    libm::round(frequency_hz * 10.0).clamp(0.0, u16::MAX as f64) as u32
}

fn encode_amplitude(amplitude_counts: f64) -> u32 {
    libm::round(amplitude_counts).clamp(0.0, u16::MAX as f64) as u32
}

fn pack(params: &SignalParams) -> u32 {
    let freq = encode_frequency(params.frequency_hz);
    let ampl = encode_amplitude(params.amplitude_counts);
    (freq << FREQ_SHIFT) | ampl
}

fn unpack(bits: u32) -> SignalParams {
    SignalParams::new((bits >> FREQ_SHIFT) as f64 / 10.0, (bits & AMPL_MASK) as f64)
}

/// Signal parameters written by a UI thread and read once per tick.
///
/// Frequency is stored at 0.1 Hz resolution, amplitude at 1 count.
/// Out-of-representation values are clamped to `0..=6553.5` Hz and
/// `0..=65535` counts.
#[derive(Debug)]
pub struct LiveParams {
    bits: AtomicU32,
}

impl LiveParams {
    pub fn new(params: &SignalParams) -> Self {
        Self {
            bits: AtomicU32::new(pack(params)),
        }
    }

    /// Consistent copy of both values.
    pub fn snapshot(&self) -> SignalParams {
        unpack(self.bits.load(Ordering::Acquire))
    }

    /// Replace both values at once.
    pub fn set(&self, params: &SignalParams) {
        self.bits.store(pack(params), Ordering::Release);
        debug!(
            frequency_hz = params.frequency_hz,
            amplitude_counts = params.amplitude_counts,
            "signal parameters changed"
        );
    }

    pub fn set_frequency(&self, frequency_hz: f64) {
        let freq = encode_frequency(frequency_hz);
        self.update(|bits| (freq << FREQ_SHIFT) | (bits & AMPL_MASK));
        debug!(frequency_hz, "signal frequency changed");
    }

    pub fn set_amplitude(&self, amplitude_counts: f64) {
        let ampl = encode_amplitude(amplitude_counts);
        self.update(|bits| (bits & !AMPL_MASK) | ampl);
        debug!(amplitude_counts, "signal amplitude changed");
    }

    fn update(&self, f: impl Fn(u32) -> u32) {
        // Closure never returns None, so the update always succeeds
        let _ = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| Some(f(bits)));
    }
}

impl Default for LiveParams {
    fn default() -> Self {
        Self::new(&SignalParams::default())
    }
}

/// Latch allowing one run at a time.
#[derive(Debug, Default)]
pub struct RunGuard {
    running: AtomicBool,
}

impl RunGuard {
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
        }
    }

    /// Claim the guard. Returns `None` while another run holds it.
    pub fn try_start(&self) -> Option<RunLease<'_>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("signal emulation already running");
            return None;
        }
        Some(RunLease { guard: self })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Held for the duration of a run; releases the guard on drop.
#[derive(Debug)]
pub struct RunLease<'a> {
    guard: &'a RunGuard,
}

impl Drop for RunLease<'_> {
    fn drop(&mut self) {
        self.guard.running.store(false, Ordering::Release);
    }
}
