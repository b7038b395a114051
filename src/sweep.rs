//! Sampling loop driver.
//!
//! Steps simulated time at a fixed period, feeds the engine one tick at a
//! time and tracks per-window statistics of the RMS-like output.

use crate::config::{Config, ConfigError};
use crate::engine::{Engine, SampleResult};
use crate::signal::SignalParams;

/// Source of the signal parameters, read once per tick.
pub trait ParamSource {
    fn snapshot(&self) -> SignalParams;
}

impl ParamSource for SignalParams {
    fn snapshot(&self) -> SignalParams {
        *self
    }
}

#[cfg(feature = "live-params")]
impl ParamSource for crate::live::LiveParams {
    fn snapshot(&self) -> SignalParams {
        crate::live::LiveParams::snapshot(self)
    }
}

/// Consumer of ticks (plot, display, recorder).
pub trait SampleSink {
    fn push(&mut self, tick: &Tick);
}

impl<F> SampleSink for F
where
    F: FnMut(&Tick),
{
    fn push(&mut self, tick: &Tick) {
        self(tick)
    }
}

/// Min/max of the smoothed magnitude within the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStats {
    min: i32,
    max: i32,
    current: i32,
    count: u64,
}

impl WindowStats {
    pub const fn new() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
            current: 0,
            count: 0,
        }
    }

    pub fn record(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.current = value;
        self.count += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn min(&self) -> Option<i32> {
        if self.is_empty() { None } else { Some(self.min) }
    }

    pub const fn max(&self) -> Option<i32> {
        if self.is_empty() { None } else { Some(self.max) }
    }

    /// Most recent value recorded.
    pub const fn current(&self) -> Option<i32> {
        if self.is_empty() { None } else { Some(self.current) }
    }

    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl Default for WindowStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One step of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub time_micros: u64,
    /// Index of the display window this tick falls in
    pub window: u64,
    /// Position inside the window, in samples
    pub bin: u64,
    pub result: SampleResult,
    /// Statistics including this tick
    pub stats: WindowStats,
}

/// Fixed-step sampling run over `0..run_duration_us`.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: Config,
    engine: Engine,
    time_micros: u64,
    stats: WindowStats,
}

impl Sweep {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected sweep configuration");
            return Err(err);
        }

        Ok(Self {
            config,
            engine: Engine::new(),
            time_micros: 0,
            stats: WindowStats::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Simulated time of the next tick.
    pub fn time_micros(&self) -> u64 {
        self.time_micros
    }

    pub fn stats(&self) -> &WindowStats {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.time_micros >= self.config.run_duration_us
    }

    /// Advance one sample period. Returns `None` once the run is over.
    pub fn tick<P>(&mut self, source: &P) -> Option<Tick>
    where
        P: ParamSource + ?Sized,
    {
        if self.is_finished() {
            return None;
        }

        let time_micros = self.time_micros;
        let offset = time_micros % self.config.window_us;
        if offset == 0 {
            self.start_window();
        }

        let params = source.snapshot();
        let result = self.engine.update(time_micros, &params);
        self.stats.record(result.smoothed_magnitude);

        self.time_micros += self.config.sample_period_us;

        Some(Tick {
            time_micros,
            window: time_micros / self.config.window_us,
            bin: offset / self.config.sample_period_us,
            result,
            stats: self.stats,
        })
    }

    /// Drive the rest of the run into `sink`, returning the last tick.
    pub fn run<P, S>(&mut self, source: &P, sink: &mut S) -> Option<Tick>
    where
        P: ParamSource + ?Sized,
        S: SampleSink + ?Sized,
    {
        let mut last = None;
        while let Some(tick) = self.tick(source) {
            sink.push(&tick);
            last = Some(tick);
        }
        last
    }

    /// Rewind to time zero with a fresh filter state.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.time_micros = 0;
        self.stats.reset();
    }

    fn start_window(&mut self) {
        self.stats.reset();
        if self.config.reset_filter_on_wrap {
            self.engine.reset();
        }
        debug!(
            time_micros = self.time_micros,
            reset_filter = self.config.reset_filter_on_wrap,
            "display window started"
        );
    }
}
