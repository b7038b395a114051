#![no_std]

#[macro_use]
mod logging;

mod config;
mod engine;
mod state;
pub mod filters;
pub mod fixed;
pub mod signal;
pub mod sweep;

#[cfg(feature = "live-params")]
pub mod live;

#[cfg(feature = "trace")]
pub mod trace;

pub use config::{Config, ConfigError};
pub use engine::{Engine, SampleResult, compute_sample};
pub use state::FilterState;
pub use fixed::Q16;
pub use filters::FilterCascade;
pub use signal::{OFFSET_COUNTS, SignalParams};
pub use sweep::{ParamSource, SampleSink, Sweep, Tick, WindowStats};

#[cfg(feature = "live-params")]
pub use live::{LiveParams, RunGuard, RunLease};

#[cfg(feature = "trace")]
pub use trace::Trace;
