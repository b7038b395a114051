use crate::signal::SignalParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidFrequencyRange,
    InvalidAmplitudeRange,
    ZeroSamplePeriod,
    WindowNotAligned,
    ZeroDuration,
    FrequencyOutOfRange(f64),
    AmplitudeOutOfRange(f64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidFrequencyRange => {
                write!(f, "frequency_min_hz must be positive and less than frequency_max_hz")
            }
            ConfigError::InvalidAmplitudeRange => {
                write!(f, "amplitude_min must be non-negative and less than amplitude_max")
            }
            ConfigError::ZeroSamplePeriod => write!(f, "sample_period_us must be > 0"),
            ConfigError::WindowNotAligned => {
                write!(f, "window_us must be a positive multiple of sample_period_us")
            }
            ConfigError::ZeroDuration => write!(f, "run_duration_us must be > 0"),
            ConfigError::FrequencyOutOfRange(hz) => write!(f, "frequency {} Hz out of range", hz),
            ConfigError::AmplitudeOutOfRange(a) => write!(f, "amplitude {} out of range", a),
        }
    }
}

/// Run configuration: operator limits on the signal parameters and the
/// sampling timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub frequency_min_hz: f64,
    pub frequency_max_hz: f64,
    pub amplitude_min: f64,
    pub amplitude_max: f64,

    /// Time between ADC samples, µs
    pub sample_period_us: u64,
    /// Length of one display window, µs. Statistics restart at each window.
    pub window_us: u64,
    /// Total simulated time of one run, µs
    pub run_duration_us: u64,
    /// Reset the filter cascade at every window boundary
    pub reset_filter_on_wrap: bool,
}

impl Config {
    pub const DEFAULT: Config = Config {
        frequency_min_hz: 0.1,
        frequency_max_hz: 250.0,
        amplitude_min: 0.0,
        amplitude_max: 4096.0,
        sample_period_us: 100,
        window_us: 120_000,
        run_duration_us: 20_000_000,
        reset_filter_on_wrap: false,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons also reject NaN bounds
        if !(self.frequency_min_hz > 0.0 && self.frequency_min_hz < self.frequency_max_hz) {
            return Err(ConfigError::InvalidFrequencyRange);
        }

        if !(self.amplitude_min >= 0.0 && self.amplitude_min < self.amplitude_max) {
            return Err(ConfigError::InvalidAmplitudeRange);
        }

        if self.sample_period_us == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }

        if self.window_us == 0 || self.window_us % self.sample_period_us != 0 {
            return Err(ConfigError::WindowNotAligned);
        }

        if self.run_duration_us == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(())
    }

    /// Build signal parameters, rejecting values outside the configured limits.
    pub fn params(
        &self,
        frequency_hz: f64,
        amplitude_counts: f64,
    ) -> Result<SignalParams, ConfigError> {
        if !(frequency_hz >= self.frequency_min_hz && frequency_hz <= self.frequency_max_hz) {
            return Err(ConfigError::FrequencyOutOfRange(frequency_hz));
        }

        if !(amplitude_counts >= self.amplitude_min && amplitude_counts <= self.amplitude_max) {
            return Err(ConfigError::AmplitudeOutOfRange(amplitude_counts));
        }

        Ok(SignalParams::new(frequency_hz, amplitude_counts))
    }

    /// Number of ticks in one window.
    pub const fn samples_per_window(&self) -> u64 {
        self.window_us / self.sample_period_us
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
