//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is the builder-input for constructing a
//! [`Driver`](crate::driver::Driver). [`validate()`](DriverConfig::validate)
//! checks its invariants once at startup.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `tick_interval` is zero.
    ZeroTickInterval,
    /// `frame_interval` is zero.
    ZeroFrameInterval,
    /// Frames are polled less often than generations are due, so the
    /// configured tick interval could never be honoured.
    FrameSlowerThanTick {
        /// Configured frame interval.
        frame: Duration,
        /// Configured tick interval.
        tick: Duration,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickInterval => write!(f, "tick_interval must be non-zero"),
            Self::ZeroFrameInterval => write!(f, "frame_interval must be non-zero"),
            Self::FrameSlowerThanTick { frame, tick } => write!(
                f,
                "frame_interval {frame:?} exceeds tick_interval {tick:?}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── DriverConfig ───────────────────────────────────────────────────

/// Timing configuration for the generation loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Minimum wall-clock time between two generations. Frames that arrive
    /// sooner are no-ops. Default: 250 ms.
    pub tick_interval: Duration,
    /// Poll interval of [`ThreadScheduler`](crate::scheduler::ThreadScheduler),
    /// standing in for the display refresh rate. Default: 16 ms.
    pub frame_interval: Duration,
}

impl DriverConfig {
    /// Default minimum time between generations.
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

    /// Default frame poll interval (roughly 60 Hz).
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if self.frame_interval > self.tick_interval {
            return Err(ConfigError::FrameSlowerThanTick {
                frame: self.frame_interval,
                tick: self.tick_interval,
            });
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DriverConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_intervals_rejected() {
        let config = DriverConfig {
            tick_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));

        let config = DriverConfig {
            frame_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));
    }

    #[test]
    fn frame_slower_than_tick_rejected() {
        let config = DriverConfig {
            tick_interval: Duration::from_millis(100),
            frame_interval: Duration::from_millis(200),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrameSlowerThanTick { .. })
        ));
    }

    #[test]
    fn equal_intervals_allowed() {
        let config = DriverConfig {
            tick_interval: Duration::from_millis(100),
            frame_interval: Duration::from_millis(100),
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
