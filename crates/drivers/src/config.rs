// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Demo Configuration
//!
//! This module provides configuration for the loop drivers.
//!
//! ## Configuration Structure
//!
//! The demo configuration includes:
//! - Number of lookups per driver run
//! - Simulated latency (base delay and time unit)
//! - Jitter toggle and radius
//! - Optional seed for reproducible runs
//! - Pause demonstration settings
//!
//! ## Example
//!
//! ```rust,ignore
//! use await_loops_drivers::DemoConfig;
//!
//! let config = DemoConfig {
//!     count: 10,
//!     jitter: true,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use await_loops_directory::{
    DEFAULT_BASE_DELAY_UNITS, DEFAULT_JITTER_RADIUS, LatencyProfile, LookupError, checked_count,
};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

use crate::pause::pause_duration;

/// Key of the settings object inside a JSON settings document
pub const SETTINGS_SECTION: &str = "awaitLoops";

/// Main demo configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Lookups per driver run
    pub count: usize,

    /// Perturb each lookup's delay
    pub jitter: bool,

    /// Largest jitter offset, in time units
    pub jitter_radius: u32,

    /// Lookup delay before jitter, in time units
    pub base_delay_units: u32,

    /// Length of one time unit in milliseconds
    pub time_unit_ms: u64,

    /// Seed for index selection and jitter; random when unset
    pub seed: Option<u64>,

    /// Pauses in the pause demonstration
    pub pause_iterations: usize,

    /// Length of each pause in seconds
    pub pause_seconds: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 5,
            jitter: false,
            jitter_radius: DEFAULT_JITTER_RADIUS,
            base_delay_units: DEFAULT_BASE_DELAY_UNITS,
            time_unit_ms: 1000,
            seed: None,
            pause_iterations: 3,
            pause_seconds: 1.0,
        }
    }
}

impl DemoConfig {
    /// Validate the configuration
    ///
    /// Checks that:
    /// - The time unit is non-zero
    /// - The jitter radius does not exceed the base delay
    /// - The longest jittered delay fits in a `Duration`
    /// - The pause length is a valid duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_unit_ms == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "timeUnitMs",
                reason: "must be > 0".to_string(),
            });
        }

        if self.jitter_radius > self.base_delay_units {
            return Err(ConfigError::InvalidSetting {
                key: "jitterRadius",
                reason: format!(
                    "radius {} exceeds base delay of {} units",
                    self.jitter_radius, self.base_delay_units
                ),
            });
        }

        if self.latency().max_delay(self.jitter_radius).is_none() {
            return Err(ConfigError::InvalidSetting {
                key: "timeUnitMs",
                reason: format!(
                    "{} ms x {} units overflows the lookup delay",
                    self.time_unit_ms,
                    u64::from(self.base_delay_units) + u64::from(self.jitter_radius)
                ),
            });
        }

        pause_duration(self.pause_seconds)?;
        Ok(())
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    pub fn latency(&self) -> LatencyProfile {
        LatencyProfile::new(self.base_delay_units, self.time_unit())
    }

    /// Parse a config from a settings document
    ///
    /// Expected shape, every key optional:
    /// {
    ///   "awaitLoops": {
    ///     "count": 5,
    ///     "jitter": false,
    ///     "jitterRadius": 1,
    ///     "baseDelayUnits": 3,
    ///     "timeUnitMs": 1000,
    ///     "seed": 42,
    ///     "pauseIterations": 3,
    ///     "pauseSeconds": 1.0
    ///   }
    /// }
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let section = settings
            .get(SETTINGS_SECTION)
            .ok_or(ConfigError::MissingSection)?;
        let mut config = Self::default();

        if let Some(count) = section.get("count") {
            let raw = count.as_i64().ok_or_else(|| expected("count", "an integer"))?;
            config.count = checked_count(raw)?;
        }
        if let Some(jitter) = section.get("jitter") {
            config.jitter = jitter
                .as_bool()
                .ok_or_else(|| expected("jitter", "a boolean"))?;
        }
        if let Some(radius) = section.get("jitterRadius") {
            config.jitter_radius = as_u32(radius, "jitterRadius")?;
        }
        if let Some(base) = section.get("baseDelayUnits") {
            config.base_delay_units = as_u32(base, "baseDelayUnits")?;
        }
        if let Some(unit) = section.get("timeUnitMs") {
            config.time_unit_ms = unit
                .as_u64()
                .ok_or_else(|| expected("timeUnitMs", "a non-negative integer"))?;
        }
        match section.get("seed") {
            None | Some(Value::Null) => {}
            Some(seed) => {
                config.seed = Some(
                    seed.as_u64()
                        .ok_or_else(|| expected("seed", "a non-negative integer"))?,
                );
            }
        }
        if let Some(iterations) = section.get("pauseIterations") {
            let raw = iterations
                .as_i64()
                .ok_or_else(|| expected("pauseIterations", "an integer"))?;
            config.pause_iterations = checked_count(raw)?;
        }
        if let Some(seconds) = section.get("pauseSeconds") {
            config.pause_seconds = seconds
                .as_f64()
                .ok_or_else(|| expected("pauseSeconds", "a number"))?;
        }

        Ok(config)
    }

    /// Read and parse a JSON settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Value = serde_json::from_str(&contents)?;
        Self::from_settings(&settings)
    }
}

fn expected(key: &'static str, what: &str) -> ConfigError {
    ConfigError::InvalidSetting {
        key,
        reason: format!("expected {what}"),
    }
}

fn as_u32(value: &Value, key: &'static str) -> Result<u32, ConfigError> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| expected(key, "a non-negative 32-bit integer"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings document has no `awaitLoops` object
    #[error("Settings are missing the 'awaitLoops' section")]
    MissingSection,

    /// A setting has the wrong type or an unusable value
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// Settings file could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Negative count or duration
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
