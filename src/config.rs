//! Search configuration.
//!
//! [`SaConfig`] holds the simulated-annealing schedule. It deserializes
//! with per-field defaults, so a partial JSON/TOML document only needs the
//! values it overrides.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated annealing parameters.
///
/// The search stops when either `max_iterations` is reached or the
/// temperature falls to `min_temperature`. With the defaults the
/// temperature bound hits first, after roughly 23 000 iterations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Multiplicative cooling factor per iteration, in (0, 1).
    pub cooling_rate: f64,
    /// Stop once the temperature is at or below this value.
    pub min_temperature: f64,
    /// Hard cap on iterations.
    pub max_iterations: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.9995,
            min_temperature: 0.01,
            max_iterations: 500_000,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t0: f64) -> Self {
        self.initial_temperature = t0;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t_min: f64) -> Self {
        self.min_temperature = t_min;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the schedule terminates and actually cools.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        if !self.min_temperature.is_finite()
            || self.min_temperature < 0.0
            || self.min_temperature >= self.initial_temperature
        {
            return Err(ConfigError::MinTemperature {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

/// Rejected search configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InitialTemperature(f64),
    CoolingRate(f64),
    MinTemperature { min: f64, initial: f64 },
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InitialTemperature(t) => {
                write!(f, "initial temperature must be finite and positive, got {t}")
            }
            ConfigError::CoolingRate(r) => {
                write!(f, "cooling rate must lie strictly between 0 and 1, got {r}")
            }
            ConfigError::MinTemperature { min, initial } => write!(
                f,
                "min temperature must be finite, non-negative and below the initial temperature {initial}, got {min}"
            ),
            ConfigError::ZeroIterations => write!(f, "max iterations must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
