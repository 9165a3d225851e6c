/*!
 * Simulator Configuration
 * Defaults with environment overrides
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_CAPACITY, DEFAULT_PROMPT, ENV_CAPACITY, ENV_ECHO, ENV_PROMPT};
use crate::core::types::Size;
use serde::{Deserialize, Serialize};

/// Runtime configuration for a simulation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    /// Number of addressable units
    pub capacity: Size,
    /// Prompt printed before each interactive command
    pub prompt: String,
    /// Echo each normalized interactive line back to the output
    pub echo: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prompt: DEFAULT_PROMPT.to_string(),
            echo: true,
        }
    }
}

impl SimConfig {
    /// Load configuration from `MEMSIM_*` environment variables
    ///
    /// Environment variables:
    /// - MEMSIM_CAPACITY: address space size (default: 80)
    /// - MEMSIM_PROMPT: interactive prompt (default: "command>")
    /// - MEMSIM_ECHO: echo input lines, `1`/`true` or `0`/`false` (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CAPACITY) {
            config.capacity = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: ENV_CAPACITY.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(ENV_PROMPT) {
            config.prompt = value;
        }

        if let Some(value) = lookup(ENV_ECHO) {
            config.echo = parse_flag(ENV_ECHO, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_capacity(mut self, capacity: Size) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
