//! Generator configuration
//!
//! Describes how a caller wants its generators seeded and partitioned, so a
//! run can be reproduced from a small JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{streams, Xoroshiro128Plus, DEFAULT_SEED};

/// Upper bound on streams built from one config
pub const MAX_STREAMS: usize = 1 << 16;

/// Configuration validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("streams must be > 0")]
    NoStreams,

    #[error("Requested {requested} streams, maximum is {max}")]
    TooManyStreams { requested: usize, max: usize },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Seeding configuration
///
/// # Example
/// ```
/// use xoroshiro128p::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{"seed": 7, "streams": 4}"#).unwrap();
/// let rngs = config.build().unwrap();
/// assert_eq!(rngs.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// RNG seed for deterministic output
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of non-overlapping streams to build
    #[serde(default = "default_streams")]
    pub streams: usize,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_streams() -> usize {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            streams: default_streams(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streams == 0 {
            log::warn!("generator config requests zero streams");
            return Err(ConfigError::NoStreams);
        }

        if self.streams > MAX_STREAMS {
            log::warn!(
                "generator config requests {} streams (max {})",
                self.streams,
                MAX_STREAMS
            );
            return Err(ConfigError::TooManyStreams {
                requested: self.streams,
                max: MAX_STREAMS,
            });
        }

        Ok(())
    }

    /// Validate, then build one generator per stream
    pub fn build(&self) -> Result<Vec<Xoroshiro128Plus>, ConfigError> {
        self.validate()?;
        Ok(streams(self.seed, self.streams))
    }
}
