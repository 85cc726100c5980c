// config.rs - Construction-time parameters of a world

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chunk edge used when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: u32 = 64;
/// Generations between stabilization passes.
pub const DEFAULT_STABILIZE_EVERY: u64 = 50;

/// Errors that can occur when constructing a world.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Static configuration of a world. Fixed for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Width of every cluster, in cells.
    pub chunk_width: u32,
    /// Height of every cluster, in cells.
    pub chunk_height: u32,
    /// Run the stabilization pass once every this many generations.
    pub stabilize_every: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            chunk_width: DEFAULT_CHUNK_SIZE,
            chunk_height: DEFAULT_CHUNK_SIZE,
            stabilize_every: DEFAULT_STABILIZE_EVERY,
        }
    }
}

impl LifeConfig {
    /// Square chunks of `size` cells per side, default cadence.
    pub fn square(size: u32) -> Self {
        Self {
            chunk_width: size,
            chunk_height: size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.chunk_width == 0 {
            return Err(LifeError::InvalidConfig("chunk_width must be positive"));
        }
        if self.chunk_height == 0 {
            return Err(LifeError::InvalidConfig("chunk_height must be positive"));
        }
        if self.stabilize_every == 0 {
            return Err(LifeError::InvalidConfig("stabilize_every must be positive"));
        }
        Ok(())
    }
}
