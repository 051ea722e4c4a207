//! Build errors for gate machines.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a gate machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid gate configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("A seed was set but an explicit RNG was supplied. Use .seed() or build_with_rng(), not both")]
    SeedWithExplicitRng,
}
