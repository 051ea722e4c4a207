//! Builder for constructing gate machines.

use crate::builder::error::BuildError;
use crate::config::{GateConfig, SecretCode};
use crate::gate::StageMachine;
use rand::rngs::StdRng;
use rand::Rng;

/// Builder for constructing gate machines with a fluent API.
///
/// # Example
///
/// ```
/// use stagegate::builder::GateBuilder;
/// use stagegate::gate::StagePhase;
///
/// let machine = GateBuilder::new().secret("123456").seed(7).build().unwrap();
/// assert_eq!(machine.phase(), StagePhase::Locked);
/// ```
#[derive(Debug, Default)]
pub struct GateBuilder {
    config: Option<GateConfig>,
    secret: Option<String>,
    seed: Option<u64>,
    reveal_message: Option<String>,
}

impl GateBuilder {
    /// Create a new builder with the default secret and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration. Later `.secret()` and `.seed()`
    /// calls override its fields.
    pub fn config(mut self, config: GateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the unlock code. Validated in `build()`.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Seed the tile shuffler for repeatable sessions.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Message revealed when the envelope is fully open.
    pub fn reveal_message(mut self, message: impl Into<String>) -> Self {
        self.reveal_message = Some(message.into());
        self
    }

    /// Resolve the final configuration, validating the secret.
    pub fn resolve(self) -> Result<GateConfig, BuildError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(raw) = self.secret {
            config.secret = SecretCode::parse(&raw)?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.reveal_message.is_some() {
            config.reveal_message = self.reveal_message;
        }
        Ok(config)
    }

    /// Build a machine whose RNG comes from the configuration.
    pub fn build(self) -> Result<StageMachine<StdRng>, BuildError> {
        let config = self.resolve()?;
        Ok(StageMachine::new(config))
    }

    /// Build a machine driven by a caller-supplied RNG.
    ///
    /// Fails if a seed was also configured, since it would be silently ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<StageMachine<R>, BuildError> {
        let config = self.resolve()?;
        if config.seed.is_some() {
            return Err(BuildError::SeedWithExplicitRng);
        }
        let machine = StageMachine::with_rng(config.secret, rng);
        Ok(match config.reveal_message {
            Some(message) => machine.with_reveal_message(message),
            None => machine,
        })
    }
}
