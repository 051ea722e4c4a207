//! Checkpoint and resume for gate sessions.
//!
//! A checkpoint captures the full [`GateState`], the phase history and some
//! bookkeeping. The RNG is not captured; a resumed machine reseeds from the
//! configuration it is given, so only future shuffles differ.
//!
//! # Example
//!
//! ```rust
//! use stagegate::builder::GateBuilder;
//! use stagegate::checkpoint::Checkpoint;
//! use stagegate::config::GateConfig;
//! use stagegate::gate::{GateEvent, StageMachine};
//!
//! let mut machine = GateBuilder::new().seed(3).build().unwrap();
//! machine.dispatch(GateEvent::DigitPressed('4'));
//!
//! let json = machine.checkpoint().to_json().unwrap();
//! let restored = Checkpoint::from_json(&json).unwrap();
//! let resumed = StageMachine::resume(restored, GateConfig::default()).unwrap();
//!
//! assert_eq!(resumed.snapshot().code_len, 1);
//! ```

use crate::config::{GateConfig, SecretCode};
use crate::core::StateHistory;
use crate::gate::{GateState, StageMachine, StagePhase};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Bookkeeping kept alongside a session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the session started
    pub created_at: DateTime<Utc>,

    /// When the last event arrived
    pub updated_at: DateTime<Utc>,

    /// Events dispatched, including ignored ones
    pub events_processed: usize,

    /// Dispatch count per event name
    pub event_counts: HashMap<String, usize>,
}

impl MachineMetadata {
    pub(crate) fn record_event(&mut self, name: &str) {
        self.updated_at = Utc::now();
        self.events_processed += 1;
        *self.event_counts.entry(name.to_string()).or_insert(0) += 1;
    }
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            events_processed: 0,
            event_counts: HashMap::new(),
        }
    }
}

/// Serializable snapshot of a whole session.
///
/// Holds no secret and no RNG; those come from the config on resume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Session state at checkpoint time
    pub state: GateState,

    /// Phase transitions so far
    pub history: StateHistory<StagePhase>,

    /// Session bookkeeping
    pub metadata: MachineMetadata,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check version and cross-field consistency.
    ///
    /// Field-level invariants (tile permutation, code length) are already
    /// enforced while decoding.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut problems: Vec<String> = self
            .state
            .inconsistencies()
            .into_iter()
            .map(String::from)
            .collect();

        let last_phase = self
            .history
            .last()
            .map(|t| t.to)
            .unwrap_or(StagePhase::Locked);
        if last_phase != self.state.phase() {
            problems.push(format!(
                "history ends in {last_phase:?} but state is {:?}",
                self.state.phase()
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CheckpointError::Inconsistent(problems))
        }
    }
}

impl<R: Rng> StageMachine<R> {
    /// Capture the current session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.state().clone(),
            history: self.history().clone(),
            metadata: self.metadata().clone(),
        }
    }

    /// Restore a session with a caller-supplied RNG.
    pub fn resume_with_rng(
        checkpoint: Checkpoint,
        secret: SecretCode,
        rng: R,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        log::debug!(
            "resuming checkpoint {} in phase {:?}",
            checkpoint.id,
            checkpoint.state.phase()
        );
        Ok(Self::from_parts(
            secret,
            checkpoint.state,
            checkpoint.history,
            checkpoint.metadata,
            rng,
        ))
    }
}

impl StageMachine<StdRng> {
    /// Restore a session using the secret and RNG seeding from `config`.
    pub fn resume(checkpoint: Checkpoint, config: GateConfig) -> Result<Self, CheckpointError> {
        let rng = config.rng();
        let machine = Self::resume_with_rng(checkpoint, config.secret, rng)?;
        Ok(match config.reveal_message {
            Some(message) => machine.with_reveal_message(message),
            None => machine,
        })
    }
}
