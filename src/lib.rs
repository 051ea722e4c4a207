//! Stagegate: a pure state machine for a three-stage gate
//!
//! A session starts behind a six-digit passcode. The right code unlocks a
//! nine-tile puzzle, and solving the puzzle unlocks a message revealed one
//! tap at a time.
//!
//! The crate is the logic only. All state lives in one serializable record
//! owned by [`StageMachine`], and it changes only through [`GateEvent`]s.
//! Rendering, assets and input devices belong to whatever drives it.
//!
//! # Core Concepts
//!
//! - **Phases**: `Locked → PuzzleActive → PuzzleSolved`, via the `State` trait
//! - **Guards**: pure predicates for the passcode and the arrangement
//! - **History**: immutable record of phase transitions
//! - **Checkpoints**: versioned JSON/binary export and resume
//!
//! # Example
//!
//! ```rust
//! use stagegate::{GateBuilder, GateEvent, StagePhase};
//!
//! let mut gate = GateBuilder::new().seed(42).build().unwrap();
//!
//! for c in "111111".chars() {
//!     gate.dispatch(GateEvent::DigitPressed(c));
//! }
//! assert!(gate.snapshot().has_password_error());
//!
//! gate.dispatch(GateEvent::BackspacePressed);
//! assert_eq!(gate.snapshot().code_len, 5);
//! assert_eq!(gate.phase(), StagePhase::Locked);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod gate;
pub mod shuffle;

// Re-export commonly used types
pub use builder::{BuildError, GateBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{GateConfig, SecretCode};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use gate::{EventOutcome, GateEvent, GateSnapshot, GateState, StageMachine, StagePhase};
