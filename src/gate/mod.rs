//! The three-stage gate: passcode lock, tile puzzle, staged reveal.
//!
//! # Key Concepts
//!
//! - **Phase**: `Locked`, `PuzzleActive` or `PuzzleSolved`
//! - **Events**: discrete user interactions fed to [`StageMachine::dispatch`]
//! - **Snapshot**: the read-only view a renderer draws from
//!
//! The machine never renders and never waits. A presentation layer turns
//! key presses, drags and taps into [`GateEvent`]s and redraws from
//! [`GateSnapshot`] afterwards.

mod event;
mod machine;
mod passcode;
mod phase;
mod reveal;
mod snapshot;
mod tiles;
pub mod validation;

pub use event::GateEvent;
pub use machine::{
    EventOutcome, GateState, StageMachine, PUZZLE_FEEDBACK_MESSAGE, WRONG_PASSWORD_MESSAGE,
};
pub use passcode::{KeypadKey, PassCode, PassCodeError};
pub use phase::StagePhase;
pub use reveal::RevealStep;
pub use snapshot::GateSnapshot;
pub use tiles::{Slot, TileId, TileSet, TileSetError};
