//! Core state machine primitives.
//!
//! - Phase definitions via the `State` trait
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Everything here is pure; the gate machine builds on top of it.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
