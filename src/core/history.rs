//! Phase transition history tracking.
//!
//! Provides immutable tracking of phase transitions over a session.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use stagegate::core::StateTransition;
/// use stagegate::gate::StagePhase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StagePhase::Locked,
///     to: StagePhase::PuzzleActive,
///     timestamp: Utc::now(),
///     event: "digit_pressed".to_string(),
/// };
/// assert_eq!(transition.event, "digit_pressed");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Name of the event that caused the transition
    pub event: String,
}

/// Ordered history of phase transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use stagegate::core::{StateHistory, StateTransition};
/// use stagegate::gate::StagePhase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: StagePhase::Locked,
///         to: StagePhase::PuzzleActive,
///         timestamp: Utc::now(),
///         event: "digit_pressed".to_string(),
///     })
///     .record(StateTransition {
///         from: StagePhase::PuzzleActive,
///         to: StagePhase::PuzzleSolved,
///         timestamp: Utc::now(),
///         event: "done_pressed".to_string(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Locked -> PuzzleActive -> PuzzleSolved
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the first transition's `from` phase, then the `to` phase of
    /// each transition in order. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration from the first to the last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
