//! Core State trait for gate phases.
//!
//! Phase enums implement this trait, which provides pure methods for
//! inspecting phase properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure. A phase is a small value describing the coarse
/// stage of a session; phase-local data lives next to it, not inside it.
///
/// # Required Traits
///
/// - `Clone`: phases are recorded in the transition history
/// - `PartialEq`: phases are compared when routing events
/// - `Debug`: phases show up in logs and test failures
/// - `Serialize` + `Deserialize`: phases are part of checkpoints
///
/// # Example
///
/// ```rust
/// use stagegate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorPhase {
///     Shut,
///     Ajar,
///     Open,
/// }
///
/// impl State for DoorPhase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "Shut",
///             Self::Ajar => "Ajar",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Open)
///     }
/// }
///
/// assert!(DoorPhase::Open.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the last phase of the sequence.
    ///
    /// A final phase may still allow stepping back; it only marks the point
    /// where forward progress ends.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
