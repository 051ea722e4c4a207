//! Stage state machine for the gate.
//!
//! The machine owns a single [`GateState`] and mutates it only through
//! [`StageMachine::dispatch`]. Every event is total: anything that does not
//! apply to the current phase is ignored rather than reported as an error.

use crate::checkpoint::MachineMetadata;
use crate::config::{GateConfig, SecretCode, MAX_CODE_LEN};
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::gate::event::GateEvent;
use crate::gate::passcode::{KeypadKey, PassCode};
use crate::gate::phase::StagePhase;
use crate::gate::reveal::RevealStep;
use crate::gate::snapshot::GateSnapshot;
use crate::gate::tiles::{Slot, TileSet};
use crate::gate::validation::{arrangement_guard, is_password_complete, password_guard};
use chrono::Utc;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown after a complete but wrong passcode.
pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password. Try again.";

/// Shown when Done is pressed on an unsolved arrangement.
pub const PUZZLE_FEEDBACK_MESSAGE: &str = "Not quite! Keep trying.";

/// Result of dispatching one event.
///
/// Purely informational; none of these is a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event does not apply right now; nothing changed
    Ignored,
    /// Phase-local state changed
    Updated,
    /// An attempt was checked and refused; feedback is now shown
    Rejected { feedback: String },
    /// The machine moved to another phase
    Transitioned { from: StagePhase, to: StagePhase },
}

impl EventOutcome {
    pub fn has_update(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Complete session state.
///
/// Plain data: serializable, comparable, and free of any RNG or callbacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateState {
    phase: StagePhase,
    passcode: PassCode,
    password_error: Option<String>,
    tiles: TileSet,
    drag_source: Option<Slot>,
    puzzle_feedback: Option<String>,
    reveal: RevealStep,
}

impl GateState {
    /// A fresh session in the `Locked` phase.
    pub fn new(tiles: TileSet) -> Self {
        Self {
            phase: StagePhase::Locked,
            passcode: PassCode::new(),
            password_error: None,
            tiles,
            drag_source: None,
            puzzle_feedback: None,
            reveal: RevealStep::Closed,
        }
    }

    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    pub fn passcode(&self) -> &PassCode {
        &self.passcode
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    pub fn drag_source(&self) -> Option<Slot> {
        self.drag_source
    }

    pub fn puzzle_feedback(&self) -> Option<&str> {
        self.puzzle_feedback.as_deref()
    }

    pub fn reveal(&self) -> RevealStep {
        self.reveal
    }

    pub fn snapshot(&self) -> GateSnapshot {
        let code_len = self.passcode.len();
        GateSnapshot {
            phase: self.phase,
            code_len,
            dots: std::array::from_fn(|i| i < code_len),
            password_error: self.password_error.clone(),
            tiles: self.tiles,
            dragging: self.drag_source,
            puzzle_feedback: self.puzzle_feedback.clone(),
            reveal: self.reveal,
            message: None,
        }
    }

    /// Fields that are set outside the phase they belong to.
    ///
    /// Empty for any state the machine itself can produce.
    pub fn inconsistencies(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        let phase = self.phase;

        if phase != StagePhase::Locked && !self.passcode.is_empty() {
            problems.push("passcode entered outside the locked phase");
        }
        if phase != StagePhase::Locked && self.password_error.is_some() {
            problems.push("password error outside the locked phase");
        }
        if phase == StagePhase::Locked
            && self.password_error.is_some()
            && self.passcode.len() != MAX_CODE_LEN
        {
            // The error only appears on a full code and a backspace clears it.
            problems.push("password error without a complete code");
        }
        if phase == StagePhase::Locked
            && self.passcode.len() == MAX_CODE_LEN
            && self.password_error.is_none()
        {
            problems.push("complete code without a verdict");
        }
        if phase != StagePhase::PuzzleActive && self.drag_source.is_some() {
            problems.push("drag in progress outside the puzzle phase");
        }
        if phase != StagePhase::PuzzleActive && self.puzzle_feedback.is_some() {
            problems.push("puzzle feedback outside the puzzle phase");
        }
        if phase != StagePhase::PuzzleSolved && self.reveal != RevealStep::Closed {
            problems.push("reveal progress before the puzzle is solved");
        }
        if phase == StagePhase::PuzzleSolved && self.tiles != TileSet::identity() {
            problems.push("solved phase with an unsolved arrangement");
        }

        problems
    }
}

/// The gate: passcode lock, then tile puzzle, then staged reveal.
///
/// # Example
///
/// ```rust
/// use stagegate::builder::GateBuilder;
/// use stagegate::gate::{GateEvent, StagePhase};
///
/// let mut machine = GateBuilder::new().secret("123456").seed(1).build().unwrap();
///
/// for c in "123456".chars() {
///     machine.dispatch(GateEvent::DigitPressed(c));
/// }
///
/// assert_eq!(machine.phase(), StagePhase::PuzzleActive);
/// assert_eq!(machine.snapshot().code_len, 0);
/// ```
pub struct StageMachine<R: Rng = StdRng> {
    state: GateState,
    history: StateHistory<StagePhase>,
    metadata: MachineMetadata,
    password_guard: Guard<PassCode>,
    arrangement_guard: Guard<TileSet>,
    reveal_message: Option<String>,
    rng: R,
}

impl StageMachine<StdRng> {
    /// Create a machine using the configuration's secret and RNG seeding.
    pub fn new(config: GateConfig) -> Self {
        let rng = config.rng();
        let machine = Self::with_rng(config.secret, rng);
        match config.reveal_message {
            Some(message) => machine.with_reveal_message(message),
            None => machine,
        }
    }
}

impl<R: Rng> StageMachine<R> {
    /// Create a machine in the `Locked` phase driven by `rng`.
    pub fn with_rng(secret: SecretCode, mut rng: R) -> Self {
        let tiles = TileSet::shuffled(&mut rng);
        Self::from_parts(
            secret,
            GateState::new(tiles),
            StateHistory::new(),
            MachineMetadata::default(),
            rng,
        )
    }

    pub(crate) fn from_parts(
        secret: SecretCode,
        state: GateState,
        history: StateHistory<StagePhase>,
        metadata: MachineMetadata,
        rng: R,
    ) -> Self {
        Self {
            state,
            history,
            metadata,
            password_guard: password_guard(secret),
            arrangement_guard: arrangement_guard(),
            reveal_message: None,
            rng,
        }
    }

    /// Message handed out once the envelope is fully open.
    pub fn with_reveal_message(mut self, message: impl Into<String>) -> Self {
        self.reveal_message = Some(message.into());
        self
    }

    pub fn phase(&self) -> StagePhase {
        self.state.phase
    }

    /// Whether the last phase has been reached.
    pub fn is_final(&self) -> bool {
        self.state.phase.is_final()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// The state's snapshot, plus the reveal message once fully open.
    pub fn snapshot(&self) -> GateSnapshot {
        let mut snapshot = self.state.snapshot();
        if self.state.phase == StagePhase::PuzzleSolved && self.state.reveal.is_fully_open() {
            snapshot.message = self.reveal_message.clone();
        }
        snapshot
    }

    pub fn history(&self) -> &StateHistory<StagePhase> {
        &self.history
    }

    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// Process one event to completion.
    pub fn dispatch(&mut self, event: GateEvent) -> EventOutcome {
        self.metadata.record_event(event.name());

        let outcome = match (self.state.phase, event) {
            (StagePhase::Locked, GateEvent::DigitPressed(c)) => self.press_key(c),
            (StagePhase::Locked, GateEvent::BackspacePressed) => self.backspace(),
            (StagePhase::PuzzleActive, GateEvent::DragStart(index)) => self.drag_start(index),
            (StagePhase::PuzzleActive, GateEvent::Drop(index)) => self.drop_on(index),
            (StagePhase::PuzzleActive, GateEvent::DragEnd) => self.drag_end(),
            (StagePhase::PuzzleActive, GateEvent::DonePressed) => self.done(),
            (StagePhase::PuzzleActive, GateEvent::BackToLocked) => self.back_to_locked(),
            (StagePhase::PuzzleSolved, GateEvent::AdvanceReveal) => self.advance_reveal(),
            (StagePhase::PuzzleSolved, GateEvent::BackToPuzzle) => self.back_to_puzzle(),
            _ => EventOutcome::Ignored,
        };

        if outcome == EventOutcome::Ignored {
            trace!(
                "ignored {} in phase {}",
                event.name(),
                self.state.phase.name()
            );
        }
        outcome
    }

    fn press_key(&mut self, c: char) -> EventOutcome {
        let Some(digit) = KeypadKey::from_char(c).and_then(KeypadKey::digit) else {
            return EventOutcome::Ignored;
        };
        if !self.state.passcode.push(digit) {
            return EventOutcome::Ignored;
        }
        if !is_password_complete(&self.state.passcode) {
            return EventOutcome::Updated;
        }

        if self.password_guard.check(&self.state.passcode) {
            self.state.passcode.clear();
            self.state.password_error = None;
            self.enter_puzzle(GateEvent::DigitPressed(c))
        } else {
            debug!(
                "passcode rejected (length {})",
                self.state.passcode.len()
            );
            let feedback = WRONG_PASSWORD_MESSAGE.to_string();
            self.state.password_error = Some(feedback.clone());
            EventOutcome::Rejected { feedback }
        }
    }

    fn backspace(&mut self) -> EventOutcome {
        let had_error = self.state.password_error.take().is_some();
        let popped = self.state.passcode.pop().is_some();
        if had_error || popped {
            EventOutcome::Updated
        } else {
            EventOutcome::Ignored
        }
    }

    fn drag_start(&mut self, index: usize) -> EventOutcome {
        let Some(slot) = Slot::new(index) else {
            return EventOutcome::Ignored;
        };
        self.state.drag_source = Some(slot);
        self.state.puzzle_feedback = None;
        EventOutcome::Updated
    }

    fn drop_on(&mut self, index: usize) -> EventOutcome {
        let Some(target) = Slot::new(index) else {
            return EventOutcome::Ignored;
        };
        match self.state.drag_source.take() {
            Some(source) if source != target => {
                self.state.tiles.swap(source, target);
                EventOutcome::Updated
            }
            // Dropped back onto its own slot: only the pending drag is cleared.
            Some(_) => EventOutcome::Updated,
            None => EventOutcome::Ignored,
        }
    }

    fn drag_end(&mut self) -> EventOutcome {
        if self.state.drag_source.take().is_some() {
            EventOutcome::Updated
        } else {
            EventOutcome::Ignored
        }
    }

    fn done(&mut self) -> EventOutcome {
        if self.arrangement_guard.check(&self.state.tiles) {
            self.state.puzzle_feedback = None;
            self.state.drag_source = None;
            self.state.reveal = RevealStep::Closed;
            self.transition_to(StagePhase::PuzzleSolved, GateEvent::DonePressed)
        } else {
            debug!("arrangement {:?} is not solved", self.state.tiles.tiles());
            let feedback = PUZZLE_FEEDBACK_MESSAGE.to_string();
            self.state.puzzle_feedback = Some(feedback.clone());
            EventOutcome::Rejected { feedback }
        }
    }

    fn back_to_locked(&mut self) -> EventOutcome {
        self.state.passcode.clear();
        self.state.password_error = None;
        self.state.drag_source = None;
        self.state.puzzle_feedback = None;
        self.transition_to(StagePhase::Locked, GateEvent::BackToLocked)
    }

    fn advance_reveal(&mut self) -> EventOutcome {
        let next = self.state.reveal.advance();
        if next == self.state.reveal {
            return EventOutcome::Ignored;
        }
        self.state.reveal = next;
        EventOutcome::Updated
    }

    fn back_to_puzzle(&mut self) -> EventOutcome {
        self.state.reveal = RevealStep::Closed;
        self.enter_puzzle(GateEvent::BackToPuzzle)
    }

    /// Entering the puzzle always deals a fresh arrangement.
    fn enter_puzzle(&mut self, cause: GateEvent) -> EventOutcome {
        self.state.tiles = TileSet::shuffled(&mut self.rng);
        self.state.drag_source = None;
        self.state.puzzle_feedback = None;
        self.transition_to(StagePhase::PuzzleActive, cause)
    }

    fn transition_to(&mut self, to: StagePhase, cause: GateEvent) -> EventOutcome {
        let from = self.state.phase;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            event: cause.name().to_string(),
        });
        self.state.phase = to;
        debug!("{} -> {} on {}", from.name(), to.name(), cause.name());
        EventOutcome::Transitioned { from, to }
    }
}

impl<R: Rng> fmt::Debug for StageMachine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageMachine")
            .field("state", &self.state)
            .field("transitions", &self.history.len())
            .finish_non_exhaustive()
    }
}
