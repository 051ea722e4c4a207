//! Input events delivered by the presentation layer.

use crate::gate::passcode::KeypadKey;
use serde::{Deserialize, Serialize};

/// A single user interaction.
///
/// Events carry raw values (a keypad character, a slot number) and are
/// validated by the machine; anything out of range is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GateEvent {
    DigitPressed(char),
    BackspacePressed,
    DragStart(usize),
    Drop(usize),
    DragEnd,
    DonePressed,
    AdvanceReveal,
    BackToPuzzle,
    BackToLocked,
}

impl GateEvent {
    /// Stable name for logs and history records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DigitPressed(_) => "digit_pressed",
            Self::BackspacePressed => "backspace_pressed",
            Self::DragStart(_) => "drag_start",
            Self::Drop(_) => "drop",
            Self::DragEnd => "drag_end",
            Self::DonePressed => "done_pressed",
            Self::AdvanceReveal => "advance_reveal",
            Self::BackToPuzzle => "back_to_puzzle",
            Self::BackToLocked => "back_to_locked",
        }
    }
}

impl From<KeypadKey> for GateEvent {
    fn from(key: KeypadKey) -> Self {
        Self::DigitPressed(key.symbol())
    }
}
