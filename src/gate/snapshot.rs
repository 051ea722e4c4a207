//! Read-only view handed to the presentation layer.

use crate::config::MAX_CODE_LEN;
use crate::gate::phase::StagePhase;
use crate::gate::reveal::RevealStep;
use crate::gate::tiles::{Slot, TileSet};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs, and nothing it should not see.
///
/// The entered digits are absent; only their count and the matching dot
/// indicators are exposed. `message` stays `None` until the envelope is
/// fully open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSnapshot {
    pub phase: StagePhase,
    pub code_len: usize,
    pub dots: [bool; MAX_CODE_LEN],
    pub password_error: Option<String>,
    pub tiles: TileSet,
    pub dragging: Option<Slot>,
    pub puzzle_feedback: Option<String>,
    pub reveal: RevealStep,
    pub message: Option<String>,
}

impl GateSnapshot {
    pub fn has_password_error(&self) -> bool {
        self.password_error.is_some()
    }

    pub fn reveal_prompt(&self) -> Option<&'static str> {
        self.reveal.prompt()
    }
}
