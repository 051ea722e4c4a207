//! Progress through the final message reveal.

use crate::config::REVEAL_CEILING;
use serde::{Deserialize, Serialize};

/// How far the envelope has been opened.
///
/// Advances one step per tap and stops at [`RevealStep::FullyOpen`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevealStep {
    #[default]
    Closed,
    PartiallyOpen,
    FullyOpen,
}

impl RevealStep {
    /// The next step, saturating at the ceiling.
    pub fn advance(self) -> Self {
        match self {
            Self::Closed => Self::PartiallyOpen,
            Self::PartiallyOpen | Self::FullyOpen => Self::FullyOpen,
        }
    }

    /// Numeric value in `0..=REVEAL_CEILING`.
    pub fn value(self) -> u8 {
        match self {
            Self::Closed => 0,
            Self::PartiallyOpen => 1,
            Self::FullyOpen => REVEAL_CEILING,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Closed),
            1 => Some(Self::PartiallyOpen),
            REVEAL_CEILING => Some(Self::FullyOpen),
            _ => None,
        }
    }

    pub fn is_fully_open(self) -> bool {
        self == Self::FullyOpen
    }

    /// Instruction shown above the envelope; none once the message is out.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Closed => Some("Tap the envelope"),
            Self::PartiallyOpen => Some("Tap again"),
            Self::FullyOpen => None,
        }
    }
}
