//! Coarse stages of a gate session.

use crate::phase_enum;

phase_enum! {
    /// Which stage of the sequence the session is in.
    ///
    /// `Locked` is the initial phase. `PuzzleSolved` is final in the sense that
    /// there is nothing further to unlock, though the user may step back.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum StagePhase {
        /// Waiting for the passcode
        #[default]
        Locked,
        /// Tiles are shuffled and being rearranged
        PuzzleActive,
        /// Puzzle done, message being revealed
        PuzzleSolved,
    }
    final: [PuzzleSolved]
}
