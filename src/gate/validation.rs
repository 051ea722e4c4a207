//! Pure checks on passcodes and tile arrangements.
//!
//! These predicates do not touch the machine and can be tested on their own.
//! The machine consumes them through [`Guard`]s built by
//! [`password_guard`] and [`arrangement_guard`].

use crate::config::{SecretCode, MAX_CODE_LEN};
use crate::core::Guard;
use crate::gate::passcode::PassCode;
use crate::gate::tiles::TileSet;

/// True iff the code has exactly the maximum number of digits.
pub fn is_password_complete(code: &PassCode) -> bool {
    code.len() == MAX_CODE_LEN
}

/// True iff the code matches the secret digit for digit, at the same length.
pub fn is_password_correct(code: &PassCode, secret: &SecretCode) -> bool {
    code.digits() == secret.digits()
}

/// True iff every slot holds the tile with the same index.
pub fn is_arrangement_solved(tiles: &TileSet) -> bool {
    tiles
        .iter()
        .all(|(slot, tile)| slot.index() == usize::from(tile))
}

/// Guard that passes only a complete, correct code.
pub fn password_guard(secret: SecretCode) -> Guard<PassCode> {
    Guard::new(move |code: &PassCode| {
        is_password_complete(code) && is_password_correct(code, &secret)
    })
}

/// Guard that passes only the solved arrangement.
pub fn arrangement_guard() -> Guard<TileSet> {
    Guard::new(is_arrangement_solved)
}
