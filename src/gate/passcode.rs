//! Entered passcode and the keypad that feeds it.

use crate::config::MAX_CODE_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One key on the phone-style keypad.
///
/// The keypad has the ten digits plus two reserved symbols. The reserved
/// keys are accepted as input but never change the passcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadKey {
    Digit(u8),
    Star,
    Hash,
}

impl KeypadKey {
    /// Keys in on-screen order, row by row.
    pub const LAYOUT: [KeypadKey; 12] = [
        KeypadKey::Digit(1),
        KeypadKey::Digit(2),
        KeypadKey::Digit(3),
        KeypadKey::Digit(4),
        KeypadKey::Digit(5),
        KeypadKey::Digit(6),
        KeypadKey::Digit(7),
        KeypadKey::Digit(8),
        KeypadKey::Digit(9),
        KeypadKey::Star,
        KeypadKey::Digit(0),
        KeypadKey::Hash,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Star),
            '#' => Some(Self::Hash),
            '0'..='9' => c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self::Digit),
            _ => None,
        }
    }

    /// The character printed on the key.
    pub fn symbol(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Star => '*',
            Self::Hash => '#',
        }
    }

    /// Phone letters shown under the digit, empty when there are none.
    pub fn letters(self) -> &'static str {
        match self {
            Self::Digit(2) => "ABC",
            Self::Digit(3) => "DEF",
            Self::Digit(4) => "GHI",
            Self::Digit(5) => "JKL",
            Self::Digit(6) => "MNO",
            Self::Digit(7) => "PQRS",
            Self::Digit(8) => "TUV",
            Self::Digit(9) => "WXYZ",
            Self::Digit(0) => "+",
            _ => "",
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(self, Self::Star | Self::Hash)
    }

    /// The digit value for data keys, `None` for reserved keys.
    pub fn digit(self) -> Option<u8> {
        match self {
            Self::Digit(d) if d <= 9 => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassCodeError {
    #[error("passcode longer than {max} digits")]
    TooLong { max: usize },

    #[error("passcode contains a non-digit at position {position}")]
    NotADigit { position: usize },
}

/// Digits entered so far, at most [`MAX_CODE_LEN`] of them.
///
/// Grows by appending and shrinks by popping. `Debug` shows only the length
/// so entered digits never end up in logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PassCode {
    digits: Vec<u8>,
}

impl PassCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.digits.len() >= MAX_CODE_LEN
    }

    /// Append a digit. Returns `false` (and changes nothing) when the code
    /// is already full or the value is not a decimal digit.
    pub fn push(&mut self, digit: u8) -> bool {
        if self.is_full() || digit > 9 {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Remove the last digit, if any.
    pub fn pop(&mut self) -> Option<u8> {
        self.digits.pop()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl fmt::Debug for PassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassCode")
            .field("len", &self.digits.len())
            .finish()
    }
}

impl FromStr for PassCode {
    type Err = PassCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut code = PassCode::new();
        for (position, c) in s.chars().enumerate() {
            let digit = KeypadKey::from_char(c)
                .and_then(KeypadKey::digit)
                .ok_or(PassCodeError::NotADigit { position })?;
            if !code.push(digit) {
                return Err(PassCodeError::TooLong { max: MAX_CODE_LEN });
            }
        }
        Ok(code)
    }
}

impl TryFrom<Vec<u8>> for PassCode {
    type Error = PassCodeError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        if digits.len() > MAX_CODE_LEN {
            return Err(PassCodeError::TooLong { max: MAX_CODE_LEN });
        }
        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(PassCodeError::NotADigit { position });
        }
        Ok(Self { digits })
    }
}

impl From<PassCode> for Vec<u8> {
    fn from(code: PassCode) -> Self {
        code.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_layout_matches_phone_order() {
        let symbols: String = KeypadKey::LAYOUT.iter().map(|k| k.symbol()).collect();
        assert_eq!(symbols, "123456789*0#");
    }

    #[test]
    fn keypad_letters() {
        assert_eq!(KeypadKey::Digit(1).letters(), "");
        assert_eq!(KeypadKey::Digit(7).letters(), "PQRS");
        assert_eq!(KeypadKey::Digit(0).letters(), "+");
        assert_eq!(KeypadKey::Star.letters(), "");
    }

    #[test]
    fn from_char_classifies_keys() {
        assert_eq!(KeypadKey::from_char('5'), Some(KeypadKey::Digit(5)));
        assert_eq!(KeypadKey::from_char('*'), Some(KeypadKey::Star));
        assert_eq!(KeypadKey::from_char('#'), Some(KeypadKey::Hash));
        assert_eq!(KeypadKey::from_char('a'), None);
        assert!(KeypadKey::Hash.is_reserved());
        assert_eq!(KeypadKey::Star.digit(), None);
    }

    #[test]
    fn push_stops_at_max_len() {
        let mut code = PassCode::new();
        for d in 0..MAX_CODE_LEN as u8 {
            assert!(code.push(d));
        }
        assert!(code.is_full());
        assert!(!code.push(1));
        assert_eq!(code.len(), MAX_CODE_LEN);
    }

    #[test]
    fn push_rejects_non_digits() {
        let mut code = PassCode::new();
        assert!(!code.push(10));
        assert!(code.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut code = PassCode::new();
        assert_eq!(code.pop(), None);

        code.push(3);
        assert_eq!(code.pop(), Some(3));
        assert!(code.is_empty());
    }

    #[test]
    fn parse_from_str() {
        let code: PassCode = "4568".parse().unwrap();
        assert_eq!(code.digits(), &[4, 5, 6, 8]);

        assert_eq!(
            "12*".parse::<PassCode>(),
            Err(PassCodeError::NotADigit { position: 2 })
        );
        assert_eq!(
            "1234567".parse::<PassCode>(),
            Err(PassCodeError::TooLong { max: MAX_CODE_LEN })
        );
    }

    #[test]
    fn debug_hides_digits() {
        let code: PassCode = "456838".parse().unwrap();
        let printed = format!("{code:?}");
        assert!(printed.contains("len: 6"));
        assert!(!printed.contains("456838"));
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<PassCode>("[1,2,3]").is_ok());
        assert!(serde_json::from_str::<PassCode>("[1,12]").is_err());
        assert!(serde_json::from_str::<PassCode>("[1,2,3,4,5,6,7]").is_err());
    }
}
