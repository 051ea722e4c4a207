//! Gate configuration: fixed constants, the secret code and RNG seeding.
//!
//! The secret is validated up front with stillwater's `Validation`, so a bad
//! secret reports every problem at once (wrong length *and* each stray
//! character) instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use stagegate::config::{ConfigError, SecretCode};
//!
//! assert!(SecretCode::parse("456838").is_ok());
//!
//! match SecretCode::parse("4x6") {
//!     Err(ConfigError::InvalidSecret(violations)) => assert_eq!(violations.len(), 2),
//!     Ok(_) => panic!("short secret with a letter should be rejected"),
//! }
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, SecretViolation};

/// Number of digits in a complete passcode.
pub const MAX_CODE_LEN: usize = 6;

/// Number of slots (and tiles) in the puzzle grid.
pub const TILE_COUNT: usize = 9;

/// Highest reveal step; advancing past it does nothing.
pub const REVEAL_CEILING: u8 = 2;

/// Secret used when none is configured.
pub const DEFAULT_SECRET: &str = "456838";

/// The fixed code that unlocks the gate.
///
/// Always exactly [`MAX_CODE_LEN`] decimal digits. `Debug` output is masked.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretCode([u8; MAX_CODE_LEN]);

impl SecretCode {
    /// Parse a secret, accumulating every violation.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let found = raw.chars().count();
        let mut checks: Vec<Validation<(), NonEmptyVec<SecretViolation>>> = Vec::new();

        checks.push(if found == MAX_CODE_LEN {
            Validation::success(())
        } else {
            Validation::fail(SecretViolation::WrongLength {
                expected: MAX_CODE_LEN,
                found,
            })
        });

        for (position, ch) in raw.chars().enumerate() {
            checks.push(if ch.is_ascii_digit() {
                Validation::success(())
            } else {
                Validation::fail(SecretViolation::NonDigit { position })
            });
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => {
                let mut digits = [0u8; MAX_CODE_LEN];
                for (slot, byte) in digits.iter_mut().zip(raw.bytes()) {
                    *slot = byte - b'0';
                }
                Ok(Self(digits))
            }
            Validation::Failure(errors) => Err(ConfigError::InvalidSecret(
                errors.iter().cloned().collect(),
            )),
        }
    }

    /// The secret as digit values (0-9).
    pub fn digits(&self) -> &[u8] {
        &self.0
    }
}

impl Default for SecretCode {
    fn default() -> Self {
        let mut digits = [0u8; MAX_CODE_LEN];
        for (slot, byte) in digits.iter_mut().zip(DEFAULT_SECRET.bytes()) {
            *slot = byte - b'0';
        }
        Self(digits)
    }
}

impl FromStr for SecretCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SecretCode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SecretCode> for String {
    fn from(secret: SecretCode) -> Self {
        secret.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretCode(******)")
    }
}

/// Runtime configuration for a gate session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Code that unlocks the puzzle stage
    pub secret: SecretCode,

    /// Seed for tile shuffles; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Shown once the envelope is fully open
    #[serde(default)]
    pub reveal_message: Option<String>,
}

impl GateConfig {
    /// RNG for tile shuffles, seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_secret_parses_to_default() {
        assert_eq!(SecretCode::parse(DEFAULT_SECRET).unwrap(), SecretCode::default());
        assert_eq!(SecretCode::default().digits(), &[4, 5, 6, 8, 3, 8]);
    }

    #[test]
    fn parse_accepts_six_digits() {
        let secret = SecretCode::parse("012345").unwrap();
        assert_eq!(secret.digits(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = SecretCode::parse("12345").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSecret(vec![SecretViolation::WrongLength {
                expected: MAX_CODE_LEN,
                found: 5,
            }])
        );
    }

    #[test]
    fn parse_accumulates_all_violations() {
        let ConfigError::InvalidSecret(violations) = SecretCode::parse("1a2b").unwrap_err();

        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&SecretViolation::WrongLength {
            expected: MAX_CODE_LEN,
            found: 4,
        }));
        assert!(violations.contains(&SecretViolation::NonDigit { position: 1 }));
        assert!(violations.contains(&SecretViolation::NonDigit { position: 3 }));
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(SecretCode::parse("١٢٣٤٥٦").is_err());
    }

    #[test]
    fn debug_output_is_masked() {
        let secret = SecretCode::parse("987654").unwrap();
        let printed = format!("{secret:?}");
        assert!(!printed.contains("987654"));
    }

    #[test]
    fn secret_serializes_as_string() {
        let secret = SecretCode::parse("135790").unwrap();
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"135790\"");

        let back: SecretCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, secret);
    }

    #[test]
    fn invalid_secret_fails_to_deserialize() {
        let result: Result<SecretCode, _> = serde_json::from_str("\"12\"");
        assert!(result.is_err());
    }

    #[test]
    fn config_deserializes_without_seed() {
        let config: GateConfig = serde_json::from_str(r#"{"secret":"111222"}"#).unwrap();
        assert_eq!(config.secret.digits(), &[1, 1, 1, 2, 2, 2]);
        assert_eq!(config.seed, None);
        assert_eq!(config.reveal_message, None);
    }

    #[test]
    fn config_deserializes_reveal_message() {
        let config: GateConfig =
            serde_json::from_str(r#"{"secret":"111222","reveal_message":"See you soon"}"#).unwrap();
        assert_eq!(config.reveal_message.as_deref(), Some("See you soon"));
    }

    #[test]
    fn seeded_config_gives_repeatable_rng() {
        let config = GateConfig {
            seed: Some(11),
            ..GateConfig::default()
        };

        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
