//! Configuration error types.

use thiserror::Error;

/// A single problem found while parsing a secret code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretViolation {
    #[error("secret must be exactly {expected} digits (found {found} characters)")]
    WrongLength { expected: usize, found: usize },

    #[error("secret contains non-digit character at position {position}")]
    NonDigit { position: usize },
}

/// Errors that can occur when building a gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Every violation found in the secret, not only the first
    #[error("Invalid secret code ({} violation(s))", .0.len())]
    InvalidSecret(Vec<SecretViolation>),
}
