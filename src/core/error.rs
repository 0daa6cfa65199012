//! Errors raised while parsing user-supplied words, patterns and feedback

use thiserror::Error;

/// Error type for malformed words, patterns, letter sets and feedback marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
}
