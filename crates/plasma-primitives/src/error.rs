//! Decoding errors for canonical encodings.

use thiserror::Error;

use crate::U256;

/// Error types for decoding ABI-encoded domain objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The data is not the canonical Solidity ABI encoding of the expected type
    #[error("Invalid ABI encoding of {what}: {reason}")]
    Abi { what: &'static str, reason: String },
    /// The data decodes, but to a value the encoder never produces
    #[error("Non-canonical encoding of {what}")]
    NonCanonical { what: &'static str },
    /// A range with `start >= end`
    #[error("Invalid range [{start}, {end})")]
    InvalidRange { start: U256, end: U256 },
    /// A sequence whose length must match another one does not
    #[error("{what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl DecodeError {
    pub fn abi(what: &'static str, err: alloy_sol_types::Error) -> Self {
        Self::Abi {
            what,
            reason: err.to_string(),
        }
    }
}
