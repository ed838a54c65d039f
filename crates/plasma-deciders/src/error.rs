//! Decider error taxonomy.
//!
//! None of these may be turned into a `false` outcome: "decided false" and "could not
//! decide" lead to different fraud-proof consequences.

use thiserror::Error;

use crate::property::DeciderId;

/// Error types for decider evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeciderError {
    /// Input or witness does not satisfy the decider's shape contract
    #[error("Invalid input for decider {decider:?} (input 0x{}): {reason}", hex::encode(.input))]
    InvalidInput {
        decider: DeciderId,
        input: Vec<u8>,
        reason: String,
    },
    /// The decider cannot reach a conclusive outcome with the given witness
    #[error("Unresolved decision for decider {decider:?} (input 0x{}): {reason}", hex::encode(.input))]
    Unresolved {
        decider: DeciderId,
        input: Vec<u8>,
        reason: String,
    },
    /// A property references a decider the registry does not know
    #[error("Unknown decider {0:?}")]
    UnknownDecider(DeciderId),
}

impl DeciderError {
    pub fn invalid_input(decider: DeciderId, input: &[u8], reason: impl ToString) -> Self {
        Self::InvalidInput {
            decider,
            input: input.to_vec(),
            reason: reason.to_string(),
        }
    }

    pub fn unresolved(decider: DeciderId, input: &[u8], reason: impl ToString) -> Self {
        Self::Unresolved {
            decider,
            input: input.to_vec(),
            reason: reason.to_string(),
        }
    }
}
