//! The decider contract

use async_trait::async_trait;

use crate::error::DeciderError;
use crate::property::{Decision, DeciderId};

/// Per-call evaluation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecideOptions {
    /// Bypass memoized decisions, e.g. because the underlying state changed
    pub no_cache: bool,
    /// Nesting depth of the property being decided; zero at the top level
    pub depth: usize,
}

impl DecideOptions {
    /// Options that force re-evaluation of every memoized fact
    pub fn no_cache() -> Self {
        Self {
            no_cache: true,
            depth: 0,
        }
    }

    /// Options for evaluating a sub-property one level deeper
    pub fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

/// Evaluates whether a property bound to this decider holds for an input and witness
#[async_trait]
pub trait Decider: Send + Sync {
    /// Id under which properties reference this decider
    fn id(&self) -> DeciderId;

    /// Decide the property `{self.id(), input}` with an optional witness
    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError>;

    /// Decide without a witness, for cached or self-evident facts
    async fn check_decision(&self, input: &[u8]) -> Result<Decision, DeciderError> {
        self.decide(input, None, DecideOptions::default()).await
    }
}
