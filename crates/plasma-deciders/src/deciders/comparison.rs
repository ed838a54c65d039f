//! Ordering deciders over 256-bit unsigned integers

use async_trait::async_trait;

use crate::cache::{memoize, DecisionCache};
use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::ComparisonInput;
use crate::property::{Decision, DeciderId, Property};

fn compare(
    id: DeciderId,
    cache: Option<&DecisionCache>,
    input: &[u8],
    options: DecideOptions,
    holds: impl FnOnce(&ComparisonInput) -> bool,
) -> Result<Decision, DeciderError> {
    memoize(
        cache,
        Property::new(id, input.to_vec()),
        options.no_cache,
        || {
            let comparison = ComparisonInput::decode(input)
                .map_err(|e| DeciderError::invalid_input(id, input, e))?;
            Ok(holds(&comparison))
        },
    )
}

/// Decides `lhs < rhs`
pub struct LessThanDecider {
    id: DeciderId,
    cache: Option<DecisionCache>,
}

impl LessThanDecider {
    pub fn new(id: DeciderId, cache: Option<DecisionCache>) -> Self {
        Self { id, cache }
    }
}

#[async_trait]
impl Decider for LessThanDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        _witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        compare(self.id, self.cache.as_ref(), input, options, |c| c.lhs < c.rhs)
    }
}

/// Decides `lhs > rhs`
pub struct GreaterThanDecider {
    id: DeciderId,
    cache: Option<DecisionCache>,
}

impl GreaterThanDecider {
    pub fn new(id: DeciderId, cache: Option<DecisionCache>) -> Self {
        Self { id, cache }
    }
}

#[async_trait]
impl Decider for GreaterThanDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        _witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        compare(self.id, self.cache.as_ref(), input, options, |c| c.lhs > c.rhs)
    }
}
