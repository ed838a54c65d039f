use async_trait::async_trait;

use crate::cache::{memoize, DecisionCache};
use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::EqualityInput;
use crate::property::{Decision, DeciderId, Property};

/// Decides whether two byte strings are equal
pub struct EqualityDecider {
    id: DeciderId,
    cache: Option<DecisionCache>,
}

impl EqualityDecider {
    pub fn new(id: DeciderId, cache: Option<DecisionCache>) -> Self {
        Self { id, cache }
    }
}

#[async_trait]
impl Decider for EqualityDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        _witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        memoize(
            self.cache.as_ref(),
            Property::new(self.id, input.to_vec()),
            options.no_cache,
            || {
                let EqualityInput { a, b } = EqualityInput::decode(input)
                    .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
                Ok(a == b)
            },
        )
    }
}
