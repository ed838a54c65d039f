use async_trait::async_trait;

use crate::cache::{memoize, DecisionCache};
use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::MessageNonceLessThanInput;
use crate::property::{Decision, DeciderId, Property};

/// Decides whether a channel message carries a nonce below a bound
pub struct MessageNonceLessThanDecider {
    id: DeciderId,
    cache: Option<DecisionCache>,
}

impl MessageNonceLessThanDecider {
    pub fn new(id: DeciderId, cache: Option<DecisionCache>) -> Self {
        Self { id, cache }
    }
}

#[async_trait]
impl Decider for MessageNonceLessThanDecider {
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
                let MessageNonceLessThanInput { message, less_than } =
                    MessageNonceLessThanInput::decode(input)
                        .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
                Ok(message.nonce < less_than)
            },
        )
    }
}
