use std::sync::Weak;

use async_trait::async_trait;

use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::NotInput;
use crate::property::{get_decision, Decision, DeciderId};
use crate::registry::{upgrade, DeciderRegistry};

/// Negation of a property. The witness is handed to the inner property unchanged.
pub struct NotDecider {
    id: DeciderId,
    registry: Weak<DeciderRegistry>,
}

impl NotDecider {
    pub fn new(id: DeciderId, registry: Weak<DeciderRegistry>) -> Self {
        Self { id, registry }
    }
}

#[async_trait]
impl Decider for NotDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        let NotInput { property } = NotInput::decode(input)
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let registry = upgrade(&self.registry, self.id, input)?;

        let inner = registry
            .decide_property(&property, witness, options.nested())
            .await?;
        let negated = Decision::new(!inner.outcome, inner.justification);
        Ok(get_decision(self.id, input, None, negated))
    }
}
