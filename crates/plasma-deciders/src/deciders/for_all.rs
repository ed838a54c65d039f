use std::sync::Weak;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::debug;

use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::{ForAllInput, ForAllWitness};
use crate::property::{get_decision, Decision, DeciderId};
use crate::registry::{upgrade, DeciderRegistry};

/// Conjunction over a list of properties, the N-ary form of [`AndDecider`](super::AndDecider)
pub struct ForAllDecider {
    id: DeciderId,
    registry: Weak<DeciderRegistry>,
}

impl ForAllDecider {
    pub fn new(id: DeciderId, registry: Weak<DeciderRegistry>) -> Self {
        Self { id, registry }
    }
}

#[async_trait]
impl Decider for ForAllDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        let ForAllInput { properties } = ForAllInput::decode(input)
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let ForAllWitness { witnesses } = ForAllWitness::decode(witness, properties.len())
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let registry = upgrade(&self.registry, self.id, input)?;

        let branches = properties.iter().zip(witnesses.iter()).map(|(property, witness)| {
            registry.decide_property(property, witness.as_deref(), options.nested())
        });
        // Errors surface in index order, like the first false branch
        let decisions = join_all(branches)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        debug!("FORALL decided {} branches", decisions.len());

        let mut justification = Vec::new();
        for decision in decisions {
            if !decision.outcome {
                return Ok(decision);
            }
            justification.extend(decision.justification);
        }
        Ok(get_decision(
            self.id,
            input,
            None,
            Decision::new(true, justification),
        ))
    }
}
