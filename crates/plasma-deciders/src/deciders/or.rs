use std::sync::Weak;

use async_trait::async_trait;
use tracing::debug;

use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::{BinaryInput, BinaryWitness};
use crate::property::{get_decision, Decision, DeciderId};
use crate::registry::{upgrade, DeciderRegistry};

/// Disjunction of two properties.
///
/// A true outcome is justified by this step followed by the true branch, the left one when
/// both hold. A false outcome needs both refutations: this step followed by both branches.
pub struct OrDecider {
    id: DeciderId,
    registry: Weak<DeciderRegistry>,
}

impl OrDecider {
    pub fn new(id: DeciderId, registry: Weak<DeciderRegistry>) -> Self {
        Self { id, registry }
    }
}

#[async_trait]
impl Decider for OrDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        let BinaryInput { left, right } = BinaryInput::decode(input)
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let witness = BinaryWitness::decode(witness)
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let registry = upgrade(&self.registry, self.id, input)?;

        let (left, right) = tokio::join!(
            registry.decide_property(&left, witness.left.as_deref(), options.nested()),
            registry.decide_property(&right, witness.right.as_deref(), options.nested()),
        );
        let (left, right) = (left?, right?);
        debug!(
            "OR branches decided: left {}, right {}",
            left.outcome, right.outcome
        );

        let sub = match (left.outcome, right.outcome) {
            (true, _) => left,
            (false, true) => right,
            (false, false) => {
                let mut justification = left.justification;
                justification.extend(right.justification);
                Decision::new(false, justification)
            }
        };
        Ok(get_decision(self.id, input, None, sub))
    }
}
