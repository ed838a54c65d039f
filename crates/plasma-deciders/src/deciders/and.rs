use std::sync::Weak;

use async_trait::async_trait;
use tracing::debug;

use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::{BinaryInput, BinaryWitness};
use crate::property::{get_decision, Decision, DeciderId};
use crate::registry::{upgrade, DeciderRegistry};

/// Conjunction of two properties.
///
/// Both branches are evaluated concurrently and always to completion. A false branch is the
/// whole justification of a false outcome, the left one when both are false. A true outcome
/// is justified by this step followed by both branch justifications.
pub struct AndDecider {
    id: DeciderId,
    registry: Weak<DeciderRegistry>,
}

impl AndDecider {
    pub fn new(id: DeciderId, registry: Weak<DeciderRegistry>) -> Self {
        Self { id, registry }
    }
}

#[async_trait]
impl Decider for AndDecider {
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
            "AND branches decided: left {}, right {}",
            left.outcome, right.outcome
        );

        if !left.outcome {
            return Ok(left);
        }
        if !right.outcome {
            return Ok(right);
        }

        let mut justification = left.justification;
        justification.extend(right.justification);
        Ok(get_decision(
            self.id,
            input,
            None,
            Decision::new(true, justification),
        ))
    }
}
