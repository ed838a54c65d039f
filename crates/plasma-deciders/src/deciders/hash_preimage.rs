use async_trait::async_trait;
use plasma_primitives::keccak256;
use tracing::debug;

use crate::decider::{DecideOptions, Decider};
use crate::error::DeciderError;
use crate::inputs::HashPreimageInput;
use crate::property::{Decision, DeciderId, Property};

/// Decides that a preimage of a keccak256 hash is known, the witness being the preimage.
///
/// Only a positive outcome can be decided: a wrong preimage says nothing about whether a
/// right one exists, so it leaves the property unresolved. Decisions are never cached
/// because they depend on the witness.
pub struct HashPreimageExistenceDecider {
    id: DeciderId,
}

impl HashPreimageExistenceDecider {
    pub fn new(id: DeciderId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Decider for HashPreimageExistenceDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        _options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        let HashPreimageInput { hash } = HashPreimageInput::decode(input)
            .map_err(|e| DeciderError::invalid_input(self.id, input, e))?;
        let preimage = witness.ok_or_else(|| {
            DeciderError::invalid_input(self.id, input, "missing preimage witness")
        })?;

        if keccak256(preimage) != hash {
            debug!("Preimage witness does not hash to {:?}", hash);
            return Err(DeciderError::unresolved(
                self.id,
                input,
                "witness is not a preimage of the hash",
            ));
        }
        Ok(Decision::atomic(
            Property::new(self.id, input.to_vec()),
            Some(preimage.to_vec()),
            true,
        ))
    }
}
