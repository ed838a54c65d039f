//! Properties, decisions and the justification chain.

use plasma_primitives::sol::{from_sol_address, to_sol_address, to_sol_bytes, SolAddress, SolBytes, SolValue};
use plasma_primitives::{keccak256, Address, DecodeError};
use serde::{Deserialize, Serialize};

/// Address of the decider's on-chain counterpart
pub type DeciderId = Address;

/// Canonical id of a built-in decider: the low 20 bytes of `keccak256(name)`
pub fn default_decider_id(name: &str) -> DeciderId {
    Address::from_slice(&keccak256(name.as_bytes()).as_bytes()[12..])
}

/// An assertion to be adjudicated: a decider applied to an encoded input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub decider: DeciderId,
    #[serde(with = "plasma_primitives::serde_hex")]
    pub input: Vec<u8>,
}

impl Property {
    pub fn new(decider: DeciderId, input: Vec<u8>) -> Self {
        Self { decider, input }
    }

    /// `abi.encode(address decider, bytes input)`
    pub fn encode(&self) -> Vec<u8> {
        (to_sol_address(self.decider), to_sol_bytes(&self.input)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (decider, input) = <(SolAddress, SolBytes)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("property", err))?;
        Ok(Self {
            decider: from_sol_address(decider),
            input: input.to_vec(),
        })
    }
}

/// One link of a justification: deciding `implication` reduces to deciding the next item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicationProofItem {
    pub implication: Property,
    #[serde(with = "plasma_primitives::serde_hex::option")]
    pub implication_witness: Option<Vec<u8>>,
}

impl ImplicationProofItem {
    /// `abi.encode(bytes property, bytes witness)`, the shape of one on-chain claim argument;
    /// an absent witness is encoded as empty bytes
    pub fn encode(&self) -> Vec<u8> {
        (
            to_sol_bytes(&self.implication.encode()),
            to_sol_bytes(self.implication_witness.as_deref().unwrap_or_default()),
        )
            .abi_encode_params()
    }
}

/// Outcome of evaluating a property and the chain that justifies it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub outcome: bool,
    pub justification: Vec<ImplicationProofItem>,
}

impl Decision {
    pub fn new(outcome: bool, justification: Vec<ImplicationProofItem>) -> Self {
        Self {
            outcome,
            justification,
        }
    }

    /// Decision of a base fact: a single item naming the property itself
    pub fn atomic(property: Property, witness: Option<Vec<u8>>, outcome: bool) -> Self {
        Self::new(
            outcome,
            vec![ImplicationProofItem {
                implication: property,
                implication_witness: witness,
            }],
        )
    }

    /// Claim items in replay order, one per justification step
    pub fn encode_claim(&self) -> Vec<Vec<u8>> {
        self.justification
            .iter()
            .map(ImplicationProofItem::encode)
            .collect()
    }
}

/// Prepend the step `{decider, input, witness}` to `sub`'s justification, keeping its outcome
pub fn get_decision(
    decider: DeciderId,
    input: &[u8],
    witness: Option<Vec<u8>>,
    sub: Decision,
) -> Decision {
    let mut justification = Vec::with_capacity(sub.justification.len() + 1);
    justification.push(ImplicationProofItem {
        implication: Property::new(decider, input.to_vec()),
        implication_witness: witness,
    });
    justification.extend(sub.justification);
    Decision::new(sub.outcome, justification)
}
