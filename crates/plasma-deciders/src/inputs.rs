//! Typed decider inputs and witnesses with their canonical encodings.
//!
//! Every input is decoded with alloy's validating `abi_decode_params`, so two inputs denote
//! the same property exactly when their bytes are equal. This is what makes the decision
//! cache key `(decider, input)` sound.

use plasma_primitives::sol::{
    from_sol_address, from_sol_bytes32, from_sol_uint, to_sol_address, to_sol_bytes,
    to_sol_bytes32, to_sol_uint, SolAddress, SolBytes, SolBytes32, SolUint, SolValue,
};
use plasma_primitives::{Address, DecodeError, Hash32, U256};

use crate::property::Property;

/// `(bool present, bytes data)`, one per branch of a composite witness
type WitnessSlot = (bool, SolBytes);

fn to_witness_slot(witness: &Option<Vec<u8>>) -> WitnessSlot {
    match witness {
        Some(data) => (true, to_sol_bytes(data)),
        None => (false, SolBytes::new()),
    }
}

fn from_witness_slot(
    (present, data): WitnessSlot,
    what: &'static str,
) -> Result<Option<Vec<u8>>, DecodeError> {
    match (present, data.is_empty()) {
        (true, _) => Ok(Some(data.to_vec())),
        (false, true) => Ok(None),
        (false, false) => Err(DecodeError::NonCanonical { what }),
    }
}

/// Input of the two-branch composites: `abi.encode(bytes leftProperty, bytes rightProperty)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryInput {
    pub left: Property,
    pub right: Property,
}

impl BinaryInput {
    pub fn new(left: Property, right: Property) -> Self {
        Self { left, right }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_bytes(&self.left.encode()), to_sol_bytes(&self.right.encode())).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (left, right) = <(SolBytes, SolBytes)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("binary input", err))?;
        Ok(Self {
            left: Property::decode(&left)?,
            right: Property::decode(&right)?,
        })
    }
}

/// Witness of the two-branch composites:
/// `abi.encode((bool, bytes) leftWitness, (bool, bytes) rightWitness)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryWitness {
    pub left: Option<Vec<u8>>,
    pub right: Option<Vec<u8>>,
}

impl BinaryWitness {
    pub fn encode(&self) -> Vec<u8> {
        (to_witness_slot(&self.left), to_witness_slot(&self.right)).abi_encode_params()
    }

    /// Decode an optional witness blob; `None` yields no witness for either branch
    pub fn decode(data: Option<&[u8]>) -> Result<Self, DecodeError> {
        let Some(data) = data else {
            return Ok(Self::default());
        };
        let (left, right) = <(WitnessSlot, WitnessSlot)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("binary witness", err))?;
        Ok(Self {
            left: from_witness_slot(left, "binary witness")?,
            right: from_witness_slot(right, "binary witness")?,
        })
    }
}

/// Input of the N-ary conjunction: `abi.encode(bytes[] properties)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForAllInput {
    pub properties: Vec<Property>,
}

impl ForAllInput {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn encode(&self) -> Vec<u8> {
        let properties: Vec<SolBytes> = self
            .properties
            .iter()
            .map(|property| to_sol_bytes(&property.encode()))
            .collect();
        (properties,).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (properties,) = <(Vec<SolBytes>,)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("for-all input", err))?;
        let properties = properties
            .iter()
            .map(|bytes| Property::decode(bytes))
            .collect::<Result<_, _>>()?;
        Ok(Self { properties })
    }
}

/// Witness of the N-ary conjunction: `abi.encode((bool, bytes)[] witnesses)`, one per property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForAllWitness {
    pub witnesses: Vec<Option<Vec<u8>>>,
}

impl ForAllWitness {
    pub fn encode(&self) -> Vec<u8> {
        let slots: Vec<WitnessSlot> = self.witnesses.iter().map(to_witness_slot).collect();
        (slots,).abi_encode_params()
    }

    /// Decode the witness for `count` properties; `None` yields no witness for any of them
    pub fn decode(data: Option<&[u8]>, count: usize) -> Result<Self, DecodeError> {
        let Some(data) = data else {
            return Ok(Self {
                witnesses: vec![None; count],
            });
        };
        let (slots,) = <(Vec<WitnessSlot>,)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("for-all witness", err))?;
        if slots.len() != count {
            return Err(DecodeError::LengthMismatch {
                what: "for-all witness",
                expected: count,
                actual: slots.len(),
            });
        }
        let witnesses = slots
            .into_iter()
            .map(|slot| from_witness_slot(slot, "for-all witness"))
            .collect::<Result<_, _>>()?;
        Ok(Self { witnesses })
    }
}

/// Input of the negation: `abi.encode(bytes property)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInput {
    pub property: Property,
}

impl NotInput {
    pub fn new(property: Property) -> Self {
        Self { property }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_bytes(&self.property.encode()),).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (property,) = <(SolBytes,)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("not input", err))?;
        Ok(Self {
            property: Property::decode(&property)?,
        })
    }
}

/// `abi.encode(bytes a, bytes b)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityInput {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

impl EqualityInput {
    pub fn new(a: Vec<u8>, b: Vec<u8>) -> Self {
        Self { a, b }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_bytes(&self.a), to_sol_bytes(&self.b)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (a, b) = <(SolBytes, SolBytes)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("equality input", err))?;
        Ok(Self {
            a: a.to_vec(),
            b: b.to_vec(),
        })
    }
}

/// `abi.encode(uint256 lhs, uint256 rhs)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonInput {
    pub lhs: U256,
    pub rhs: U256,
}

impl ComparisonInput {
    pub fn new(lhs: U256, rhs: U256) -> Self {
        Self { lhs, rhs }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_uint(self.lhs), to_sol_uint(self.rhs)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (lhs, rhs) = <(SolUint, SolUint)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("comparison input", err))?;
        Ok(Self {
            lhs: from_sol_uint(lhs),
            rhs: from_sol_uint(rhs),
        })
    }
}

/// A state channel message: `abi.encode(address channelId, uint256 nonce, bytes data)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub channel_id: Address,
    pub nonce: U256,
    pub data: Vec<u8>,
}

impl Message {
    pub fn new(channel_id: Address, nonce: U256, data: Vec<u8>) -> Self {
        Self {
            channel_id,
            nonce,
            data,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        (
            to_sol_address(self.channel_id),
            to_sol_uint(self.nonce),
            to_sol_bytes(&self.data),
        )
            .abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (channel_id, nonce, data) =
            <(SolAddress, SolUint, SolBytes)>::abi_decode_params(data, true)
                .map_err(|err| DecodeError::abi("message", err))?;
        Ok(Self {
            channel_id: from_sol_address(channel_id),
            nonce: from_sol_uint(nonce),
            data: data.to_vec(),
        })
    }
}

/// `abi.encode(bytes message, uint256 lessThan)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNonceLessThanInput {
    pub message: Message,
    pub less_than: U256,
}

impl MessageNonceLessThanInput {
    pub fn new(message: Message, less_than: U256) -> Self {
        Self { message, less_than }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_bytes(&self.message.encode()), to_sol_uint(self.less_than)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (message, less_than) = <(SolBytes, SolUint)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("message nonce input", err))?;
        Ok(Self {
            message: Message::decode(&message)?,
            less_than: from_sol_uint(less_than),
        })
    }
}

/// `abi.encode(bytes32 hash)`; the witness is the preimage itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashPreimageInput {
    pub hash: Hash32,
}

impl HashPreimageInput {
    pub fn new(hash: Hash32) -> Self {
        Self { hash }
    }

    pub fn encode(&self) -> Vec<u8> {
        (to_sol_bytes32(self.hash),).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (hash,) = <(SolBytes32,)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("hash preimage input", err))?;
        Ok(Self {
            hash: from_sol_bytes32(hash),
        })
    }
}
