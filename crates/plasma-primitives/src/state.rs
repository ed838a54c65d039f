//! State objects and state updates with their canonical encodings

use serde::{Deserialize, Serialize};

use crate::sol::{
    from_sol_address, from_sol_uint, to_sol_address, to_sol_bytes, to_sol_uint, SolAddress,
    SolBytes, SolUint, SolValue,
};
use crate::{keccak256, Address, DecodeError, Hash32, Range, U256};

/// The predicate contract that governs a range plus its opaque parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateObject {
    pub predicate_address: Address,
    #[serde(with = "crate::serde_hex")]
    pub data: Vec<u8>,
}

impl StateObject {
    pub fn new(predicate_address: Address, data: Vec<u8>) -> Self {
        Self {
            predicate_address,
            data,
        }
    }

    /// `abi.encode(address predicateAddress, bytes data)`
    pub fn encode(&self) -> Vec<u8> {
        (to_sol_address(self.predicate_address), to_sol_bytes(&self.data)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (predicate_address, data) = <(SolAddress, SolBytes)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("state object", err))?;
        Ok(Self {
            predicate_address: from_sol_address(predicate_address),
            data: data.to_vec(),
        })
    }
}

/// Ownership of `range` is governed by `state_object` as of `plasma_block_number`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateUpdate {
    pub state_object: StateObject,
    pub range: Range,
    pub plasma_block_number: U256,
    pub deposit_address: Address,
}

impl StateUpdate {
    /// `abi.encode(bytes stateObject, bytes range, uint256 plasmaBlockNumber, address depositAddress)`
    /// where the nested members use their own canonical encodings
    pub fn encode(&self) -> Vec<u8> {
        (
            to_sol_bytes(&self.state_object.encode()),
            to_sol_bytes(&self.range.encode()),
            to_sol_uint(self.plasma_block_number),
            to_sol_address(self.deposit_address),
        )
            .abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (state_object, range, plasma_block_number, deposit_address) =
            <(SolBytes, SolBytes, SolUint, SolAddress)>::abi_decode_params(data, true)
                .map_err(|err| DecodeError::abi("state update", err))?;
        Ok(Self {
            state_object: StateObject::decode(&state_object)?,
            range: Range::decode(&range)?,
            plasma_block_number: from_sol_uint(plasma_block_number),
            deposit_address: from_sol_address(deposit_address),
        })
    }

    /// Hash of the canonical encoding, i.e. the leaf hash in a state tree
    pub fn hash(&self) -> Hash32 {
        keccak256(&self.encode())
    }
}
