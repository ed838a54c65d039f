//! Solidity `abi.encode` compatible encodings on top of `alloy-sol-types`.
//!
//! Domain values keep their `primitive-types` representation and are converted to alloy's
//! Solidity types here. Decoding always validates: alloy re-encodes the decoded value and
//! rejects input that is not byte-identical, so every value has exactly one accepted
//! encoding.

pub use alloy_primitives::{Address as SolAddress, Bytes as SolBytes, B256 as SolBytes32, U256 as SolUint};
pub use alloy_sol_types::SolValue;

use crate::hash::{u256_to_word, Address, Hash32, U256};

pub fn to_sol_uint(value: U256) -> SolUint {
    SolUint::from_be_bytes(u256_to_word(value))
}

pub fn from_sol_uint(value: SolUint) -> U256 {
    U256::from_big_endian(&value.to_be_bytes::<32>())
}

pub fn to_sol_address(address: Address) -> SolAddress {
    SolAddress::from(address.0)
}

pub fn from_sol_address(address: SolAddress) -> Address {
    Address::from_slice(address.as_slice())
}

pub fn to_sol_bytes32(hash: Hash32) -> SolBytes32 {
    SolBytes32::from(hash.0)
}

pub fn from_sol_bytes32(hash: SolBytes32) -> Hash32 {
    Hash32::from_slice(hash.as_slice())
}

pub fn to_sol_bytes(bytes: &[u8]) -> SolBytes {
    SolBytes::copy_from_slice(bytes)
}
