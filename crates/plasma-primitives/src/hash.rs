//! Protocol hash function and fixed-width value helpers.

use tiny_keccak::{Hasher, Keccak};

pub use primitive_types::{H160 as Address, H256 as Hash32, U256};

/// Compute the keccak256 digest of `data`
pub fn keccak256(data: &[u8]) -> Hash32 {
    keccak256_concat(&[data])
}

/// Compute the keccak256 digest of the concatenation of `parts` without allocating
pub fn keccak256_concat(parts: &[&[u8]]) -> Hash32 {
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    Hash32(out)
}

/// Big-endian 32-byte word of a U256
pub fn u256_to_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Widen an address to the numeric key space (used as the lower bound of address-tree leaves)
pub fn address_to_u256(address: Address) -> U256 {
    U256::from_big_endian(address.as_bytes())
}
