//! Domain primitives shared by the Plasma merkle and decider crates
//!
//! This crate provides the hash function, the Solidity `abi.encode` conversions and
//! the canonical encodings of the objects that become tree leaves or decider inputs.
//! Every encoding here must match what the on-chain verifier re-derives byte for byte.

pub mod error;
pub mod hash;
pub mod range;
pub mod serde_hex;
pub mod sol;
pub mod state;

pub use error::DecodeError;
pub use hash::{address_to_u256, keccak256, keccak256_concat, u256_to_word, Address, Hash32, U256};
pub use range::Range;
pub use state::{StateObject, StateUpdate};
