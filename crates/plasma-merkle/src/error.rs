//! Error types for tree construction and proof verification.

use plasma_primitives::{Address, DecodeError, Hash32, U256};
use thiserror::Error;

/// Error types for Merkle interval tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// Malformed leaf set; a block cannot be committed with it
    #[error("Tree construction failed: {0}")]
    Construction(String),
    /// Proof does not reduce to the claimed root or violates a bound
    #[error("Invalid proof: {0}")]
    InvalidProof(#[from] ProofFailure),
    /// Requested a proof for a leaf the tree does not have
    #[error("Leaf index {index} out of range for tree with {leaf_count} leaves")]
    LeafIndexOutOfRange { index: usize, leaf_count: usize },
    /// Requested a proof for a deposit contract the block does not contain
    #[error("Deposit address {0:?} not present in block")]
    UnknownDepositAddress(Address),
    /// Failed to decode a leaf payload
    #[error("Failed to decode leaf: {0}")]
    Decode(#[from] DecodeError),
}

/// Reason an inclusion proof was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofFailure {
    #[error("root mismatch: claimed {claimed:?}, computed {computed:?}")]
    RootMismatch { claimed: Hash32, computed: Hash32 },
    #[error("left child bound {left} is not below right child bound {right}")]
    UnorderedChildren { left: U256, right: U256 },
    #[error("leaf position {position} does not fit a path of depth {depth}")]
    PositionOutOfRange { position: u64, depth: usize },
    #[error("range start {range_start} differs from leaf bound {lower_bound}")]
    StartMismatch { range_start: U256, lower_bound: U256 },
    #[error("range end {range_end} exceeds implicit upper bound {upper_bound}")]
    BoundExceeded { range_end: U256, upper_bound: U256 },
}
