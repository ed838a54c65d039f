//! Merkle interval trees for Plasma blocks
//!
//! A Merkle interval tree is a binary Merkle tree whose nodes carry, next to their hash, the
//! lower bound of the left-most leaf beneath them. An inclusion proof therefore proves two
//! things at once: that a leaf is committed under a root, and that no other leaf claims any
//! part of the gap between the leaf's own bound and its implicit upper bound.
//!
//! [`StateTree`] specializes the tree to state updates keyed by range start, and
//! [`PlasmaBlock`] stacks one state tree per deposit contract under an address tree.

pub mod block;
pub mod error;
pub mod node;
pub mod state_tree;
pub mod tree;

pub use block::{PlasmaBlock, StateUpdateInclusionProof};
pub use error::{MerkleError, ProofFailure};
pub use node::{parent, TreeNode};
pub use state_tree::StateTree;
pub use tree::{
    verify_and_recover_bounds, verify_range_inclusion, InclusionProof, MerkleIntervalTree,
    RecoveredBounds,
};
