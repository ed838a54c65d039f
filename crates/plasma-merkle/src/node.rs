//! Tree nodes and the parent combination rule

use plasma_primitives::{keccak256, keccak256_concat, u256_to_word, Hash32, U256};
use serde::{Deserialize, Serialize};

use crate::error::{MerkleError, ProofFailure};

/// A node of a Merkle interval tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeNode {
    pub hash: Hash32,
    pub lower_bound: U256,
}

impl TreeNode {
    pub fn new(hash: Hash32, lower_bound: U256) -> Self {
        Self { hash, lower_bound }
    }

    /// Leaf node committing to `data` at `lower_bound`
    pub fn leaf(data: &[u8], lower_bound: U256) -> Self {
        Self::new(keccak256(data), lower_bound)
    }

    /// Padding node for odd levels.
    ///
    /// Its bound is the maximum of the key space, so as a right sibling it never tightens the
    /// recovered upper bound of a real leaf.
    pub fn sentinel() -> Self {
        Self::new(keccak256(&[]), U256::MAX)
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

/// Combine two children into their parent.
///
/// The parent inherits the left child's bound; its hash commits to both children and both
/// bounds: `keccak256(left.hash || left.lower_bound || right.hash || right.lower_bound)`, with
/// bounds as 32-byte big-endian words.
pub fn parent(left: &TreeNode, right: &TreeNode) -> Result<TreeNode, MerkleError> {
    if left.lower_bound >= right.lower_bound {
        return Err(ProofFailure::UnorderedChildren {
            left: left.lower_bound,
            right: right.lower_bound,
        }
        .into());
    }
    let hash = keccak256_concat(&[
        left.hash.as_bytes(),
        &u256_to_word(left.lower_bound),
        right.hash.as_bytes(),
        &u256_to_word(right.lower_bound),
    ]);
    Ok(TreeNode::new(hash, left.lower_bound))
}
