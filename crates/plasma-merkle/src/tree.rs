//! Merkle interval tree construction, inclusion proofs and bound recovery.

use plasma_primitives::{Hash32, Range, U256};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MerkleError, ProofFailure};
use crate::node::{parent, TreeNode};

/// Levels narrower than this are always reduced on the calling thread
const PARALLEL_THRESHOLD: usize = 1024;
/// Smallest number of pairs handed to one rayon task
const MIN_PAIRS_PER_TASK: usize = 256;

/// Immutable Merkle interval tree over leaves with strictly increasing lower bounds
#[derive(Debug, Clone)]
pub struct MerkleIntervalTree {
    /// Levels from the leaves up to the root; odd levels are stored with their sentinel padding
    levels: Vec<Vec<TreeNode>>,
    leaf_count: usize,
}

/// Sibling path proving a leaf's inclusion and its implicit upper bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Position of the leaf among the tree's leaves
    pub leaf_position: u64,
    /// Full sibling nodes, bottom-up
    pub siblings: Vec<TreeNode>,
}

/// Outcome of a successful proof verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveredBounds {
    /// Root recomputed from the leaf and the sibling path
    pub root: TreeNode,
    /// Exclusive bound up to which no other leaf of the tree claims territory
    pub upper_bound: U256,
}

impl MerkleIntervalTree {
    /// Build a tree from `(data, lower_bound)` leaves in ascending bound order
    pub fn new<D: AsRef<[u8]>>(
        leaves: impl IntoIterator<Item = (D, U256)>,
    ) -> Result<Self, MerkleError> {
        Self::from_nodes(hash_leaves(leaves))
    }

    /// Same as [`MerkleIntervalTree::new`], reducing wide levels on the rayon thread pool.
    /// The resulting tree is identical to the sequential one.
    pub fn new_parallel<D: AsRef<[u8]>>(
        leaves: impl IntoIterator<Item = (D, U256)>,
    ) -> Result<Self, MerkleError> {
        Self::build(hash_leaves(leaves), true)
    }

    /// Build a tree from already hashed leaf nodes
    pub fn from_nodes(leaves: Vec<TreeNode>) -> Result<Self, MerkleError> {
        Self::build(leaves, false)
    }

    fn build(leaves: Vec<TreeNode>, parallel: bool) -> Result<Self, MerkleError> {
        validate_leaves(&leaves)?;
        let leaf_count = leaves.len();

        let mut levels = Vec::new();
        let mut level = leaves;
        while level.len() > 1 {
            if level.len() % 2 == 1 {
                level.push(TreeNode::sentinel());
            }
            let next = reduce_level(&level, parallel)?;
            levels.push(level);
            level = next;
        }
        levels.push(level);

        debug!(
            "Built interval tree with {} leaves and depth {}",
            leaf_count,
            levels.len() - 1
        );
        Ok(Self { levels, leaf_count })
    }

    pub fn root(&self) -> TreeNode {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of sibling steps from a leaf to the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels from the leaves to the root, including sentinel padding
    pub fn levels(&self) -> &[Vec<TreeNode>] {
        &self.levels
    }

    pub fn leaf(&self, index: usize) -> Option<&TreeNode> {
        self.levels[0][..self.leaf_count].get(index)
    }

    /// Generate the inclusion proof for the leaf at `leaf_index`
    pub fn inclusion_proof(&self, leaf_index: usize) -> Result<InclusionProof, MerkleError> {
        if leaf_index >= self.leaf_count {
            return Err(MerkleError::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count: self.leaf_count,
            });
        }

        let mut index = leaf_index;
        let siblings = self.levels[..self.depth()]
            .iter()
            .map(|level| {
                let sibling = level[index ^ 1];
                index /= 2;
                sibling
            })
            .collect();

        Ok(InclusionProof {
            leaf_position: leaf_index as u64,
            siblings,
        })
    }
}

fn hash_leaves<D: AsRef<[u8]>>(leaves: impl IntoIterator<Item = (D, U256)>) -> Vec<TreeNode> {
    leaves
        .into_iter()
        .map(|(data, lower_bound)| TreeNode::leaf(data.as_ref(), lower_bound))
        .collect()
}

fn validate_leaves(leaves: &[TreeNode]) -> Result<(), MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::Construction("empty leaf set".to_string()));
    }
    for (i, pair) in leaves.windows(2).enumerate() {
        if pair[0].lower_bound >= pair[1].lower_bound {
            return Err(MerkleError::Construction(format!(
                "leaf bounds not strictly increasing: leaf {} has bound {}, leaf {} has bound {}",
                i,
                pair[0].lower_bound,
                i + 1,
                pair[1].lower_bound
            )));
        }
    }
    // The maximum bound is reserved for sentinel padding
    if let Some(last) = leaves.last() {
        if last.lower_bound == U256::MAX {
            return Err(MerkleError::Construction(
                "leaf bound equals the reserved sentinel bound".to_string(),
            ));
        }
    }
    Ok(())
}

fn reduce_level(level: &[TreeNode], parallel: bool) -> Result<Vec<TreeNode>, MerkleError> {
    if !parallel || level.len() < PARALLEL_THRESHOLD {
        return level
            .chunks_exact(2)
            .map(|pair| parent(&pair[0], &pair[1]))
            .collect();
    }

    level
        .par_chunks_exact(2)
        .with_min_len(MIN_PAIRS_PER_TASK)
        .map(|pair| parent(&pair[0], &pair[1]))
        .collect()
}

/// Recompute the root from `leaf` and `proof`, and recover the leaf's implicit upper bound.
///
/// The bits of `leaf_position` select, bottom-up, whether the current node is the left (0) or
/// right (1) child. The smallest bound among the right siblings is the upper bound; with no
/// right sibling the leaf extends to `U256::MAX`.
pub fn verify_and_recover_bounds(
    leaf: &TreeNode,
    proof: &InclusionProof,
    claimed_root: &Hash32,
) -> Result<RecoveredBounds, MerkleError> {
    let depth = proof.siblings.len();
    if proof.leaf_position.checked_shr(depth as u32).unwrap_or(0) != 0 {
        return Err(ProofFailure::PositionOutOfRange {
            position: proof.leaf_position,
            depth,
        }
        .into());
    }

    let mut current = *leaf;
    let mut upper_bound = U256::MAX;
    let mut path = proof.leaf_position;

    for sibling in &proof.siblings {
        current = if path & 1 == 0 {
            upper_bound = upper_bound.min(sibling.lower_bound);
            parent(&current, sibling)?
        } else {
            parent(sibling, &current)?
        };
        path >>= 1;
    }

    if current.hash != *claimed_root {
        return Err(ProofFailure::RootMismatch {
            claimed: *claimed_root,
            computed: current.hash,
        }
        .into());
    }

    Ok(RecoveredBounds {
        root: current,
        upper_bound,
    })
}

/// Verify that `leaf` is committed under `claimed_root` and that its implicit bounds cover
/// `range`: the range must start at the leaf's bound and end no later than the upper bound.
pub fn verify_range_inclusion(
    leaf: &TreeNode,
    range: &Range,
    proof: &InclusionProof,
    claimed_root: &Hash32,
) -> Result<RecoveredBounds, MerkleError> {
    if range.start != leaf.lower_bound {
        return Err(ProofFailure::StartMismatch {
            range_start: range.start,
            lower_bound: leaf.lower_bound,
        }
        .into());
    }
    let bounds = verify_and_recover_bounds(leaf, proof, claimed_root)?;
    if range.end > bounds.upper_bound {
        return Err(ProofFailure::BoundExceeded {
            range_end: range.end,
            upper_bound: bounds.upper_bound,
        }
        .into());
    }
    Ok(bounds)
}
