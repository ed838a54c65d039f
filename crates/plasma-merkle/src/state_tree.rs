//! Interval tree over the state updates of one deposit contract

use plasma_primitives::{Hash32, StateUpdate};

use crate::error::MerkleError;
use crate::node::TreeNode;
use crate::tree::{verify_range_inclusion, InclusionProof, MerkleIntervalTree, RecoveredBounds};

/// Tree whose leaves are canonical state update encodings keyed by range start.
///
/// Range disjointness is the producer's responsibility; an update whose range runs into the
/// next leaf's start simply fails verification.
#[derive(Debug, Clone)]
pub struct StateTree {
    updates: Vec<StateUpdate>,
    tree: MerkleIntervalTree,
}

impl StateTree {
    pub fn new(updates: Vec<StateUpdate>) -> Result<Self, MerkleError> {
        let tree = MerkleIntervalTree::from_nodes(updates.iter().map(state_update_leaf).collect())?;
        Ok(Self { updates, tree })
    }

    pub fn root(&self) -> TreeNode {
        self.tree.root()
    }

    pub fn tree(&self) -> &MerkleIntervalTree {
        &self.tree
    }

    pub fn updates(&self) -> &[StateUpdate] {
        &self.updates
    }

    pub fn position_of(&self, update: &StateUpdate) -> Option<usize> {
        self.updates.iter().position(|u| u == update)
    }

    pub fn state_update_inclusion_proof(&self, index: usize) -> Result<InclusionProof, MerkleError> {
        self.tree.inclusion_proof(index)
    }

    /// Verify `update` against a state tree root and return its recovered bounds
    pub fn verify_state_update(
        update: &StateUpdate,
        proof: &InclusionProof,
        root: &Hash32,
    ) -> Result<RecoveredBounds, MerkleError> {
        verify_range_inclusion(&state_update_leaf(update), &update.range, proof, root)
    }
}

/// Leaf committing to a state update: hash of its encoding at its range start
pub fn state_update_leaf(update: &StateUpdate) -> TreeNode {
    TreeNode::new(update.hash(), update.range.start)
}
