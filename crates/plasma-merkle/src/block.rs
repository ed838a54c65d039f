//! Two-level Plasma block: an address tree over per-deposit-contract state trees.
//!
//! Each deposit contract gets its own [`StateTree`]. The block root is the root of an interval
//! tree whose leaves are the state tree roots, keyed by the deposit contract address widened
//! to the numeric key space.

use std::collections::BTreeMap;

use plasma_primitives::{address_to_u256, Address, Hash32, StateUpdate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MerkleError;
use crate::node::TreeNode;
use crate::state_tree::StateTree;
use crate::tree::{verify_and_recover_bounds, InclusionProof, MerkleIntervalTree, RecoveredBounds};

/// Committed set of state updates of one Plasma block
#[derive(Debug, Clone)]
pub struct PlasmaBlock {
    state_trees: BTreeMap<Address, StateTree>,
    address_tree: MerkleIntervalTree,
}

/// Proof that a state update is part of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdateInclusionProof {
    /// Root hash of the deposit contract's state tree
    pub state_tree_root: Hash32,
    /// Path from the state update to the state tree root
    pub state_tree_proof: InclusionProof,
    /// Path from the state tree root to the block root
    pub address_tree_proof: InclusionProof,
}

impl PlasmaBlock {
    /// Build a block from state updates already sorted by range start within each deposit
    /// contract
    pub fn new(updates: Vec<StateUpdate>) -> Result<Self, MerkleError> {
        let mut grouped: BTreeMap<Address, Vec<StateUpdate>> = BTreeMap::new();
        for update in updates {
            grouped.entry(update.deposit_address).or_default().push(update);
        }

        let mut state_trees = BTreeMap::new();
        for (deposit_address, updates) in grouped {
            debug!(
                "Building state tree for {:?} with {} updates",
                deposit_address,
                updates.len()
            );
            state_trees.insert(deposit_address, StateTree::new(updates)?);
        }

        let address_leaves = state_trees
            .iter()
            .map(|(address, tree)| TreeNode::new(tree.root().hash, address_to_u256(*address)))
            .collect();
        let address_tree = MerkleIntervalTree::from_nodes(address_leaves)?;

        info!(
            "Built Plasma block with {} deposit contracts, root {:?}",
            state_trees.len(),
            address_tree.root().hash
        );
        Ok(Self {
            state_trees,
            address_tree,
        })
    }

    pub fn root(&self) -> TreeNode {
        self.address_tree.root()
    }

    pub fn state_tree(&self, deposit_address: &Address) -> Option<&StateTree> {
        self.state_trees.get(deposit_address)
    }

    pub fn deposit_addresses(&self) -> impl Iterator<Item = &Address> {
        self.state_trees.keys()
    }

    /// Generate the two-level proof for the `index`-th update of `deposit_address`
    pub fn state_update_inclusion_proof(
        &self,
        deposit_address: &Address,
        index: usize,
    ) -> Result<StateUpdateInclusionProof, MerkleError> {
        let (address_index, state_tree) = self
            .state_trees
            .iter()
            .enumerate()
            .find_map(|(i, (address, tree))| (address == deposit_address).then_some((i, tree)))
            .ok_or(MerkleError::UnknownDepositAddress(*deposit_address))?;

        Ok(StateUpdateInclusionProof {
            state_tree_root: state_tree.root().hash,
            state_tree_proof: state_tree.state_update_inclusion_proof(index)?,
            address_tree_proof: self.address_tree.inclusion_proof(address_index)?,
        })
    }

    /// Verify a state update against a block root.
    ///
    /// Returns the block root node and the update's upper bound within its state tree.
    pub fn verify_state_update_inclusion(
        update: &StateUpdate,
        proof: &StateUpdateInclusionProof,
        block_root: &Hash32,
    ) -> Result<RecoveredBounds, MerkleError> {
        let state_bounds =
            StateTree::verify_state_update(update, &proof.state_tree_proof, &proof.state_tree_root)?;

        let address_leaf = TreeNode::new(
            proof.state_tree_root,
            address_to_u256(update.deposit_address),
        );
        let block_bounds =
            verify_and_recover_bounds(&address_leaf, &proof.address_tree_proof, block_root)?;

        Ok(RecoveredBounds {
            root: block_bounds.root,
            upper_bound: state_bounds.upper_bound,
        })
    }
}
