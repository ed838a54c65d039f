//! CLI wrapper for block construction and proof generation

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use plasma_merkle::{PlasmaBlock, StateUpdateInclusionProof};
use plasma_primitives::{Hash32, StateUpdate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::files::{load_json, save_json};

/// CLI arguments for the `prove` subcommand
#[derive(Clone, Debug, Args)]
pub struct ProveArgs {
    /// Path to a JSON array of state updates, sorted by range start per deposit contract
    #[arg(long)]
    pub state_updates_path: PathBuf,
    /// Path to write the block root and inclusion proofs to
    #[arg(long)]
    pub output_path: PathBuf,
}

/// A committed block root with a proof for each of its state updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockProofs {
    pub block_root: Hash32,
    pub proofs: Vec<ProvenStateUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenStateUpdate {
    pub state_update: StateUpdate,
    pub inclusion_proof: StateUpdateInclusionProof,
}

/// Run the `prove` subcommand: build the block and write every update's proof to disk
pub async fn run(args: ProveArgs) -> Result<(), anyhow::Error> {
    let updates: Vec<StateUpdate> = load_json(&args.state_updates_path)?;
    let block_proofs = prove_block(updates)?;
    save_json(&block_proofs, &args.output_path)?;

    println!("{:?}", block_proofs.block_root);
    Ok(())
}

/// Commit `updates` to a block and generate an inclusion proof for each of them,
/// ordered by deposit contract and then by position in its state tree
pub fn prove_block(updates: Vec<StateUpdate>) -> Result<BlockProofs, anyhow::Error> {
    let block = PlasmaBlock::new(updates)?;

    let mut proofs = Vec::new();
    for deposit_address in block.deposit_addresses() {
        let state_tree = block
            .state_tree(deposit_address)
            .ok_or_else(|| anyhow!("No state tree for {:?}", deposit_address))?;
        for (index, state_update) in state_tree.updates().iter().enumerate() {
            proofs.push(ProvenStateUpdate {
                state_update: state_update.clone(),
                inclusion_proof: block.state_update_inclusion_proof(deposit_address, index)?,
            });
        }
    }

    info!("Generated {} inclusion proofs", proofs.len());
    Ok(BlockProofs {
        block_root: block.root().hash,
        proofs,
    })
}
