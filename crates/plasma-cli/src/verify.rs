//! CLI wrapper for inclusion proof verification

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use plasma_merkle::PlasmaBlock;
use plasma_primitives::{serde_hex, Hash32, U256};
use tracing::info;

use crate::files::load_json;
use crate::prove::BlockProofs;

/// CLI arguments for the `verify` subcommand
#[derive(Clone, Debug, Args)]
pub struct VerifyArgs {
    /// Path to a proofs file written by `prove`
    #[arg(long)]
    pub proofs_path: PathBuf,
    /// Block root to verify against instead of the one in the proofs file
    #[arg(long, value_parser = parse_hash)]
    pub block_root: Option<Hash32>,
}

fn parse_hash(s: &str) -> Result<Hash32, hex::FromHexError> {
    let bytes = serde_hex::from_hex(s)?;
    if bytes.len() != 32 {
        return Err(hex::FromHexError::InvalidStringLength);
    }
    Ok(Hash32::from_slice(&bytes))
}

/// Run the `verify` subcommand: check every proof and print the recovered upper bounds
pub async fn run(args: VerifyArgs) -> Result<(), anyhow::Error> {
    let block_proofs: BlockProofs = load_json(&args.proofs_path)?;
    let block_root = args.block_root.unwrap_or(block_proofs.block_root);

    let upper_bounds = verify_block_proofs(&block_proofs, &block_root)?;
    for (proven, upper_bound) in block_proofs.proofs.iter().zip(upper_bounds) {
        let update = &proven.state_update;
        println!(
            "{:?} [{}, {}) upper bound {}",
            update.deposit_address, update.range.start, update.range.end, upper_bound
        );
    }
    Ok(())
}

/// Verify each proof of `block_proofs` against `block_root`, returning the upper bounds
/// recovered for the updates in order. The first failure names the offending proof and root.
pub fn verify_block_proofs(
    block_proofs: &BlockProofs,
    block_root: &Hash32,
) -> Result<Vec<U256>, anyhow::Error> {
    let mut upper_bounds = Vec::with_capacity(block_proofs.proofs.len());
    for (index, proven) in block_proofs.proofs.iter().enumerate() {
        let bounds = PlasmaBlock::verify_state_update_inclusion(
            &proven.state_update,
            &proven.inclusion_proof,
            block_root,
        )
        .with_context(|| {
            format!(
                "Proof {} rejected against root {:?}: {}",
                index,
                block_root,
                serde_json::to_string(&proven.inclusion_proof).unwrap_or_default()
            )
        })?;
        upper_bounds.push(bounds.upper_bound);
    }

    info!(
        "Verified {} proofs against {:?}",
        upper_bounds.len(),
        block_root
    );
    Ok(upper_bounds)
}
