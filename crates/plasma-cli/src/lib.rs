//! Plasma CLI library
//!
//! File-based wrappers around block proving, proof verification and property decisions,
//! plus log setup, shared by the `plasma` binary and its tests.

pub mod decide;
pub mod files;
pub mod logging;
pub mod prove;
pub mod verify;

pub use prove::{prove_block, BlockProofs, ProvenStateUpdate};
pub use verify::verify_block_proofs;
