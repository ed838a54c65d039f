//! CLI wrapper for property decisions

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use plasma_deciders::{DecideOptions, Decision, DeciderRegistry, EngineConfig, Property};
use plasma_primitives::serde_hex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::files::{load_json, save_json};

/// CLI arguments for the `decide` subcommand
#[derive(Clone, Debug, Args)]
pub struct DecideArgs {
    /// Path to the JSON property to decide
    #[arg(long)]
    pub property_path: PathBuf,
    /// Hex encoded witness for the property
    #[arg(long)]
    pub witness: Option<String>,
    /// Path to a JSON engine configuration
    #[arg(long, env = "PLASMA_ENGINE_CONFIG")]
    pub config_path: Option<PathBuf>,
    /// Re-evaluate memoized facts
    #[arg(long, default_value = "false")]
    pub no_cache: bool,
    /// Path to write the decision to instead of stdout
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

/// A decision together with its on-chain claim items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub decision: Decision,
    /// `abi.encode(bytes property, bytes witness)` per justification step, hex encoded
    pub claim: Vec<String>,
}

impl From<Decision> for DecisionReport {
    fn from(decision: Decision) -> Self {
        let claim = decision
            .encode_claim()
            .iter()
            .map(|item| serde_hex::to_hex(item))
            .collect();
        Self { decision, claim }
    }
}

/// Run the `decide` subcommand
pub async fn run(args: DecideArgs) -> Result<(), anyhow::Error> {
    let property: Property = load_json(&args.property_path)?;
    let config = match &args.config_path {
        Some(path) => load_json(path)?,
        None => EngineConfig::default(),
    };
    let witness = args
        .witness
        .as_deref()
        .map(serde_hex::from_hex)
        .transpose()
        .context("Witness is not valid hex")?;

    let options = DecideOptions {
        no_cache: args.no_cache,
        ..DecideOptions::default()
    };
    let report = DecisionReport::from(decide(config, &property, witness.as_deref(), options).await?);

    match &args.output_path {
        Some(path) => save_json(&report, path)?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Decide `property` with a registry of the built-in deciders
pub async fn decide(
    config: EngineConfig,
    property: &Property,
    witness: Option<&[u8]>,
    options: DecideOptions,
) -> Result<Decision, anyhow::Error> {
    let registry = DeciderRegistry::with_defaults(config);
    let decision = registry
        .decide_property(property, witness, options)
        .await
        .with_context(|| {
            format!(
                "Failed to decide property of {:?} with input {}",
                property.decider,
                serde_hex::to_hex(&property.input)
            )
        })?;

    info!(
        "Decided {} with a justification of {} steps",
        decision.outcome,
        decision.justification.len()
    );
    Ok(decision)
}
