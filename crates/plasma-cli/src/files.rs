//! JSON file helpers

use std::path::Path;

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

/// Serialize `value` as pretty JSON to `path`, creating parent directories as needed
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), anyhow::Error> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Written {}", path.display());
    Ok(())
}

/// Read and deserialize a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, anyhow::Error> {
    info!("Loading {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Malformed JSON in {}", path.display()))
}
