//! Seed data loading

use super::RecordStore;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

pub const CUSTOMERS_FILE: &str = "customers.json";
pub const STATES_FILE: &str = "states.json";
pub const USERS_FILE: &str = "users.json";

/// Build the store from the three seed documents in `data_dir`.
///
/// Fails if any document is missing or malformed.
pub async fn load_store(data_dir: &Path) -> Result<RecordStore> {
    let customers = read_json(&data_dir.join(CUSTOMERS_FILE)).await?;
    let states = read_json(&data_dir.join(STATES_FILE)).await?;
    let users = read_json(&data_dir.join(USERS_FILE)).await?;

    Ok(RecordStore::new(customers, states, users))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
