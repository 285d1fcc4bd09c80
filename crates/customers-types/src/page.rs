//! Paged result envelope

use serde::{Deserialize, Serialize};

/// One page of a collection plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    pub total_records: usize,
}
