use serde::{Deserialize, Serialize};

use crate::domain::model::ServicePrice;

/// Compiled resource request for one service under one placement. Produced
/// only by the compiler, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestGroup {
    pub name: String,
    pub resources: ManifestResources,
    pub count: u32,
    pub price: ServicePrice,
}

/// Resolved resource quantities: cpu in millicores, memory and storage in
/// exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestResources {
    pub cpu_units: u32,
    pub memory_bytes: u64,
    pub storage_bytes: Vec<u64>,
}
