use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// SDL versions this compiler understands.
pub const SUPPORTED_VERSIONS: &[&str] = &["2.0"];

/// Parsed SDL document. Fields the validator reports as missing are optional
/// or defaulted so a structurally incomplete document still deserializes and
/// every problem surfaces as a validation message instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdlDocument {
    pub version: Option<String>,
    #[serde(default)]
    pub services: IndexMap<String, ServiceSpec>,
    #[serde(default)]
    pub profiles: ProfileSet,
    #[serde(default)]
    pub deployment: IndexMap<String, IndexMap<String, DeploymentEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub image: Option<String>,
    #[serde(default)]
    pub expose: Vec<ServiceExpose>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceExpose {
    pub port: Option<u16>,
    pub r#as: Option<u16>,
    #[serde(default)]
    pub to: Vec<ExposeTo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposeTo {
    pub service: Option<String>,
    #[serde(default)]
    pub global: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSet {
    #[serde(default)]
    pub compute: IndexMap<String, ComputeProfile>,
    #[serde(default)]
    pub placement: IndexMap<String, PlacementProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeProfile {
    pub resources: Option<ComputeResources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResources {
    pub cpu: Option<CpuResource>,
    pub memory: Option<MemoryResource>,
    #[serde(default)]
    pub storage: Vec<StorageResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuResource {
    pub units: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryResource {
    pub size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageResource {
    pub size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementProfile {
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    #[serde(rename = "signedBy")]
    pub signed_by: Option<SignedBy>,
    #[serde(default)]
    pub pricing: IndexMap<String, ServicePrice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignedBy {
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<String>,
    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<String>,
}

/// Price for one service under one placement, denominated in the chain's
/// smallest unit. The amount stays a string end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrice {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentEntry {
    pub profile: Option<String>,
    pub count: Option<u32>,
}

/// Outcome of `validate`: every problem found, in document order.
/// `valid` is simply `errors.is_empty()` at the time the report was built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
