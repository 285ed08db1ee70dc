pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::sdl::Sdl;
pub use crate::core::units::{parse_cpu_units, parse_memory_size};
pub use crate::domain::manifest::{ManifestGroup, ManifestResources};
pub use crate::domain::model::{
    SdlDocument, ServicePrice, ValidationReport, SUPPORTED_VERSIONS,
};
pub use crate::utils::error::{Result, SdlError};
