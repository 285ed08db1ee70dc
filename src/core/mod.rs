pub mod compiler;
pub mod crossref;
pub mod parser;
pub mod sdl;
pub mod units;
pub mod validator;

pub use crate::domain::manifest::{ManifestGroup, ManifestResources};
pub use crate::domain::model::{SdlDocument, ValidationReport};
pub use crate::utils::error::Result;
