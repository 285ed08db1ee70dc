use std::path::Path;

use crate::core::{compiler, parser, validator};
use crate::domain::manifest::ManifestGroup;
use crate::domain::model::{SdlDocument, ValidationReport};
use crate::utils::error::Result;

/// Entry point tying the pipeline together: parse once, then validate and
/// compile the held document as often as needed. The document is never
/// mutated after parse.
#[derive(Debug)]
pub struct Sdl {
    document: SdlDocument,
}

impl Sdl {
    /// Parse raw SDL text.
    pub fn from_str(input: &str) -> Result<Self> {
        Ok(Self {
            document: parser::parse_str(input)?,
        })
    }

    /// Build from an already-structured value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(Self {
            document: parser::parse_value(value)?,
        })
    }

    /// Read an SDL file and parse it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_str(&content)
    }

    pub fn document(&self) -> &SdlDocument {
        &self.document
    }

    /// Collect every structural and cross-reference problem. Never fails.
    pub fn validate(&self) -> ValidationReport {
        validator::validate(&self.document)
    }

    /// Compile the deployment mapping into manifest groups. Call after
    /// `validate` reports the document valid; an unresolvable deployment
    /// entry aborts the whole compilation.
    pub fn manifest(&self) -> Result<Vec<ManifestGroup>> {
        compiler::compile(&self.document)
    }
}
