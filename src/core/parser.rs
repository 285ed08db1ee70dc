use crate::domain::model::SdlDocument;
use crate::utils::error::{Result, SdlError};

/// Parse a raw SDL document. Input is YAML; JSON text parses too since YAML
/// is a superset. Duplicate mapping keys are rejected.
pub fn parse_str(input: &str) -> Result<SdlDocument> {
    tracing::debug!("Parsing SDL document ({} bytes)", input.len());
    let value: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|e| SdlError::parse(e.to_string()))?;
    serde_yaml::from_value(value).map_err(|e| SdlError::parse(e.to_string()))
}

/// Parse an already-structured value into an SDL document.
pub fn parse_value(value: serde_json::Value) -> Result<SdlDocument> {
    serde_json::from_value::<SdlDocument>(value)
        .map_err(SdlError::from)
        .map_err(into_parse_error)
}

/// Adapt a lower-level failure into the parser's error kind. A failure that
/// is already validation-kind passes through unchanged, so callers can tell
/// malformed text apart from a well-formed but invalid document.
pub fn into_parse_error(err: SdlError) -> SdlError {
    match err {
        SdlError::ValidationError { .. } => err,
        other => SdlError::parse(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_str("version: \"2.0\"").unwrap();
        assert_eq!(doc.version.as_deref(), Some("2.0"));
        assert!(doc.services.is_empty());
        assert!(doc.deployment.is_empty());
    }

    #[test]
    fn test_parse_services_preserve_order() {
        let doc = parse_str(
            r#"
version: "2.0"
services:
  web:
    image: nginx:1.27
  worker:
    image: busybox
"#,
        )
        .unwrap();

        let names: Vec<&str> = doc.services.keys().map(String::as_str).collect();
        assert_eq!(names, ["web", "worker"]);
        assert_eq!(
            doc.services["web"].image.as_deref(),
            Some("nginx:1.27")
        );
    }

    #[test]
    fn test_parse_malformed_text_is_parse_error() {
        let err = parse_str("version: [unclosed").unwrap_err();
        assert!(matches!(err, SdlError::ParseError { .. }));
    }

    #[test]
    fn test_parse_value_structured_input() {
        let value = serde_json::json!({
            "version": "2.0",
            "services": { "web": { "image": "nginx" } }
        });

        let doc = parse_value(value).unwrap();
        assert!(doc.services.contains_key("web"));
    }

    #[test]
    fn test_parse_value_wrong_shape_is_parse_error() {
        let err = parse_value(serde_json::json!({ "services": 42 })).unwrap_err();
        assert!(matches!(err, SdlError::ParseError { .. }));
    }

    #[test]
    fn test_into_parse_error_passes_validation_through() {
        let err = into_parse_error(SdlError::validation("bad reference"));
        assert!(matches!(err, SdlError::ValidationError { .. }));

        let err = into_parse_error(SdlError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )));
        assert!(matches!(err, SdlError::ParseError { .. }));
    }
}
