use crate::domain::model::ValidationReport;

pub trait Validate {
    fn validate(&self) -> ValidationReport;
}

/// True when an optional string field is absent, empty, or whitespace-only.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

pub fn is_positive(value: Option<u32>) -> bool {
    value.map_or(false, |v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some("".to_string())));
        assert!(is_blank(&Some("   ".to_string())));
        assert!(!is_blank(&Some("nginx".to_string())));
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(Some(1)));
        assert!(!is_positive(Some(0)));
        assert!(!is_positive(None));
    }
}
