//! Crate-level errors.

use thiserror::Error;

use crate::style::ConfigurationError;
use crate::theme::StoreMisuseError;

/// A structurally required field that is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{component} requires '{field}'")]
pub struct MissingFieldError {
    pub component: &'static str,
    pub field: &'static str,
}

impl MissingFieldError {
    pub fn new(component: &'static str, field: &'static str) -> Self {
        Self { component, field }
    }
}

/// Any error the library reports.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error(transparent)]
    StoreMisuse(#[from] StoreMisuseError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("invalid page description: {0}")]
    Page(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = MissingFieldError::new("CTABlock", "cta");
        assert_eq!(err.to_string(), "CTABlock requires 'cta'");
    }

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err: Error = MissingFieldError::new("Image", "alt").into();
        assert_eq!(err.to_string(), "Image requires 'alt'");
        assert!(matches!(err, Error::MissingField(_)));
    }
}
