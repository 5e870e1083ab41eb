//! Style configuration errors.

use thiserror::Error;

/// A style input outside its declared closed domain.
///
/// These are programmer errors: they surface as soon as the offending value
/// is parsed or resolved, never later at render time, and an explicitly
/// supplied invalid value is never replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A prop names an axis the component does not declare.
    #[error("{component} has no style axis '{axis}'")]
    UnknownAxis {
        component: &'static str,
        axis: String,
    },

    /// An axis value outside the axis domain.
    #[error(
        "invalid value '{value}' for {component}.{axis} (expected one of: {})",
        .allowed.join(", ")
    )]
    InvalidValue {
        component: &'static str,
        axis: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A token (theme, density, variant, ...) outside its domain.
    #[error("invalid {kind} '{value}' (expected one of: {})", .allowed.join(", "))]
    InvalidToken {
        kind: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// An axis whose default is not one of its own values.
    #[error("axis '{axis}' of {component} defaults to '{default}', which it does not declare")]
    InvalidDefault {
        component: &'static str,
        axis: &'static str,
        default: &'static str,
    },

    /// The same axis declared twice on one component.
    #[error("axis '{axis}' is declared more than once on {component}")]
    DuplicateAxis {
        component: &'static str,
        axis: &'static str,
    },

    /// A prop supplying the same axis twice.
    #[error("{component}.{axis} is given more than once")]
    DuplicateProp {
        component: &'static str,
        axis: String,
    },

    /// A value that does not parse into the expected shape.
    #[error("malformed {kind} '{value}'")]
    Malformed { kind: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display_lists_domain() {
        let err = ConfigurationError::InvalidValue {
            component: "Heading",
            axis: "size",
            value: "4xl".to_string(),
            allowed: vec!["xs", "sm", "md"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Heading.size"));
        assert!(msg.contains("'4xl'"));
        assert!(msg.contains("xs, sm, md"));
    }

    #[test]
    fn test_unknown_axis_display() {
        let err = ConfigurationError::UnknownAxis {
            component: "Stack",
            axis: "tone".to_string(),
        };
        assert_eq!(err.to_string(), "Stack has no style axis 'tone'");
    }

    #[test]
    fn test_invalid_token_display() {
        let err = ConfigurationError::InvalidToken {
            kind: "theme",
            value: "sepia".to_string(),
            allowed: vec!["light", "dark", "system"],
        };
        assert_eq!(
            err.to_string(),
            "invalid theme 'sepia' (expected one of: light, dark, system)"
        );
    }
}
