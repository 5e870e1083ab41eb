//! Per-component style specifications.

use std::collections::HashSet;

use super::axis::StyleAxis;
use super::directive::StyleDirective;
use super::error::ConfigurationError;

/// The static style table of one component kind.
///
/// Holds the unconditional base directives and the axes the component
/// accepts, in the fixed order the resolver walks them.
///
/// # Example
///
/// ```rust
/// use pagecraft::style::{AxisValue, ComponentStyleSpec, StyleAxis, StyleDirective};
///
/// static BADGE: ComponentStyleSpec = ComponentStyleSpec {
///     component: "Badge",
///     base: &[StyleDirective::Class("inline-flex rounded-full")],
///     axes: &[StyleAxis {
///         name: "tone",
///         default: "neutral",
///         values: &[
///             AxisValue { value: "neutral", directives: &[StyleDirective::Class("bg-muted")] },
///             AxisValue { value: "brand", directives: &[StyleDirective::Class("bg-primary")] },
///         ],
///     }],
/// };
///
/// assert!(BADGE.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStyleSpec {
    pub component: &'static str,
    pub base: &'static [StyleDirective],
    pub axes: &'static [StyleAxis],
}

impl ComponentStyleSpec {
    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&StyleAxis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Checks the table's own invariants: axis names are unique and every
    /// axis default belongs to that axis.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen = HashSet::new();
        for axis in self.axes {
            if !seen.insert(axis.name) {
                return Err(ConfigurationError::DuplicateAxis {
                    component: self.component,
                    axis: axis.name,
                });
            }
            if !axis.contains(axis.default) {
                return Err(ConfigurationError::InvalidDefault {
                    component: self.component,
                    axis: axis.name,
                    default: axis.default,
                });
            }
        }
        Ok(())
    }
}
