//! Style axes: named categorical dimensions with closed value sets.

use super::directive::StyleDirective;

/// One allowed value of an axis and the directives it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisValue {
    pub value: &'static str,
    pub directives: &'static [StyleDirective],
}

/// A named dimension such as `size` or `background`.
///
/// The value set is closed and ordered; `default` must be one of the
/// values (checked by [`ComponentStyleSpec::validate`](super::ComponentStyleSpec::validate)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAxis {
    pub name: &'static str,
    pub default: &'static str,
    pub values: &'static [AxisValue],
}

impl StyleAxis {
    /// Looks up a value's entry.
    pub fn get(&self, value: &str) -> Option<&AxisValue> {
        self.values.iter().find(|v| v.value == value)
    }

    /// Whether `value` belongs to the domain.
    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// The domain, in declaration order.
    pub fn allowed(&self) -> Vec<&'static str> {
        self.values.iter().map(|v| v.value).collect()
    }
}
