//! Style directives: the atoms an axis value expands to.

use std::fmt;

/// An atomic presentation instruction.
///
/// A directive is either one or more literal utility classes, or a CSS
/// custom-property binding. Bindings are how theme- and density-sensitive
/// values stay out of the resolver: the directive binds `--section-py` to
/// `var(--spacing-3xl)`, and what `--spacing-3xl` means is decided by the
/// theme and density classes on an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDirective {
    /// Whitespace-separated utility classes.
    Class(&'static str),
    /// `name: value` custom-property binding, emitted as `[name:value]`.
    Bind {
        name: &'static str,
        value: &'static str,
    },
}

impl StyleDirective {
    /// Pushes this directive's class tokens onto `out`.
    pub(crate) fn push_tokens(&self, out: &mut Vec<String>) {
        match self {
            StyleDirective::Class(classes) => {
                out.extend(classes.split_whitespace().map(str::to_string));
            }
            StyleDirective::Bind { .. } => out.push(self.to_string()),
        }
    }

    /// Whether this directive contributes no tokens at all.
    pub fn is_empty(&self) -> bool {
        match self {
            StyleDirective::Class(classes) => classes.trim().is_empty(),
            StyleDirective::Bind { .. } => false,
        }
    }
}

impl fmt::Display for StyleDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDirective::Class(classes) => f.write_str(classes),
            StyleDirective::Bind { name, value } => write!(f, "[{}:{}]", name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_renders_as_arbitrary_property() {
        let d = StyleDirective::Bind {
            name: "--stack-gap",
            value: "var(--spacing-md)",
        };
        assert_eq!(d.to_string(), "[--stack-gap:var(--spacing-md)]");
    }

    #[test]
    fn test_class_directive_splits_into_tokens() {
        let mut out = Vec::new();
        StyleDirective::Class("flex  flex-col").push_tokens(&mut out);
        assert_eq!(out, vec!["flex", "flex-col"]);
    }

    #[test]
    fn test_empty_class_directive() {
        assert!(StyleDirective::Class("").is_empty());
        assert!(!StyleDirective::Bind { name: "--x", value: "" }.is_empty());
    }
}
