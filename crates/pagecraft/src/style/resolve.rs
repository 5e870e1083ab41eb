//! Variant resolution: component props to a merged class list.
//!
//! Resolution is a pure function of the component's static
//! [`ComponentStyleSpec`], the prop values and an optional override class.
//! It walks the base directives, then every axis in declaration order
//! (taking the axis default when a prop is omitted), appends the override
//! and finally merges the token list so each CSS property has exactly one
//! writer per modifier set.
//!
//! Theme- and density-sensitive values never branch here: axis values bind
//! custom properties to `var(--...)` expressions whose meaning is decided by
//! the theme classes on an ancestor.

use std::fmt;

use pagecraft_merge::{merge_tokens, property_of, ClassToken};

use super::directive::StyleDirective;
use super::error::ConfigurationError;
use super::spec::ComponentStyleSpec;

/// Axis values supplied by a caller, keyed by axis name.
///
/// Omitted axes take their declared default. Every value supplied is kept,
/// so [`resolve`] can reject an axis given more than once instead of
/// letting a later value hide an invalid earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProps<'a> {
    values: Vec<(&'a str, &'a str)>,
}

impl<'a> StyleProps<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `axis` to `value`.
    pub fn with(mut self, axis: &'a str, value: &'a str) -> Self {
        self.set(axis, value);
        self
    }

    /// Sets `axis` when `value` is present; `None` leaves the axis on its
    /// default.
    pub fn with_opt(self, axis: &'a str, value: Option<&'a str>) -> Self {
        match value {
            Some(value) => self.with(axis, value),
            None => self,
        }
    }

    pub fn set(&mut self, axis: &'a str, value: &'a str) {
        self.values.push((axis, value));
    }

    pub fn get(&self, axis: &str) -> Option<&'a str> {
        self.values
            .iter()
            .find(|(name, _)| *name == axis)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.values.iter().copied()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleProps<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut props = StyleProps::new();
        for (axis, value) in iter {
            props.set(axis, value);
        }
        props
    }
}

/// The value an axis resolved to and the directives it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAxis {
    pub axis: &'static str,
    pub value: &'static str,
    pub directives: &'static [StyleDirective],
}

/// The result of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    axes: Vec<ResolvedAxis>,
    classes: Vec<String>,
}

impl ResolvedStyle {
    /// One entry per declared axis, in declaration order.
    pub fn axes(&self) -> &[ResolvedAxis] {
        &self.axes
    }

    /// The value an axis resolved to.
    pub fn value_of(&self, axis: &str) -> Option<&'static str> {
        self.axes.iter().find(|a| a.axis == axis).map(|a| a.value)
    }

    /// The merged class tokens, in emission order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The unmodified token that writes `property`, if any.
    ///
    /// Tokens carrying modifiers (`md:`, `hover:`) are ignored: they apply
    /// under a different condition than the bare property.
    pub fn property(&self, property: &str) -> Option<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|c| ClassToken::parse(c).modifiers().is_empty())
            .rfind(|c| property_of(ClassToken::parse(c).base()).as_deref() == Some(property))
    }

    /// The value expression bound to a custom property (`--section-py`).
    pub fn custom_property(&self, name: &str) -> Option<&str> {
        self.classes.iter().rev().find_map(|c| {
            let token = ClassToken::parse(c);
            if !token.modifiers().is_empty() {
                return None;
            }
            token
                .arbitrary_property()
                .filter(|(prop, _)| *prop == name)
                .map(|(_, value)| value)
        })
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_string())
    }
}

/// Resolves `props` against `spec`, appending `override_class` last.
///
/// # Errors
///
/// - [`ConfigurationError::UnknownAxis`] when a prop names an axis the
///   component does not declare
/// - [`ConfigurationError::InvalidValue`] when a supplied value is outside
///   the axis domain; the default is never substituted for it
///
/// # Example
///
/// ```rust
/// use pagecraft::components::HEADING_STYLE;
/// use pagecraft::style::{resolve, StyleProps};
///
/// let props = StyleProps::new().with("size", "2xl").with("weight", "bold");
/// let style = resolve(&HEADING_STYLE, &props, Some("text-primary")).unwrap();
/// assert!(style.has_class("font-bold"));
/// assert!(style.has_class("text-primary"));
/// ```
pub fn resolve(
    spec: &ComponentStyleSpec,
    props: &StyleProps<'_>,
    override_class: Option<&str>,
) -> Result<ResolvedStyle, ConfigurationError> {
    if let Some((axis, _)) = props.iter().find(|(axis, _)| spec.axis(axis).is_none()) {
        return Err(ConfigurationError::UnknownAxis {
            component: spec.component,
            axis: axis.to_string(),
        });
    }
    let mut seen = Vec::with_capacity(spec.axes.len());
    for (axis, _) in props.iter() {
        if seen.contains(&axis) {
            return Err(ConfigurationError::DuplicateProp {
                component: spec.component,
                axis: axis.to_string(),
            });
        }
        seen.push(axis);
    }

    let mut tokens = Vec::new();
    for directive in spec.base {
        directive.push_tokens(&mut tokens);
    }

    let mut axes = Vec::with_capacity(spec.axes.len());
    for axis in spec.axes {
        let requested = props.get(axis.name).unwrap_or(axis.default);
        let entry = axis
            .get(requested)
            .ok_or_else(|| ConfigurationError::InvalidValue {
                component: spec.component,
                axis: axis.name,
                value: requested.to_string(),
                allowed: axis.allowed(),
            })?;
        for directive in entry.directives {
            directive.push_tokens(&mut tokens);
        }
        axes.push(ResolvedAxis {
            axis: axis.name,
            value: entry.value,
            directives: entry.directives,
        });
    }

    if let Some(extra) = override_class {
        tokens.extend(extra.split_whitespace().map(str::to_string));
    }

    let classes = merge_tokens(tokens.iter().map(String::as_str))
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(ResolvedStyle { axes, classes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AxisValue, StyleAxis};

    static PANEL: ComponentStyleSpec = ComponentStyleSpec {
        component: "Panel",
        base: &[StyleDirective::Class("rounded-md border")],
        axes: &[
            StyleAxis {
                name: "tone",
                default: "plain",
                values: &[
                    AxisValue {
                        value: "plain",
                        directives: &[StyleDirective::Class("bg-background text-foreground")],
                    },
                    AxisValue {
                        value: "accent",
                        directives: &[StyleDirective::Class("bg-accent text-accent-foreground")],
                    },
                ],
            },
            StyleAxis {
                name: "pad",
                default: "md",
                values: &[
                    AxisValue {
                        value: "none",
                        directives: &[],
                    },
                    AxisValue {
                        value: "md",
                        directives: &[
                            StyleDirective::Bind {
                                name: "--panel-p",
                                value: "var(--spacing-md)",
                            },
                            StyleDirective::Class("p-[var(--panel-p)]"),
                        ],
                    },
                ],
            },
        ],
    };

    #[test]
    fn test_defaults_apply_when_props_omitted() {
        let style = resolve(&PANEL, &StyleProps::new(), None).unwrap();
        assert_eq!(style.value_of("tone"), Some("plain"));
        assert_eq!(style.value_of("pad"), Some("md"));
        assert_eq!(
            style.class_string(),
            "rounded-md border bg-background text-foreground [--panel-p:var(--spacing-md)] p-[var(--panel-p)]"
        );
    }

    #[test]
    fn test_supplied_value_selects_directives() {
        let props = StyleProps::new().with("tone", "accent").with("pad", "none");
        let style = resolve(&PANEL, &props, None).unwrap();
        assert_eq!(
            style.class_string(),
            "rounded-md border bg-accent text-accent-foreground"
        );
    }

    #[test]
    fn test_invalid_value_is_rejected_not_defaulted() {
        let props = StyleProps::new().with("tone", "loud");
        let err = resolve(&PANEL, &props, None).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidValue {
                component: "Panel",
                axis: "tone",
                value: "loud".to_string(),
                allowed: vec!["plain", "accent"],
            }
        );
    }

    #[test]
    fn test_unknown_axis_is_rejected() {
        let props = StyleProps::new().with("size", "lg");
        assert!(matches!(
            resolve(&PANEL, &props, None),
            Err(ConfigurationError::UnknownAxis { component: "Panel", .. })
        ));
    }

    #[test]
    fn test_override_replaces_conflicting_property_only() {
        let style = resolve(&PANEL, &StyleProps::new(), Some("bg-muted shadow-sm")).unwrap();
        assert_eq!(style.property("background-color"), Some("bg-muted"));
        assert_eq!(style.property("color"), Some("text-foreground"));
        assert!(!style.has_class("bg-background"));
        assert!(style.has_class("shadow-sm"));
    }

    #[test]
    fn test_override_rebinds_custom_property() {
        let style = resolve(
            &PANEL,
            &StyleProps::new(),
            Some("[--panel-p:var(--spacing-xl)]"),
        )
        .unwrap();
        assert_eq!(style.custom_property("--panel-p"), Some("var(--spacing-xl)"));
        assert!(!style.has_class("[--panel-p:var(--spacing-md)]"));
    }

    #[test]
    fn test_labelled_color_override_keeps_heading_size() {
        use crate::components::HEADING_STYLE;

        let props = StyleProps::new().with("size", "2xl");
        let style = resolve(&HEADING_STYLE, &props, Some("text-[color:var(--brand)]")).unwrap();
        assert!(style.has_class("text-[var(--heading-size)]"));
        assert_eq!(style.property("font-size"), Some("text-[var(--heading-size)]"));
        assert_eq!(style.property("color"), Some("text-[color:var(--brand)]"));
    }

    #[test]
    fn test_background_image_override_keeps_background_color() {
        use crate::components::SECTION_STYLE;

        let style = resolve(&SECTION_STYLE, &StyleProps::new(), Some("bg-[url(/hero.png)]")).unwrap();
        assert!(style.has_class("bg-background"));
        assert!(style.has_class("bg-[url(/hero.png)]"));

        let gradient = "bg-[linear-gradient(to_bottom,var(--primary),transparent)]";
        let style = resolve(&SECTION_STYLE, &StyleProps::new(), Some(gradient)).unwrap();
        assert_eq!(style.property("background-color"), Some("bg-background"));
        assert_eq!(style.property("background-image"), Some(gradient));
    }

    #[test]
    fn test_modified_override_does_not_displace_bare_class() {
        let style = resolve(&PANEL, &StyleProps::new(), Some("hover:bg-muted")).unwrap();
        assert!(style.has_class("bg-background"));
        assert!(style.has_class("hover:bg-muted"));
        assert_eq!(style.property("background-color"), Some("bg-background"));
    }

    #[test]
    fn test_duplicate_prop_is_rejected() {
        let props: StyleProps = [("tone", "loud"), ("tone", "accent")].into_iter().collect();
        assert_eq!(
            resolve(&PANEL, &props, None).unwrap_err(),
            ConfigurationError::DuplicateProp {
                component: "Panel",
                axis: "tone".to_string(),
            }
        );

        let props = StyleProps::new().with("pad", "md").with("pad", "md");
        assert!(matches!(
            resolve(&PANEL, &props, None),
            Err(ConfigurationError::DuplicateProp { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::components::{GRID_STYLE, HEADING_STYLE, SECTION_STYLE, STACK_STYLE, TEXT_STYLE};
    use proptest::prelude::*;

    fn specs() -> Vec<&'static ComponentStyleSpec> {
        vec![
            &HEADING_STYLE,
            &TEXT_STYLE,
            &STACK_STYLE,
            &GRID_STYLE,
            &SECTION_STYLE,
        ]
    }

    /// A spec plus one valid value index per axis.
    fn spec_and_choices() -> impl Strategy<Value = (usize, Vec<usize>)> {
        (0..specs().len()).prop_flat_map(|i| {
            let axes: Vec<_> = specs()[i]
                .axes
                .iter()
                .map(|a| 0..a.values.len())
                .collect();
            (Just(i), axes)
        })
    }

    fn props_for(spec: &'static ComponentStyleSpec, choices: &[usize]) -> StyleProps<'static> {
        spec.axes
            .iter()
            .zip(choices)
            .map(|(axis, &i)| (axis.name, axis.values[i].value))
            .collect()
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic((i, choices) in spec_and_choices()) {
            let spec = specs()[i];
            let props = props_for(spec, &choices);
            let first = resolve(spec, &props, None).unwrap();
            let second = resolve(spec, &props, None).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn every_axis_is_reported_in_order((i, choices) in spec_and_choices()) {
            let spec = specs()[i];
            let style = resolve(spec, &props_for(spec, &choices), None).unwrap();
            let names: Vec<_> = style.axes().iter().map(|a| a.axis).collect();
            let declared: Vec<_> = spec.axes.iter().map(|a| a.name).collect();
            prop_assert_eq!(names, declared);
        }

        #[test]
        fn override_wins_background(
            (i, choices) in spec_and_choices(),
            color in prop::sample::select(vec!["bg-red-500", "bg-muted", "bg-[#123456]"]),
        ) {
            let spec = specs()[i];
            let style = resolve(spec, &props_for(spec, &choices), Some(color)).unwrap();
            prop_assert_eq!(style.property("background-color"), Some(color));
            let bg_writers = style
                .classes()
                .iter()
                .filter(|c| property_of(c).as_deref() == Some("background-color"))
                .count();
            prop_assert_eq!(bg_writers, 1);
        }

        #[test]
        fn unrelated_override_keeps_resolution(
            (i, choices) in spec_and_choices(),
            extra in "pc-[a-z]{3,8}",
        ) {
            let spec = specs()[i];
            let props = props_for(spec, &choices);
            let plain = resolve(spec, &props, None).unwrap();
            let with_extra = resolve(spec, &props, Some(extra.as_str())).unwrap();
            let mut expected = plain.classes().to_vec();
            expected.push(extra.clone());
            prop_assert_eq!(with_extra.classes(), &expected[..]);
        }
    }
}
