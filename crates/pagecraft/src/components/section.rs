//! Section primitive: the outer band of a page region.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::{Bind, Class};
use crate::style::{resolve, ComponentStyleSpec, StyleProps};
use crate::theme::ThemeScope;

use super::layout::{Container, ContainerWidth};
use super::tokens::{Background, Pad};
use super::Render;

token_enum! {
    /// Vertical padding of a section.
    pub enum SectionSpacing ("section spacing") {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default Lg
}

token_enum! {
    pub enum Bleed ("bleed") {
        None => "none",
        X => "x",
        Full => "full",
    }
    default None
}

token_enum! {
    pub enum SectionTag ("section tag") {
        Section => "section",
        Div => "div",
        Header => "header",
        Footer => "footer",
    }
    default Section
}

token_enum! {
    /// ARIA role; `none` emits no attribute.
    pub enum SectionRole ("section role") {
        Region => "region",
        None => "none",
    }
    default None
}

pub static SECTION_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Section",
    base: &[Class("w-full")],
    axes: &[
        axis!("background" default "default" {
            "default" => [Class("bg-background text-foreground")],
            "muted" => [Class("bg-muted text-muted-foreground")],
            "accent" => [Class("bg-accent text-accent-foreground")],
            "primary" => [Class("bg-primary text-primary-foreground")],
        }),
        axis!("spacing" default "lg" {
            "none" => [Bind { name: "--section-py", value: "0" }, Class("py-[var(--section-py)]")],
            "sm" => [Bind { name: "--section-py", value: "var(--spacing-lg)" }, Class("py-[var(--section-py)]")],
            "md" => [Bind { name: "--section-py", value: "var(--spacing-2xl)" }, Class("py-[var(--section-py)]")],
            "lg" => [Bind { name: "--section-py", value: "var(--spacing-3xl)" }, Class("py-[var(--section-py)]")],
            "xl" => [Bind { name: "--section-py", value: "calc(var(--spacing-3xl)*1.5)" }, Class("py-[var(--section-py)]")],
        }),
        axis!("inset" default "md" {
            "none" => [Bind { name: "--section-px", value: "0" }, Class("px-[var(--section-px)]")],
            "sm" => [Bind { name: "--section-px", value: "var(--spacing-sm)" }, Class("px-[var(--section-px)]")],
            "md" => [Bind { name: "--section-px", value: "var(--spacing-md)" }, Class("px-[var(--section-px)]")],
            "lg" => [Bind { name: "--section-px", value: "var(--spacing-lg)" }, Class("px-[var(--section-px)]")],
        }),
        axis!("bleed" default "none" {
            "none" => [],
            "x" => [Class("mx-[-1rem] sm:mx-[-2rem]")],
            "full" => [Class("mx-[-100vw] px-[100vw]")],
        }),
    ],
};

/// Width and padding of the inner container a section may add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ContainerWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<Pad>,
}

/// `container: true | false | { width, pad }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContainerOption {
    Enabled(bool),
    Custom(ContainerOptions),
}

impl Default for ContainerOption {
    fn default() -> Self {
        ContainerOption::Enabled(false)
    }
}

impl ContainerOption {
    /// The container to wrap content in, if any.
    pub fn container(&self) -> Option<Container> {
        match self {
            ContainerOption::Enabled(false) => None,
            ContainerOption::Enabled(true) => Some(Container::new()),
            ContainerOption::Custom(options) => Some(
                Container::new()
                    .width(options.width.unwrap_or_default())
                    .pad(options.pad.unwrap_or_default()),
            ),
        }
    }
}

/// A full-width page band.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub tag: SectionTag,
    pub id: Option<String>,
    pub background: Background,
    pub spacing: SectionSpacing,
    pub inset: Pad,
    pub bleed: Bleed,
    pub container: ContainerOption,
    pub theme_scope: Option<ThemeScope>,
    pub aria_labelledby: Option<String>,
    pub role: Option<SectionRole>,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn spacing(mut self, spacing: SectionSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn container(mut self, container: ContainerOption) -> Self {
        self.container = container;
        self
    }

    pub fn theme_scope(mut self, scope: Option<ThemeScope>) -> Self {
        self.theme_scope = scope;
        self
    }

    pub fn id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

impl Render for Section {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("background", self.background.as_str())
            .with("spacing", self.spacing.as_str())
            .with("inset", self.inset.as_str())
            .with("bleed", self.bleed.as_str());
        let extra = [self.theme_scope.map(ThemeScope::class), self.class.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let style = resolve(&SECTION_STYLE, &props, Some(&extra))?;

        let content = match self.container.container() {
            Some(container) => vec![container.children(self.children.iter().cloned()).render()?],
            None => self.children.clone(),
        };
        let role = self
            .role
            .filter(|role| *role != SectionRole::None)
            .map(SectionRole::as_str);

        Ok(Element::new(self.tag.as_str())
            .styled(&style)
            .attr_opt("id", self.id.as_deref())
            .attr("data-background", self.background.as_str())
            .attr_opt("data-theme-scope", self.theme_scope.map(ThemeScope::as_str))
            .attr_opt("aria-labelledby", self.aria_labelledby.as_deref())
            .attr_opt("role", role)
            .children(content)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(node: Node) -> Element {
        match node {
            Node::Element(e) => e,
            Node::Text(t) => panic!("expected element, got text {t:?}"),
        }
    }

    #[test]
    fn test_default_section() {
        let section = element(Section::new().child("x").render().unwrap());
        assert_eq!(section.tag, "section");
        assert_eq!(section.get_attr("data-background"), Some("default"));
        assert!(section.has_class("[--section-py:var(--spacing-3xl)]"));
        assert!(section.has_class("bg-background"));
        assert_eq!(section.children, vec![Node::text("x")]);
    }

    #[test]
    fn test_theme_scope_class_and_attribute() {
        let section = element(
            Section::new()
                .theme_scope(Some(ThemeScope::Ocean))
                .render()
                .unwrap(),
        );
        assert!(section.has_class("theme-ocean"));
        assert_eq!(section.get_attr("data-theme-scope"), Some("ocean"));
    }

    #[test]
    fn test_container_wraps_children() {
        let section = element(
            Section::new()
                .container(ContainerOption::Custom(ContainerOptions {
                    width: Some(ContainerWidth::Sm),
                    pad: None,
                }))
                .child("x")
                .render()
                .unwrap(),
        );
        let inner: Vec<_> = section.element_children().collect();
        assert_eq!(inner.len(), 1);
        assert!(inner[0].has_class("max-w-2xl"));
        assert_eq!(inner[0].get_attr("data-width"), Some("sm"));
    }

    #[test]
    fn test_role_none_is_omitted() {
        let mut section = Section::new();
        section.role = Some(SectionRole::None);
        assert_eq!(element(section.render().unwrap()).get_attr("role"), None);

        let mut section = Section::new();
        section.role = Some(SectionRole::Region);
        assert_eq!(
            element(section.render().unwrap()).get_attr("role"),
            Some("region")
        );
    }

    #[test]
    fn test_full_bleed_overrides_inset_padding() {
        let mut section = Section::new();
        section.bleed = Bleed::Full;
        let section = element(section.render().unwrap());
        assert!(section.has_class("px-[100vw]"));
        assert!(!section.has_class("px-[var(--section-px)]"));
    }

    #[test]
    fn test_container_option_deserializes_bool_or_object() {
        let on: ContainerOption = serde_yaml::from_str("true").unwrap();
        assert_eq!(on, ContainerOption::Enabled(true));
        let custom: ContainerOption = serde_yaml::from_str("{ width: xl }").unwrap();
        assert_eq!(
            custom,
            ContainerOption::Custom(ContainerOptions {
                width: Some(ContainerWidth::Xl),
                pad: None,
            })
        );
    }
}
