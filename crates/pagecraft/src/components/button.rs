//! Button primitive and the navigation-link variant helper.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::{resolve, ComponentStyleSpec, StyleProps};

use super::Render;

token_enum! {
    pub enum ButtonVariant ("button variant") {
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
    default Default
}

token_enum! {
    pub enum ButtonSize ("button size") {
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
    }
    default Default
}

pub static BUTTON_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Button",
    base: &[Class(
        "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium \
         transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
         disabled:pointer-events-none disabled:opacity-50",
    )],
    axes: &[
        axis!("variant" default "default" {
            "default" => [Class("bg-primary text-primary-foreground hover:bg-primary/90")],
            "destructive" => [Class("bg-destructive text-destructive-foreground hover:bg-destructive/90")],
            "outline" => [Class("border border-input bg-background hover:bg-accent hover:text-accent-foreground")],
            "secondary" => [Class("bg-secondary text-secondary-foreground hover:bg-secondary/80")],
            "ghost" => [Class("hover:bg-accent hover:text-accent-foreground")],
            "link" => [Class("text-primary underline-offset-4 hover:underline")],
        }),
        axis!("size" default "default" {
            "default" => [Class("h-10 px-4 py-2")],
            "sm" => [Class("h-9 px-3")],
            "lg" => [Class("h-11 px-8")],
            "icon" => [Class("h-10 w-10")],
        }),
    ],
};

/// A call to action as it appears in block props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
}

impl CallToAction {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            variant: None,
            size: None,
        }
    }
}

/// A button, rendered as a link when it has a target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub href: Option<String>,
    pub class: Option<String>,
    pub text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A button for `cta`; the fallbacks apply where the cta is silent.
    pub fn from_cta(cta: &CallToAction, variant: ButtonVariant, size: ButtonSize) -> Self {
        Self::new(cta.text.as_str())
            .href(cta.href.as_str())
            .variant(cta.variant.unwrap_or(variant))
            .size(cta.size.unwrap_or(size))
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for Button {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("variant", self.variant.as_str())
            .with("size", self.size.as_str());
        let style = resolve(&BUTTON_STYLE, &props, self.class.as_deref())?;

        let element = match &self.href {
            Some(href) => Element::new("a").attr("href", href.as_str()),
            None => Element::new("button").attr("type", "button"),
        };
        Ok(element
            .styled(&style)
            .attr("data-variant", self.variant.as_str())
            .child(self.text.as_str())
            .into())
    }
}

/// Variant for a navigation link: `default` on the current page, `ghost`
/// elsewhere. Only the exact path is current; a trailing slash is ignored.
pub fn nav_link_variant(current_path: &str, href: &str) -> ButtonVariant {
    if current_path.trim_end_matches('/') == href.trim_end_matches('/') {
        ButtonVariant::Default
    } else {
        ButtonVariant::Ghost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_button() {
        let node = Button::new("Go").href("/docs").render().unwrap();
        let a = node.as_element().unwrap();
        assert_eq!(a.tag, "a");
        assert_eq!(a.get_attr("href"), Some("/docs"));
        assert!(a.has_class("bg-primary"));
        assert!(a.has_class("h-10"));
    }

    #[test]
    fn test_plain_button() {
        let node = Button::new("Close").variant(ButtonVariant::Ghost).render().unwrap();
        let button = node.as_element().unwrap();
        assert_eq!(button.tag, "button");
        assert_eq!(button.get_attr("type"), Some("button"));
        assert_eq!(button.get_attr("data-variant"), Some("ghost"));
    }

    #[test]
    fn test_large_size_padding() {
        let node = Button::new("Big").size(ButtonSize::Lg).render().unwrap();
        let button = node.as_element().unwrap();
        assert!(button.has_class("px-8"));
        assert!(!button.has_class("px-4"));
    }

    #[test]
    fn test_cta_variant_falls_back() {
        let cta = CallToAction::new("Start", "/start");
        let button = Button::from_cta(&cta, ButtonVariant::Outline, ButtonSize::Lg);
        assert_eq!(button.variant, ButtonVariant::Outline);
        assert_eq!(button.size, ButtonSize::Lg);

        let cta = CallToAction {
            variant: Some(ButtonVariant::Secondary),
            size: Some(ButtonSize::Sm),
            ..cta
        };
        let button = Button::from_cta(&cta, ButtonVariant::Outline, ButtonSize::Lg);
        assert_eq!(button.variant, ButtonVariant::Secondary);
        assert_eq!(button.size, ButtonSize::Sm);
    }

    #[test]
    fn test_nav_link_variant_matches_exact_path() {
        assert_eq!(nav_link_variant("/", "/"), ButtonVariant::Default);
        assert_eq!(nav_link_variant("/blocks", "/"), ButtonVariant::Ghost);
        assert_eq!(nav_link_variant("/blocks", "/blocks"), ButtonVariant::Default);
        assert_eq!(nav_link_variant("/blocks/", "/blocks"), ButtonVariant::Default);
        assert_eq!(nav_link_variant("/blocks/hero", "/blocks"), ButtonVariant::Ghost);
        assert_eq!(nav_link_variant("/blocksmith", "/blocks"), ButtonVariant::Ghost);
        assert_eq!(nav_link_variant("/primitives", "/blocks"), ButtonVariant::Ghost);
    }
}
