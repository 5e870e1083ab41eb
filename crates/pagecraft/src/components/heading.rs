//! Heading primitive.

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::{resolve, ComponentStyleSpec, StyleProps};

use super::Render;

token_enum! {
    pub enum HeadingSize ("heading size") {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
    }
    default Lg
}

token_enum! {
    pub enum FontWeight ("font weight") {
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
    default Semibold
}

numeric_enum! {
    /// Document outline level. Independent of the visual size.
    pub enum HeadingLevel ("heading level") {
        H1 => 1,
        H2 => 2,
        H3 => 3,
        H4 => 4,
        H5 => 5,
        H6 => 6,
    }
    default H2
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

token_enum! {
    /// Element override for a heading that must not be an `hN`.
    pub enum HeadingTag ("heading tag") {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        P => "p",
    }
    default H2
}

pub static HEADING_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Heading",
    base: &[Class("font-heading tracking-tight")],
    axes: &[
        axis!("size" default "lg" {
            "xs" => [Class("[--heading-size:0.75rem] [--heading-lh:1rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "sm" => [Class("[--heading-size:0.875rem] [--heading-lh:1.25rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "md" => [Class("[--heading-size:1rem] [--heading-lh:1.5rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "lg" => [Class("[--heading-size:1.125rem] [--heading-lh:1.75rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "xl" => [Class("[--heading-size:1.25rem] [--heading-lh:1.75rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "2xl" => [Class("[--heading-size:1.5rem] [--heading-lh:2rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
            "3xl" => [Class("[--heading-size:1.875rem] [--heading-lh:2.25rem] text-[var(--heading-size)] leading-[var(--heading-lh)]")],
        }),
        axis!("weight" default "semibold" {
            "normal" => [Class("font-normal")],
            "medium" => [Class("font-medium")],
            "semibold" => [Class("font-semibold")],
            "bold" => [Class("font-bold")],
        }),
    ],
};

/// A section title with an optional kicker line above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub tag: Option<HeadingTag>,
    pub size: HeadingSize,
    pub weight: FontWeight,
    pub eyebrow: Option<String>,
    pub class: Option<String>,
    pub text: String,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            tag: None,
            size: HeadingSize::default(),
            weight: FontWeight::default(),
            eyebrow: None,
            class: None,
            text: text.into(),
        }
    }

    pub fn size(mut self, size: HeadingSize) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn tag(mut self, tag: HeadingTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for Heading {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("size", self.size.as_str())
            .with("weight", self.weight.as_str());
        let style = resolve(&HEADING_STYLE, &props, self.class.as_deref())?;

        let tag = match self.tag {
            Some(tag) => tag.as_str(),
            None => self.level.tag(),
        };
        let heading = Element::new(tag)
            .styled(&style)
            .attr("data-level", self.level.as_str())
            .attr("data-size", self.size.as_str())
            .child(self.text.as_str());

        let eyebrow = self.eyebrow.as_deref().map(|kicker| {
            Element::new("div")
                .class("text-sm font-medium text-muted-foreground mb-2 uppercase tracking-wide")
                .child(kicker)
        });

        Ok(Element::new("div").child_opt(eyebrow).child(heading).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading_element(node: &Node) -> Element {
        node.find_all(|e| e.get_attr("data-level").is_some())[0].clone()
    }

    #[test]
    fn test_level_drives_tag_unless_overridden() {
        let node = Heading::new(HeadingLevel::H3, "Plans").render().unwrap();
        assert_eq!(heading_element(&node).tag, "h3");

        let node = Heading::new(HeadingLevel::H3, "Plans")
            .tag(HeadingTag::P)
            .render()
            .unwrap();
        let element = heading_element(&node);
        assert_eq!(element.tag, "p");
        assert_eq!(element.get_attr("data-level"), Some("3"));
    }

    #[test]
    fn test_size_and_weight_classes() {
        let node = Heading::new(HeadingLevel::H1, "Hi")
            .size(HeadingSize::Xl3)
            .weight(FontWeight::Bold)
            .render()
            .unwrap();
        let element = heading_element(&node);
        assert!(element.has_class("font-bold"));
        assert!(!element.has_class("font-semibold"));
        assert!(element.has_class("[--heading-size:1.875rem]"));
    }

    #[test]
    fn test_eyebrow_renders_before_heading() {
        let node = Heading::new(HeadingLevel::H2, "Title")
            .eyebrow("New")
            .render()
            .unwrap();
        assert_eq!(node.text_content(), "NewTitle");
    }

    #[test]
    fn test_level_domain_is_closed() {
        assert_eq!("4".parse::<HeadingLevel>(), Ok(HeadingLevel::H4));
        assert!("7".parse::<HeadingLevel>().is_err());
        assert!(HeadingLevel::try_from(0u8).is_err());
    }

    #[test]
    fn test_every_size_and_weight_resolves() {
        for size in HeadingSize::ALL {
            for weight in FontWeight::ALL {
                let props = StyleProps::new()
                    .with("size", size.as_str())
                    .with("weight", weight.as_str());
                assert!(resolve(&HEADING_STYLE, &props, None).is_ok());
            }
        }
    }
}
