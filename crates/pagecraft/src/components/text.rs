//! Text primitive.

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::{resolve, ComponentStyleSpec, StyleProps};

use super::Render;

token_enum! {
    pub enum TextVariant ("text variant") {
        Default => "default",
        Muted => "muted",
        Small => "small",
        Lead => "lead",
        Large => "large",
    }
    default Default
}

token_enum! {
    pub enum TextAlign ("text alignment") {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
    default Left
}

token_enum! {
    pub enum TextTag ("text tag") {
        P => "p",
        Span => "span",
        Div => "div",
    }
    default P
}

numeric_enum! {
    /// Maximum number of visible lines.
    pub enum ClampLines ("line clamp") {
        Two => 2,
        Three => 3,
        Four => 4,
        Five => 5,
        Six => 6,
    }
    default Three
}

pub static TEXT_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Text",
    base: &[Class("font-body")],
    axes: &[
        axis!("variant" default "default" {
            "default" => [Class("text-foreground")],
            "muted" => [Class("text-muted-foreground")],
            "small" => [Class("text-sm text-muted-foreground")],
            "lead" => [Class("text-xl text-foreground font-light leading-7")],
            "large" => [Class("text-lg font-semibold text-foreground")],
        }),
        axis!("align" default "left" {
            "left" => [Class("text-left")],
            "center" => [Class("text-center")],
            "right" => [Class("text-right")],
            "justify" => [Class("text-justify")],
        }),
        axis!("clamp" default "none" {
            "none" => [],
            "2" => [Class("line-clamp-2")],
            "3" => [Class("line-clamp-3")],
            "4" => [Class("line-clamp-4")],
            "5" => [Class("line-clamp-5")],
            "6" => [Class("line-clamp-6")],
        }),
    ],
};

/// Body copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub tag: TextTag,
    pub variant: TextVariant,
    pub align: TextAlign,
    pub truncate: bool,
    pub clamp: Option<ClampLines>,
    pub class: Option<String>,
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    pub fn clamp(mut self, lines: ClampLines) -> Self {
        self.clamp = Some(lines);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for Text {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("variant", self.variant.as_str())
            .with("align", self.align.as_str())
            .with_opt("clamp", self.clamp.map(ClampLines::as_str));

        let extra = [self.truncate.then_some("truncate"), self.class.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let style = resolve(&TEXT_STYLE, &props, Some(&extra))?;

        Ok(Element::new(self.tag.as_str())
            .styled(&style)
            .attr("data-variant", self.variant.as_str())
            .child(self.text.as_str())
            .into())
    }
}
