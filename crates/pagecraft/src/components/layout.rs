//! Layout primitives: Stack, Grid and Container.

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::{Bind, Class};
use crate::style::{resolve, ComponentStyleSpec, StyleProps};

use super::tokens::{Gap, Pad};
use super::Render;

token_enum! {
    pub enum StackAlign ("stack alignment") {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
    }
    default Start
}

token_enum! {
    pub enum StackJustify ("stack justification") {
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Around => "around",
    }
    default Start
}

token_enum! {
    pub enum StackTag ("stack tag") {
        Div => "div",
        Section => "section",
        Article => "article",
    }
    default Div
}

numeric_enum! {
    /// Column count at the widest breakpoint.
    pub enum GridCols ("grid columns") {
        One => 1,
        Two => 2,
        Three => 3,
        Four => 4,
        Six => 6,
        Twelve => 12,
    }
    default Three
}

token_enum! {
    pub enum ContainerWidth ("container width") {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
    default Lg
}

pub static STACK_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Stack",
    base: &[Class("flex flex-col")],
    axes: &[
        axis!("gap" default "md" {
            "xs" => [Bind { name: "--stack-gap", value: "var(--spacing-xs)" }, Class("gap-[var(--stack-gap)]")],
            "sm" => [Bind { name: "--stack-gap", value: "var(--spacing-sm)" }, Class("gap-[var(--stack-gap)]")],
            "md" => [Bind { name: "--stack-gap", value: "var(--spacing-md)" }, Class("gap-[var(--stack-gap)]")],
            "lg" => [Bind { name: "--stack-gap", value: "var(--spacing-lg)" }, Class("gap-[var(--stack-gap)]")],
            "xl" => [Bind { name: "--stack-gap", value: "var(--spacing-xl)" }, Class("gap-[var(--stack-gap)]")],
        }),
        axis!("align" default "start" {
            "start" => [Class("items-start")],
            "center" => [Class("items-center")],
            "end" => [Class("items-end")],
            "stretch" => [Class("items-stretch")],
        }),
        axis!("justify" default "start" {
            "start" => [Class("justify-start")],
            "center" => [Class("justify-center")],
            "end" => [Class("justify-end")],
            "between" => [Class("justify-between")],
            "around" => [Class("justify-around")],
        }),
    ],
};

pub static GRID_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Grid",
    base: &[Class("grid")],
    axes: &[
        axis!("cols" default "3" {
            "1" => [Class("grid-cols-1")],
            "2" => [Class("grid-cols-1 sm:grid-cols-2")],
            "3" => [Class("grid-cols-1 sm:grid-cols-2 lg:grid-cols-3")],
            "4" => [Class("grid-cols-1 sm:grid-cols-2 lg:grid-cols-4")],
            "6" => [Class("grid-cols-2 sm:grid-cols-3 lg:grid-cols-6")],
            "12" => [Class("grid-cols-12")],
        }),
        axis!("gap" default "md" {
            "xs" => [Bind { name: "--grid-gap", value: "var(--spacing-xs)" }, Class("gap-[var(--grid-gap)]")],
            "sm" => [Bind { name: "--grid-gap", value: "var(--spacing-sm)" }, Class("gap-[var(--grid-gap)]")],
            "md" => [Bind { name: "--grid-gap", value: "var(--spacing-md)" }, Class("gap-[var(--grid-gap)]")],
            "lg" => [Bind { name: "--grid-gap", value: "var(--spacing-lg)" }, Class("gap-[var(--grid-gap)]")],
            "xl" => [Bind { name: "--grid-gap", value: "var(--spacing-xl)" }, Class("gap-[var(--grid-gap)]")],
        }),
    ],
};

pub static CONTAINER_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Container",
    base: &[Class("mx-auto")],
    axes: &[
        axis!("width" default "lg" {
            "sm" => [Class("max-w-2xl")],
            "md" => [Class("max-w-4xl")],
            "lg" => [Class("max-w-6xl")],
            "xl" => [Class("max-w-7xl")],
            "full" => [Class("max-w-full")],
        }),
        axis!("pad" default "md" {
            "none" => [Bind { name: "--container-px", value: "0" }, Class("px-[var(--container-px)]")],
            "sm" => [Bind { name: "--container-px", value: "var(--spacing-sm)" }, Class("px-[var(--container-px)]")],
            "md" => [Bind { name: "--container-px", value: "var(--spacing-md)" }, Class("px-[var(--container-px)]")],
            "lg" => [Bind { name: "--container-px", value: "var(--spacing-lg)" }, Class("px-[var(--container-px)]")],
        }),
    ],
};

/// Vertical flex column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub tag: StackTag,
    pub gap: Gap,
    pub align: StackAlign,
    pub justify: StackJustify,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: StackAlign) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: StackJustify) -> Self {
        self.justify = justify;
        self
    }

    pub fn tag(mut self, tag: StackTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn child_opt<N: Into<Node>>(mut self, node: Option<N>) -> Self {
        self.children.extend(node.map(Into::into));
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

impl Render for Stack {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("gap", self.gap.as_str())
            .with("align", self.align.as_str())
            .with("justify", self.justify.as_str());
        let style = resolve(&STACK_STYLE, &props, self.class.as_deref())?;
        Ok(Element::new(self.tag.as_str())
            .styled(&style)
            .attr("data-gap", self.gap.as_str())
            .attr("data-align", self.align.as_str())
            .children(self.children.iter().cloned())
            .into())
    }
}

/// Responsive grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub cols: GridCols,
    pub gap: Gap,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Grid {
    pub fn new(cols: GridCols) -> Self {
        Self {
            cols,
            ..Self::default()
        }
    }

    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

impl Render for Grid {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("cols", self.cols.as_str())
            .with("gap", self.gap.as_str());
        let style = resolve(&GRID_STYLE, &props, self.class.as_deref())?;
        Ok(Element::new("div")
            .styled(&style)
            .attr("data-cols", self.cols.as_str())
            .attr("data-gap", self.gap.as_str())
            .children(self.children.iter().cloned())
            .into())
    }
}

/// Centered max-width wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub width: ContainerWidth,
    pub pad: Pad,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: ContainerWidth) -> Self {
        self.width = width;
        self
    }

    pub fn pad(mut self, pad: Pad) -> Self {
        self.pad = pad;
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

impl Render for Container {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("width", self.width.as_str())
            .with("pad", self.pad.as_str());
        let style = resolve(&CONTAINER_STYLE, &props, self.class.as_deref())?;
        Ok(Element::new("div")
            .styled(&style)
            .attr("data-width", self.width.as_str())
            .children(self.children.iter().cloned())
            .into())
    }
}
