use serde::Deserialize;

use crate::compose::{wrap_block, BlockDefaults, BlockFrame, BlockSize};
use crate::components::button::{ButtonSize, CallToAction};
use crate::components::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use crate::components::image::{FetchPriority, Image, ImageSource, Loading, Ratio};
use crate::components::layout::{Grid, GridCols, Stack, StackAlign};
use crate::components::text::{Text, TextAlign, TextVariant};
use crate::components::tokens::{Background, Gap, Tone};
use crate::components::Render;
use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::ComponentStyleSpec;

use super::{cta_row, muted, optional_eyebrow, required};

token_enum! {
    pub enum HeroVariant ("hero variant") {
        Centered => "centered",
        Split => "split",
        Minimal => "minimal",
    }
    default Centered
}

pub static HERO_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "HeroBlock",
    base: &[Class("w-full")],
    axes: &[
        axis!("variant" default "centered" {
            "centered" => [Class("text-center")],
            "split" => [Class("text-left")],
            "minimal" => [Class("text-left max-w-4xl mx-auto")],
        }),
        axis!("size" default "lg" {
            "sm" => [],
            "md" => [],
            "lg" => [],
            "xl" => [],
        }),
    ],
};

const DEFAULTS: BlockDefaults = BlockDefaults {
    size: BlockSize::Lg,
    tone: Tone::Default,
    background: Background::Default,
};

const CTA_ROW: &str = "flex flex-col sm:flex-row gap-4 justify-center";

/// The opening block of a page: one `h1`, optional kicker, subtitle, calls
/// to action and image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(default)]
    pub variant: HeroVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub eyebrow: Option<String>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
    #[serde(default)]
    pub secondary_cta: Option<CallToAction>,
    #[serde(default)]
    pub image: Option<ImageSource>,
    #[serde(flatten)]
    pub frame: BlockFrame,
}

impl HeroBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    fn title(&self, size: HeadingSize, weight: FontWeight) -> Result<Node, Error> {
        let title = required(self.title.as_deref(), "HeroBlock", "title")?;
        Heading::new(HeadingLevel::H1, title)
            .size(size)
            .weight(weight)
            .render()
    }

    fn image(&self, wrapper: &'static str) -> Result<Option<Node>, Error> {
        let Some(source) = &self.image else {
            return Ok(None);
        };
        let image = Image::new(source.clone())
            .fallback_ratio(Ratio::WIDESCREEN)
            .loading(Loading::Eager)
            .fetch_priority(FetchPriority::High)
            .class("w-full")
            .render()?;
        Ok(Some(Element::new("div").class(wrapper).child(image).into()))
    }

    fn split(&self) -> Result<Vec<Node>, Error> {
        let text = Stack::new()
            .gap(Gap::Lg)
            .child_opt(optional_eyebrow(self.eyebrow.as_deref(), "")?)
            .child(self.title(HeadingSize::Xl3, FontWeight::Bold)?)
            .child_opt(muted(self.subtitle.as_deref(), TextVariant::Lead, "")?)
            .child_opt(cta_row(
                self.cta.as_ref(),
                self.secondary_cta.as_ref(),
                ButtonSize::Lg,
                CTA_ROW,
            )?)
            .render()?;
        let grid = Grid::new(GridCols::Two)
            .gap(Gap::Xl)
            .class("items-center")
            .children(std::iter::once(text).chain(self.image("order-first md:order-last")?))
            .render()?;
        Ok(vec![grid])
    }

    fn centered(&self) -> Result<Vec<Node>, Error> {
        let subtitle = self
            .subtitle
            .as_deref()
            .map(|subtitle| {
                Text::new(subtitle)
                    .variant(TextVariant::Lead)
                    .align(TextAlign::Center)
                    .class("text-muted-foreground max-w-2xl")
                    .render()
            })
            .transpose()?;
        let stack = Stack::new()
            .gap(Gap::Lg)
            .align(StackAlign::Center)
            .class("max-w-4xl mx-auto")
            .child_opt(optional_eyebrow(self.eyebrow.as_deref(), "")?)
            .child(self.title(HeadingSize::Xl3, FontWeight::Bold)?)
            .child_opt(subtitle)
            .child_opt(cta_row(
                self.cta.as_ref(),
                self.secondary_cta.as_ref(),
                ButtonSize::Lg,
                CTA_ROW,
            )?)
            .child_opt(self.image("mt-8 max-w-3xl w-full")?)
            .render()?;
        Ok(vec![stack])
    }

    fn minimal(&self) -> Result<Vec<Node>, Error> {
        let buttons = cta_row(
            self.cta.as_ref(),
            self.secondary_cta.as_ref(),
            ButtonSize::Default,
            "flex gap-3 mt-2",
        )?
        .unwrap_or_else(|| Element::new("div").class("flex gap-3 mt-2").into());
        let stack = Stack::new()
            .gap(Gap::Md)
            .class("max-w-2xl")
            .child_opt(optional_eyebrow(self.eyebrow.as_deref(), "")?)
            .child(self.title(HeadingSize::Xl2, FontWeight::Semibold)?)
            .child_opt(muted(self.subtitle.as_deref(), TextVariant::Default, "")?)
            .child(buttons)
            .render()?;
        Ok(vec![stack])
    }
}

impl Render for HeroBlock {
    fn render(&self) -> Result<Node, Error> {
        let layout = match self.variant {
            HeroVariant::Split => self.split()?,
            HeroVariant::Centered => self.centered()?,
            HeroVariant::Minimal => self.minimal()?,
        };
        let root = self
            .frame
            .content_root(&HERO_STYLE, self.variant.as_str(), &DEFAULTS)?
            .children(layout);
        wrap_block(root.into(), &self.frame, &DEFAULTS)
    }
}
