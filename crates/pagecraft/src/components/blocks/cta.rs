use serde::Deserialize;

use crate::compose::{wrap_block, BlockDefaults, BlockFrame, BlockSize};
use crate::components::button::{ButtonSize, CallToAction};
use crate::components::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use crate::components::image::{Image, ImageSource, Loading, Ratio};
use crate::components::layout::{Stack, StackAlign};
use crate::components::text::{Text, TextAlign, TextVariant};
use crate::components::tokens::{Background, Gap, Tone};
use crate::components::Render;
use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::ComponentStyleSpec;

use super::{card, cta_row, muted, optional_eyebrow, required};

token_enum! {
    pub enum CtaVariant ("cta variant") {
        Banner => "banner",
        Card => "card",
        Inline => "inline",
    }
    default Banner
}

pub static CTA_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "CTABlock",
    base: &[Class("w-full")],
    axes: &[
        axis!("variant" default "banner" {
            "banner" => [Class("text-center py-8")],
            "card" => [Class("max-w-2xl mx-auto")],
            "inline" => [Class("flex items-center justify-between flex-col sm:flex-row gap-6")],
        }),
        axis!("size" default "md" {
            "sm" => [],
            "md" => [],
            "lg" => [],
            "xl" => [],
        }),
    ],
};

const DEFAULTS: BlockDefaults = BlockDefaults {
    size: BlockSize::Md,
    tone: Tone::Primary,
    background: Background::Primary,
};

/// A conversion block built around one required call to action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(default)]
    pub variant: CtaVariant,
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

impl CtaBlock {
    pub fn new(title: impl Into<String>, cta: CallToAction) -> Self {
        Self {
            title: Some(title.into()),
            cta: Some(cta),
            ..Self::default()
        }
    }

    fn buttons(&self, compact: bool) -> Result<Option<Node>, Error> {
        let (size, class) = if compact {
            (ButtonSize::Default, "flex gap-3")
        } else {
            (ButtonSize::Lg, "flex flex-col sm:flex-row gap-4 justify-center")
        };
        cta_row(self.cta.as_ref(), self.secondary_cta.as_ref(), size, class)
    }

    fn banner(&self, title: &str) -> Result<Vec<Node>, Error> {
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
            .child(
                Heading::new(HeadingLevel::H2, title)
                    .size(HeadingSize::Xl3)
                    .weight(FontWeight::Bold)
                    .render()?,
            )
            .child_opt(subtitle)
            .child_opt(self.buttons(false)?)
            .render()?;
        Ok(vec![stack])
    }

    fn card(&self, title: &str) -> Result<Vec<Node>, Error> {
        let image = self
            .image
            .as_ref()
            .map(|source| {
                Image::new(source.clone())
                    .fallback_ratio(Ratio::WIDESCREEN)
                    .loading(Loading::Lazy)
                    .class("w-full h-full object-cover")
                    .render()
            })
            .transpose()?
            .map(|image| {
                Element::new("div")
                    .class("aspect-video relative overflow-hidden")
                    .child(image)
            });

        let header = card::header("text-center pb-4")
            .child_opt(optional_eyebrow(self.eyebrow.as_deref(), "mb-3")?)
            .child(
                Heading::new(HeadingLevel::H2, title)
                    .size(HeadingSize::Xl2)
                    .weight(FontWeight::Bold)
                    .render()?,
            );
        let content = card::content("text-center pt-0")
            .child_opt(muted(self.subtitle.as_deref(), TextVariant::Default, "mb-6")?)
            .child_opt(self.buttons(false)?);

        Ok(vec![card::card("overflow-hidden")
            .child_opt(image)
            .child(header)
            .child(content)
            .into()])
    }

    fn inline(&self, title: &str) -> Result<Vec<Node>, Error> {
        let text = Element::new("div")
            .class("flex-1 text-center sm:text-left")
            .child(
                Heading::new(HeadingLevel::H2, title)
                    .size(HeadingSize::Xl)
                    .weight(FontWeight::Semibold)
                    .class("mb-2")
                    .render()?,
            )
            .child_opt(muted(self.subtitle.as_deref(), TextVariant::Default, "")?);
        let actions = Element::new("div")
            .class("flex-shrink-0")
            .child_opt(self.buttons(true)?);
        Ok(vec![text.into(), actions.into()])
    }
}

impl Render for CtaBlock {
    fn render(&self) -> Result<Node, Error> {
        let title = required(self.title.as_deref(), "CTABlock", "title")?;
        required(self.cta.as_ref(), "CTABlock", "cta")?;

        let layout = match self.variant {
            CtaVariant::Banner => self.banner(title)?,
            CtaVariant::Card => self.card(title)?,
            CtaVariant::Inline => self.inline(title)?,
        };
        let root = self
            .frame
            .content_root(&CTA_STYLE, self.variant.as_str(), &DEFAULTS)?
            .children(layout);
        wrap_block(root.into(), &self.frame, &DEFAULTS)
    }
}
