use serde::Deserialize;

use crate::compose::{wrap_block, BlockDefaults, BlockFrame, BlockSize};
use crate::components::button::{ButtonSize, CallToAction};
use crate::components::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use crate::components::image::{Image, ImageSource, Ratio};
use crate::components::layout::{Stack, StackAlign};
use crate::components::text::{Text, TextVariant};
use crate::components::tokens::{Background, Gap, Tone};
use crate::components::Render;
use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::ComponentStyleSpec;

use super::{bullet, cta_row, muted, optional_eyebrow, required};

token_enum! {
    /// Which side the image sits on, or `stacked` for image above text.
    pub enum MediaTextVariant ("media-text variant") {
        Left => "left",
        Right => "right",
        Stacked => "stacked",
    }
    default Left
}

pub static MEDIA_TEXT_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "MediaTextBlock",
    base: &[Class("w-full")],
    axes: &[
        axis!("variant" default "left" {
            "left" => [Class("grid grid-cols-1 lg:grid-cols-2 gap-8 items-center")],
            "right" => [Class("grid grid-cols-1 lg:grid-cols-2 gap-8 items-center lg:grid-flow-col-dense")],
            "stacked" => [Class("text-center space-y-8")],
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
    tone: Tone::Default,
    background: Background::Default,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTextBlock {
    #[serde(default)]
    pub variant: MediaTextVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub eyebrow: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<ImageSource>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
    #[serde(default)]
    pub secondary_cta: Option<CallToAction>,
    /// Short bullet lines under the copy.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub frame: BlockFrame,
}

impl MediaTextBlock {
    pub fn new(title: impl Into<String>, image: ImageSource) -> Self {
        Self {
            title: Some(title.into()),
            image: Some(image),
            ..Self::default()
        }
    }

    fn copy(&self, title: &str, gap: Gap, cta_class: &str) -> Result<Node, Error> {
        let stacked = self.variant == MediaTextVariant::Stacked;
        let content = self
            .content
            .as_deref()
            .map(|content| Text::new(content).render())
            .transpose()?;
        let bullets = self
            .features
            .iter()
            .map(|feature| bullet(feature, stacked))
            .collect::<Result<Vec<_>, _>>()?;
        let features = match (bullets.is_empty(), stacked) {
            (true, _) => None,
            (false, true) => Some(
                Element::new("div")
                    .class("grid grid-cols-1 sm:grid-cols-2 gap-3 mt-6")
                    .children(bullets)
                    .into(),
            ),
            (false, false) => Some(Stack::new().gap(Gap::Sm).children(bullets).render()?),
        };

        Stack::new()
            .gap(gap)
            .child_opt(optional_eyebrow(self.eyebrow.as_deref(), "")?)
            .child(
                Heading::new(HeadingLevel::H2, title)
                    .size(HeadingSize::Xl2)
                    .weight(FontWeight::Bold)
                    .render()?,
            )
            .child_opt(muted(self.subtitle.as_deref(), TextVariant::Lead, "")?)
            .child_opt(content)
            .child_opt(features)
            .child_opt(cta_row(
                self.cta.as_ref(),
                self.secondary_cta.as_ref(),
                ButtonSize::Lg,
                cta_class,
            )?)
            .render()
    }

    fn side(&self, title: &str, image: &ImageSource) -> Result<Vec<Node>, Error> {
        let right = self.variant == MediaTextVariant::Right;
        let copy = Element::new("div")
            .class(if right { "lg:col-start-1" } else { "" })
            .child(self.copy(title, Gap::Lg, "flex flex-col sm:flex-row gap-4")?);
        let media = Element::new("div")
            .class(if right { "lg:col-start-2" } else { "" })
            .child(
                Image::new(image.clone())
                    .fallback_ratio(Ratio::STANDARD)
                    .class("w-full")
                    .render()?,
            );
        Ok(vec![copy.into(), media.into()])
    }

    fn stacked(&self, title: &str, image: &ImageSource) -> Result<Vec<Node>, Error> {
        let media = Element::new("div").class("max-w-3xl w-full").child(
            Image::new(image.clone())
                .fallback_ratio(Ratio::WIDESCREEN)
                .class("w-full")
                .render()?,
        );
        let copy = Element::new("div").class("text-center max-w-3xl").child(self.copy(
            title,
            Gap::Md,
            "flex flex-col sm:flex-row gap-4 justify-center mt-6",
        )?);
        let stack = Stack::new()
            .gap(Gap::Lg)
            .align(StackAlign::Center)
            .class("max-w-4xl mx-auto")
            .child(media)
            .child(copy)
            .render()?;
        Ok(vec![stack])
    }
}

impl Render for MediaTextBlock {
    fn render(&self) -> Result<Node, Error> {
        let title = required(self.title.as_deref(), "MediaTextBlock", "title")?;
        let image = required(self.image.as_ref(), "MediaTextBlock", "image")?;

        let layout = match self.variant {
            MediaTextVariant::Left | MediaTextVariant::Right => self.side(title, image)?,
            MediaTextVariant::Stacked => self.stacked(title, image)?,
        };
        let root = self
            .frame
            .content_root(&MEDIA_TEXT_STYLE, self.variant.as_str(), &DEFAULTS)?
            .children(layout);
        wrap_block(root.into(), &self.frame, &DEFAULTS)
    }
}
