use pagecraft_merge::merge_classes;
use serde::Deserialize;

use crate::compose::{wrap_block, BlockDefaults, BlockFrame, BlockSize};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use crate::components::image::{Image, ImageSource, Ratio, Rounded};
use crate::components::layout::{Grid, GridCols, Stack};
use crate::components::text::{Text, TextVariant};
use crate::components::tokens::{Background, Gap, Tone};
use crate::components::Render;
use crate::error::{Error, MissingFieldError};
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::ComponentStyleSpec;

use super::{card, section_header};

token_enum! {
    pub enum FeaturesVariant ("features variant") {
        Grid => "grid",
        List => "list",
        Cards => "cards",
    }
    default Grid
}

numeric_enum! {
    pub enum FeaturesColumns ("feature columns") {
        Two => 2,
        Three => 3,
        Four => 4,
    }
    default Three
}

impl From<FeaturesColumns> for GridCols {
    fn from(columns: FeaturesColumns) -> Self {
        match columns {
            FeaturesColumns::Two => GridCols::Two,
            FeaturesColumns::Three => GridCols::Three,
            FeaturesColumns::Four => GridCols::Four,
        }
    }
}

pub static FEATURES_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "FeaturesBlock",
    base: &[Class("w-full")],
    axes: &[
        axis!("variant" default "grid" {
            "grid" => [],
            "list" => [Class("space-y-8")],
            "cards" => [],
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

const LEARN_MORE: &str = "En savoir plus →";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureItem {
    #[serde(default)]
    pub id: Option<String>,
    /// A short glyph or emoji shown above the title.
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub image: Option<ImageSource>,
}

impl FeatureItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            icon: None,
            title: title.into(),
            description: description.into(),
            href: None,
            image: None,
        }
    }

    fn image(&self, ratio: Ratio) -> Result<Option<Node>, Error> {
        self.image
            .as_ref()
            .map(|source| {
                Image::new(source.clone())
                    .fallback_ratio(ratio)
                    .class("w-full")
                    .render()
            })
            .transpose()
    }

    fn learn_more(&self, class: &str) -> Result<Option<Node>, Error> {
        self.href
            .as_deref()
            .map(|href| {
                Button::new(LEARN_MORE)
                    .variant(ButtonVariant::Ghost)
                    .size(ButtonSize::Sm)
                    .href(href)
                    .class(class)
                    .render()
            })
            .transpose()
    }

    /// The icon, title and description column. `list` layouts are left
    /// aligned and slightly larger.
    fn render_item(&self, list: bool) -> Result<Node, Error> {
        let icon = self.icon.as_deref().map(|icon| {
            let (wrapper, tile) = if list {
                ("mb-3", "w-10 h-10 text-lg")
            } else {
                ("mb-4 flex justify-center", "w-12 h-12 text-xl")
            };
            Element::new("div").class(wrapper).child(
                Element::new("div")
                    .class(merge_classes(&[
                        "flex items-center justify-center rounded-lg bg-primary/10",
                        tile,
                    ]))
                    .child(Element::new("span").child(icon)),
            )
        });
        let image = if self.icon.is_none() && !list {
            self.image(Ratio::WIDESCREEN)?
                .map(|image| Element::new("div").class("mb-4").child(image))
        } else {
            None
        };

        let (gap, size, variant, text_class) = if list {
            (Gap::Xs, HeadingSize::Xl, TextVariant::Default, "text-lg")
        } else {
            (Gap::Sm, HeadingSize::Lg, TextVariant::Muted, "")
        };
        let body = Stack::new()
            .gap(gap)
            .child(
                Heading::new(HeadingLevel::H3, self.title.as_str())
                    .size(size)
                    .weight(FontWeight::Semibold)
                    .render()?,
            )
            .child(
                Text::new(self.description.as_str())
                    .variant(variant)
                    .class(text_class)
                    .render()?,
            )
            .child_opt(if list {
                None
            } else {
                self.learn_more("mt-2 p-0 h-auto font-medium")?
            })
            .render()?;

        Ok(Element::new("div")
            .class(if list { "text-left" } else { "text-center" })
            .child_opt(icon)
            .child_opt(image)
            .child(body)
            .into())
    }

    fn render_card(&self) -> Result<Node, Error> {
        let image = self
            .image
            .as_ref()
            .map(|source| {
                Image::new(source.clone())
                    .fallback_ratio(Ratio::WIDESCREEN)
                    .rounded(Rounded::Md)
                    .class("w-full")
                    .render()
            })
            .transpose()?
            .map(|image| Element::new("div").class("p-6 pb-0").child(image));
        let icon = self.icon.as_deref().map(|icon| {
            Element::new("div")
                .class("mb-2")
                .child(Element::new("span").class("text-2xl").child(icon))
        });

        Ok(card::card("h-full")
            .child_opt(image)
            .child(
                card::header("")
                    .child_opt(icon)
                    .child(card::title(&self.title, "")),
            )
            .child(
                card::content("")
                    .child(card::description(&self.description, "text-base"))
                    .child_opt(self.learn_more("mt-4 p-0 h-auto font-medium")?),
            )
            .into())
    }
}

/// A grid, alternating list or card grid of features under an optional
/// header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesBlock {
    #[serde(default)]
    pub variant: FeaturesVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub eyebrow: Option<String>,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
    #[serde(default)]
    pub columns: FeaturesColumns,
    #[serde(flatten)]
    pub frame: BlockFrame,
}

impl FeaturesBlock {
    pub fn new(features: Vec<FeatureItem>) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    fn grid(&self) -> Result<Node, Error> {
        let items = self
            .features
            .iter()
            .map(|feature| feature.render_item(false))
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(self.columns.into())
            .gap(Gap::Lg)
            .children(items)
            .render()
    }

    fn list(&self) -> Result<Node, Error> {
        let mut rows = Vec::with_capacity(self.features.len());
        for (index, feature) in self.features.iter().enumerate() {
            let flipped = index % 2 == 1;
            let row_class = if flipped {
                "grid grid-cols-1 lg:grid-cols-2 gap-8 items-center lg:grid-flow-col-dense"
            } else {
                "grid grid-cols-1 lg:grid-cols-2 gap-8 items-center"
            };
            let image = feature.image(Ratio::STANDARD)?.map(|image| {
                Element::new("div")
                    .class(if flipped { "lg:col-start-1" } else { "" })
                    .child(image)
            });
            rows.push(
                Element::new("div")
                    .class(row_class)
                    .child(
                        Element::new("div")
                            .class(if flipped { "lg:col-start-2" } else { "" })
                            .child(feature.render_item(true)?),
                    )
                    .child_opt(image)
                    .into(),
            );
        }
        Stack::new().gap(Gap::Xl).children(rows).render()
    }

    fn cards(&self) -> Result<Node, Error> {
        let cards = self
            .features
            .iter()
            .map(FeatureItem::render_card)
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(self.columns.into())
            .gap(Gap::Lg)
            .children(cards)
            .render()
    }
}

impl Render for FeaturesBlock {
    fn render(&self) -> Result<Node, Error> {
        if self.features.is_empty() {
            return Err(MissingFieldError::new("FeaturesBlock", "features").into());
        }
        let header = section_header(
            self.title.as_deref(),
            self.subtitle.as_deref(),
            self.eyebrow.as_deref(),
        )?;
        let layout = match self.variant {
            FeaturesVariant::Grid => self.grid()?,
            FeaturesVariant::List => self.list()?,
            FeaturesVariant::Cards => self.cards()?,
        };
        let root = self
            .frame
            .content_root(&FEATURES_STYLE, self.variant.as_str(), &DEFAULTS)?
            .child_opt(header)
            .child(layout);
        wrap_block(root.into(), &self.frame, &DEFAULTS)
    }
}
