//! Page blocks: hero, features, call to action, pricing, media and text.
//!
//! A block is a [`BlockFrame`](crate::compose::BlockFrame) plus its own
//! content props. Rendering builds the content root from the block's style
//! table and hands the result to [`wrap_block`](crate::compose::wrap_block).

pub mod cta;
pub mod features;
pub mod hero;
pub mod media_text;
pub mod pricing;

pub use cta::{CtaBlock, CtaVariant, CTA_STYLE};
pub use features::{FeatureItem, FeaturesBlock, FeaturesColumns, FeaturesVariant, FEATURES_STYLE};
pub use hero::{HeroBlock, HeroVariant, HERO_STYLE};
pub use media_text::{MediaTextBlock, MediaTextVariant, MEDIA_TEXT_STYLE};
pub use pricing::{
    FeatureRow, FeatureValue, Plan, PlanCta, PlanFeatures, PricingBlock, PricingVariant,
    PRICING_STYLE,
};

use pagecraft_merge::merge_classes;

use crate::error::{Error, MissingFieldError};
use crate::render::{Element, Node};

use super::button::{Button, ButtonSize, ButtonVariant, CallToAction};
use super::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use super::text::{Text, TextVariant};
use super::Render;

const EYEBROW: &str = "uppercase tracking-wide font-medium text-muted-foreground";

fn required<'a, T: ?Sized>(
    value: Option<&'a T>,
    component: &'static str,
    field: &'static str,
) -> Result<&'a T, MissingFieldError> {
    value.ok_or(MissingFieldError::new(component, field))
}

fn eyebrow(text: &str, extra: &str) -> Result<Node, Error> {
    Text::new(text)
        .variant(TextVariant::Small)
        .class(merge_classes(&[EYEBROW, extra]))
        .render()
}

fn optional_eyebrow(text: Option<&str>, extra: &str) -> Result<Option<Node>, Error> {
    text.map(|text| eyebrow(text, extra)).transpose()
}

/// Muted text of the given variant, `None` when there is no text.
fn muted(text: Option<&str>, variant: TextVariant, extra: &str) -> Result<Option<Node>, Error> {
    text.map(|text| {
        Text::new(text)
            .variant(variant)
            .class(merge_classes(&["text-muted-foreground", extra]))
            .render()
    })
    .transpose()
}

/// The centered eyebrow / title / subtitle header above list-like blocks.
fn section_header(
    title: Option<&str>,
    subtitle: Option<&str>,
    kicker: Option<&str>,
) -> Result<Option<Node>, Error> {
    if title.is_none() && subtitle.is_none() && kicker.is_none() {
        return Ok(None);
    }
    let heading = title
        .map(|title| {
            Heading::new(HeadingLevel::H2, title)
                .size(HeadingSize::Xl2)
                .weight(FontWeight::Bold)
                .class("mb-4")
                .render()
        })
        .transpose()?;
    Ok(Some(
        Element::new("div")
            .class("text-center max-w-3xl mx-auto mb-12")
            .child_opt(optional_eyebrow(kicker, "mb-3")?)
            .child_opt(heading)
            .child_opt(muted(subtitle, TextVariant::Lead, "")?)
            .into(),
    ))
}

/// Primary and secondary call-to-action buttons in one row.
fn cta_row(
    primary: Option<&CallToAction>,
    secondary: Option<&CallToAction>,
    size: ButtonSize,
    class: &str,
) -> Result<Option<Node>, Error> {
    if primary.is_none() && secondary.is_none() {
        return Ok(None);
    }
    let primary = primary
        .map(|cta| Button::from_cta(cta, ButtonVariant::Default, size).render())
        .transpose()?;
    let secondary = secondary
        .map(|cta| Button::from_cta(cta, ButtonVariant::Outline, size).render())
        .transpose()?;
    Ok(Some(
        Element::new("div")
            .class(class)
            .child_opt(primary)
            .child_opt(secondary)
            .into(),
    ))
}

/// A bulleted line used by media-text feature lists.
fn bullet(text: &str, compact: bool) -> Result<Node, Error> {
    let (row, dot_shell, dot, variant) = if compact {
        (
            "flex items-center gap-2 justify-center sm:justify-start",
            "flex-shrink-0 w-4 h-4 rounded-full bg-primary/20 flex items-center justify-center",
            "w-1.5 h-1.5 rounded-full bg-primary",
            TextVariant::Small,
        )
    } else {
        (
            "flex items-start gap-3",
            "flex-shrink-0 w-5 h-5 rounded-full bg-primary/20 flex items-center justify-center mt-0.5",
            "w-2 h-2 rounded-full bg-primary",
            TextVariant::Default,
        )
    };
    Ok(Element::new("div")
        .class(row)
        .child(
            Element::new("div")
                .class(dot_shell)
                .child(Element::new("div").class(dot)),
        )
        .child(Text::new(text).variant(variant).render()?)
        .into())
}

mod card {
    //! Card surface shared by the card-style layouts.

    use pagecraft_merge::merge_classes;

    use crate::render::Element;

    pub(super) fn card(extra: &str) -> Element {
        Element::new("div").class(merge_classes(&[
            "rounded-lg border bg-card text-card-foreground shadow-sm",
            extra,
        ]))
    }

    pub(super) fn header(extra: &str) -> Element {
        Element::new("div").class(merge_classes(&["flex flex-col space-y-1.5 p-6", extra]))
    }

    pub(super) fn content(extra: &str) -> Element {
        Element::new("div").class(merge_classes(&["p-6 pt-0", extra]))
    }

    pub(super) fn title(text: &str, extra: &str) -> Element {
        Element::new("h3")
            .class(merge_classes(&[
                "text-2xl font-semibold leading-none tracking-tight",
                extra,
            ]))
            .child(text)
    }

    pub(super) fn description(text: &str, extra: &str) -> Element {
        Element::new("p")
            .class(merge_classes(&["text-sm text-muted-foreground", extra]))
            .child(text)
    }

    pub(super) fn badge(text: &str, filled: bool, extra: &str) -> Element {
        let tone = if filled {
            "border-transparent bg-primary text-primary-foreground"
        } else {
            "text-foreground"
        };
        Element::new("div")
            .class(merge_classes(&[
                "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold",
                tone,
                extra,
            ]))
            .child(text)
    }
}
