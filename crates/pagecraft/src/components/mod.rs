//! Primitives and blocks.
//!
//! Every component owns a static [`ComponentStyleSpec`] and resolves it
//! through [`resolve`](crate::style::resolve) when rendered; nothing here
//! concatenates class strings by hand.
//!
//! | Component | Style table |
//! |-----------|-------------|
//! | [`Heading`] | [`HEADING_STYLE`] |
//! | [`Text`] | [`TEXT_STYLE`] |
//! | [`Stack`] / [`Grid`] / [`Container`] | [`STACK_STYLE`] / [`GRID_STYLE`] / [`CONTAINER_STYLE`] |
//! | [`Section`] | [`SECTION_STYLE`] |
//! | [`Image`] | [`IMAGE_STYLE`] |
//! | [`Button`] | [`BUTTON_STYLE`] |
//! | blocks | [`HERO_STYLE`], [`FEATURES_STYLE`], [`CTA_STYLE`], [`PRICING_STYLE`], [`MEDIA_TEXT_STYLE`] |
//! | [`Header`] / [`Footer`] | [`HEADER_STYLE`] / [`FOOTER_STYLE`] |

pub mod blocks;
pub mod button;
pub mod heading;
pub mod image;
pub mod layout;
pub mod section;
pub mod shell;
pub mod text;
pub mod tokens;

pub use blocks::{
    CtaBlock, FeaturesBlock, HeroBlock, MediaTextBlock, PricingBlock, CTA_STYLE, FEATURES_STYLE,
    HERO_STYLE, MEDIA_TEXT_STYLE, PRICING_STYLE,
};
pub use button::{nav_link_variant, Button, ButtonSize, ButtonVariant, CallToAction, BUTTON_STYLE};
pub use heading::{FontWeight, Heading, HeadingLevel, HeadingSize, HeadingTag, HEADING_STYLE};
pub use image::{FetchPriority, Image, ImageSource, Loading, ObjectFit, Ratio, Rounded, IMAGE_STYLE};
pub use layout::{
    Container, ContainerWidth, Grid, GridCols, Stack, StackAlign, StackJustify, StackTag,
    CONTAINER_STYLE, GRID_STYLE, STACK_STYLE,
};
pub use section::{
    Bleed, ContainerOption, ContainerOptions, Section, SectionRole, SectionSpacing, SectionTag,
    SECTION_STYLE,
};
pub use shell::{
    Breadcrumbs, Crumb, DensityToggle, Footer, FooterColumn, FooterLink, FooterVariant, Header,
    HeaderVariant, NavLink, ThemeToggle, FOOTER_STYLE, HEADER_STYLE,
};
pub use text::{ClampLines, Text, TextAlign, TextTag, TextVariant, TEXT_STYLE};
pub use tokens::{Background, Gap, Pad, Tone};

use crate::error::Error;
use crate::render::Node;
use crate::style::ComponentStyleSpec;

/// Turns a component into its node tree.
pub trait Render {
    fn render(&self) -> Result<Node, Error>;
}

/// Every style table the library ships, primitives first.
pub static ALL_STYLES: &[&ComponentStyleSpec] = &[
    &HEADING_STYLE,
    &TEXT_STYLE,
    &STACK_STYLE,
    &GRID_STYLE,
    &CONTAINER_STYLE,
    &SECTION_STYLE,
    &IMAGE_STYLE,
    &BUTTON_STYLE,
    &HERO_STYLE,
    &FEATURES_STYLE,
    &CTA_STYLE,
    &PRICING_STYLE,
    &MEDIA_TEXT_STYLE,
    &HEADER_STYLE,
    &FOOTER_STYLE,
];

/// Finds a style table by component name, ignoring ASCII case.
pub fn style_for(component: &str) -> Option<&'static ComponentStyleSpec> {
    ALL_STYLES
        .iter()
        .copied()
        .find(|spec| spec.component.eq_ignore_ascii_case(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{resolve, StyleProps};

    #[test]
    fn test_every_table_is_valid() {
        for spec in ALL_STYLES {
            assert!(spec.validate().is_ok(), "{} is invalid", spec.component);
        }
    }

    #[test]
    fn test_component_names_are_unique() {
        let mut names: Vec<_> = ALL_STYLES.iter().map(|s| s.component).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_STYLES.len());
    }

    #[test]
    fn test_style_for_ignores_case() {
        assert_eq!(style_for("heading").map(|s| s.component), Some("Heading"));
        assert_eq!(style_for("CTABLOCK").map(|s| s.component), Some("CTABlock"));
        assert!(style_for("Carousel").is_none());
    }

    #[test]
    fn test_defaults_resolve_for_every_table() {
        for spec in ALL_STYLES {
            assert!(resolve(spec, &StyleProps::new(), None).is_ok());
        }
    }

    #[test]
    fn test_every_axis_value_resolves() {
        for spec in ALL_STYLES {
            for axis in spec.axes {
                for value in axis.allowed() {
                    let props = StyleProps::new().with(axis.name, value);
                    let style = resolve(spec, &props, None).unwrap();
                    assert_eq!(style.value_of(axis.name), Some(value));
                }
            }
        }
    }
}
