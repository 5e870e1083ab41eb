//! How a block wires itself into the primitives around it.
//!
//! Every block renders its own content root and then, unless told not to,
//! wraps that content in exactly one [`Section`]. The wrapper's spacing comes
//! from a single table keyed by the block's size; the rest of the wrapper is
//! filled from the block's own props and then from an optional overrides
//! object, field by field:
//!
//! ```text
//! section: false           -> content only
//! section: true (default)  -> Section { background, spacing(size), container, id, themeScope }
//! section: { ... }         -> same, each field present in the object wins
//! ```

use serde::{Deserialize, Serialize};

use crate::components::section::{
    Bleed, ContainerOption, Section, SectionRole, SectionSpacing, SectionTag,
};
use crate::components::tokens::{Background, Pad, Tone};
use crate::components::Render;
use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::{resolve, ComponentStyleSpec, StyleProps};
use crate::theme::ThemeScope;

token_enum! {
    /// Block size. Carries no classes of its own; it selects the section spacing.
    pub enum BlockSize ("block size") {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default Md
}

/// Block size to the spacing of its wrapping section.
pub static SECTION_SPACING: [(BlockSize, SectionSpacing); 4] = [
    (BlockSize::Sm, SectionSpacing::Md),
    (BlockSize::Md, SectionSpacing::Lg),
    (BlockSize::Lg, SectionSpacing::Xl),
    (BlockSize::Xl, SectionSpacing::Xl),
];

pub fn section_spacing(size: BlockSize) -> SectionSpacing {
    SECTION_SPACING
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, spacing)| *spacing)
        .unwrap_or_default()
}

/// Field-level overrides for the wrapping section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SectionSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset: Option<Pad>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<Bleed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_scope: Option<ThemeScope>,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub tag: Option<SectionTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<SectionRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_labelledby: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// `section: bool | { overrides }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionWrap {
    Enabled(bool),
    Custom(SectionOverrides),
}

impl Default for SectionWrap {
    fn default() -> Self {
        SectionWrap::Enabled(true)
    }
}

impl SectionWrap {
    /// The overrides to apply, or `None` when the block is not wrapped.
    pub fn overrides(&self) -> Option<SectionOverrides> {
        match self {
            SectionWrap::Enabled(false) => None,
            SectionWrap::Enabled(true) => Some(SectionOverrides::default()),
            SectionWrap::Custom(overrides) => Some(overrides.clone()),
        }
    }
}

/// Per-block defaults for the frame props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockDefaults {
    pub size: BlockSize,
    pub tone: Tone,
    pub background: Background,
}

/// Props shared by every block, flattened into each block's own props.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<BlockSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default)]
    pub section: SectionWrap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_scope: Option<ThemeScope>,
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl BlockFrame {
    pub fn is_wrapped(&self) -> bool {
        self.section != SectionWrap::Enabled(false)
    }

    /// The block's content root: a `div` carrying the block style and its
    /// data attributes. When the block is not wrapped, the id and theme
    /// scope land here instead of on the section.
    pub fn content_root(
        &self,
        spec: &'static ComponentStyleSpec,
        variant: &'static str,
        defaults: &BlockDefaults,
    ) -> Result<Element, Error> {
        let size = self.size.unwrap_or(defaults.size);
        let tone = self.tone.unwrap_or(defaults.tone);
        let wrapped = self.is_wrapped();
        let scope = self.theme_scope.filter(|_| !wrapped);

        let extra = [scope.map(ThemeScope::class), self.class.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let props = StyleProps::new()
            .with("variant", variant)
            .with("size", size.as_str());
        let style = resolve(spec, &props, Some(&extra))?;

        Ok(Element::new("div")
            .styled(&style)
            .attr_opt("id", self.id.as_deref().filter(|_| !wrapped))
            .attr("data-variant", variant)
            .attr("data-tone", tone.as_str())
            .attr_opt("data-testid", self.test_id.as_deref())
            .attr_opt("data-theme-scope", scope.map(ThemeScope::as_str)))
    }

    /// Builds the section that will wrap the block, or `None` when
    /// `section: false`.
    pub fn section(&self, defaults: &BlockDefaults) -> Option<Section> {
        let overrides = self.section.overrides()?;
        let size = self.size.unwrap_or(defaults.size);
        let background = self.background.unwrap_or(defaults.background);

        Some(Section {
            tag: overrides.tag.unwrap_or_default(),
            id: overrides.id.or_else(|| self.id.clone()),
            background: overrides.background.unwrap_or(background),
            spacing: overrides.spacing.unwrap_or_else(|| section_spacing(size)),
            inset: overrides.inset.unwrap_or_default(),
            bleed: overrides.bleed.unwrap_or_default(),
            container: overrides.container.unwrap_or(ContainerOption::Enabled(true)),
            theme_scope: overrides.theme_scope.or(self.theme_scope),
            aria_labelledby: overrides.aria_labelledby,
            role: overrides.role,
            class: overrides.class,
            children: Vec::new(),
        })
    }
}

/// Wraps rendered block content according to `frame`.
pub fn wrap_block(content: Node, frame: &BlockFrame, defaults: &BlockDefaults) -> Result<Node, Error> {
    match frame.section(defaults) {
        Some(section) => section.child(content).render(),
        None => Ok(content),
    }
}
