//! Page descriptions: a title plus an ordered list of blocks, usually
//! loaded from YAML.

use serde::Deserialize;
use tracing::debug;

use crate::components::{
    Breadcrumbs, Crumb, CtaBlock, FeaturesBlock, Footer, Header, HeroBlock, MediaTextBlock, NavLink,
    PricingBlock, Render,
};
use crate::error::Error;
use crate::theme::{ThemeScope, ThemeState};

use super::Node;

fn default_lang() -> String {
    "en".to_string()
}

/// One block of a page, tagged by its `block` key.
///
/// ```yaml
/// - block: hero
///   title: Build pages faster
///   variant: split
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "block", rename_all = "kebab-case")]
pub enum Block {
    Hero(HeroBlock),
    Features(FeaturesBlock),
    Cta(CtaBlock),
    Pricing(PricingBlock),
    MediaText(MediaTextBlock),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Hero(_) => "hero",
            Block::Features(_) => "features",
            Block::Cta(_) => "cta",
            Block::Pricing(_) => "pricing",
            Block::MediaText(_) => "media-text",
        }
    }
}

impl Render for Block {
    fn render(&self) -> Result<Node, Error> {
        match self {
            Block::Hero(block) => block.render(),
            Block::Features(block) => block.render(),
            Block::Cta(block) => block.render(),
            Block::Pricing(block) => block.render(),
            Block::MediaText(block) => block.render(),
        }
    }
}

impl From<HeroBlock> for Block {
    fn from(block: HeroBlock) -> Self {
        Block::Hero(block)
    }
}

impl From<FeaturesBlock> for Block {
    fn from(block: FeaturesBlock) -> Self {
        Block::Features(block)
    }
}

impl From<CtaBlock> for Block {
    fn from(block: CtaBlock) -> Self {
        Block::Cta(block)
    }
}

impl From<PricingBlock> for Block {
    fn from(block: PricingBlock) -> Self {
        Block::Pricing(block)
    }
}

impl From<MediaTextBlock> for Block {
    fn from(block: MediaTextBlock) -> Self {
        Block::MediaText(block)
    }
}

/// A page: blocks plus the optional shell around them.
///
/// ```yaml
/// title: Hero blocks
/// path: /hero
/// origin: https://example.com
/// nav:
///   - { label: Hero, href: /hero }
/// breadcrumbs:
///   - { label: Blocks, href: /blocks }
///   - { label: Hero }
/// footer: { variant: minimal, note: "© Pagecraft" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Page {
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Palette applied to the whole body.
    #[serde(default)]
    pub theme_scope: Option<ThemeScope>,
    /// Path the page is served at; selects the current nav link.
    #[serde(default)]
    pub path: Option<String>,
    /// Site origin prefixed to breadcrumb links in structured data.
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub breadcrumbs: Vec<Crumb>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: default_lang(),
            theme_scope: None,
            path: None,
            origin: None,
            header: None,
            nav: Vec::new(),
            breadcrumbs: Vec::new(),
            footer: None,
            blocks: Vec::new(),
        }
    }

    pub fn block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn nav(mut self, link: NavLink) -> Self {
        self.nav.push(link);
        self
    }

    pub fn breadcrumb(mut self, crumb: Crumb) -> Self {
        self.breadcrumbs.push(crumb);
        self
    }

    /// The header, when the page declares one or has navigation. The brand
    /// falls back to the title; links and toggles follow `path` and `state`.
    pub fn shell_header(&self, state: &ThemeState) -> Option<Header> {
        if self.header.is_none() && self.nav.is_empty() {
            return None;
        }
        let mut header = self.header.clone().unwrap_or_default();
        if header.brand.is_none() {
            header.brand = Some(self.title.clone());
        }
        header.current_path = self.path.clone();
        Some(header.nav(self.nav.iter().cloned()).theme_state(state))
    }

    pub fn shell_breadcrumbs(&self) -> Option<Breadcrumbs> {
        (!self.breadcrumbs.is_empty()).then(|| Breadcrumbs::new(self.breadcrumbs.iter().cloned()))
    }

    /// Renders every block in order. The first failing block aborts.
    pub fn render_nodes(&self) -> Result<Vec<Node>, Error> {
        self.blocks
            .iter()
            .map(|block| {
                debug!(block = block.kind(), "rendering block");
                block.render()
            })
            .collect()
    }
}

/// Number of level-1 headings across `nodes`.
pub fn level_one_headings(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| {
            node.find_all(|e| e.get_attr("data-level") == Some("1"))
                .len()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CallToAction;

    const PAGE: &str = r#"
title: Launch
themeScope: ocean
blocks:
  - block: hero
    title: Build pages faster
    variant: split
  - block: features
    features:
      - title: Fast
        description: Renders quickly
  - block: cta
    title: Ready?
    cta: { text: Start, href: /start }
    section: false
"#;

    #[test]
    fn test_parses_blocks_in_order() {
        let page = Page::from_yaml(PAGE).unwrap();
        assert_eq!(page.title, "Launch");
        assert_eq!(page.lang, "en");
        assert_eq!(page.theme_scope, Some(ThemeScope::Ocean));
        let kinds: Vec<_> = page.blocks.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec!["hero", "features", "cta"]);
        match &page.blocks[2] {
            Block::Cta(block) => assert!(!block.frame.is_wrapped()),
            other => panic!("expected cta, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_block_kind_is_rejected() {
        let err = Page::from_yaml("title: x\nblocks:\n  - block: carousel\n").unwrap_err();
        assert!(matches!(err, Error::Page(_)));
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let yaml = "title: x\nblocks:\n  - block: hero\n    title: a\n    variant: diagonal\n";
        let err = Page::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn test_missing_field_surfaces_at_render() {
        let page = Page::from_yaml("title: x\nblocks:\n  - block: cta\n    title: a\n").unwrap();
        let err = page.render_nodes().unwrap_err();
        assert_eq!(err.to_string(), "CTABlock requires 'cta'");
    }

    #[test]
    fn test_shell_from_yaml() {
        let yaml = r#"
title: Hero blocks
path: /hero
header: { variant: colored }
nav:
  - { label: Primitives, href: /primitives }
  - { label: Hero, href: /hero }
breadcrumbs:
  - { label: Blocks, href: /blocks }
  - { label: Hero }
footer: { variant: minimal, note: Fin }
"#;
        let page = Page::from_yaml(yaml).unwrap();
        assert_eq!(page.nav.len(), 2);
        assert_eq!(page.breadcrumbs[1].href, None);

        let state = ThemeState {
            theme: crate::theme::ThemePreference::Dark,
            density: crate::theme::Density::Default,
            resolved_theme: crate::theme::ColorMode::Dark,
        };
        let header = page.shell_header(&state).unwrap();
        assert_eq!(header.brand.as_deref(), Some("Hero blocks"));
        assert_eq!(header.current_path.as_deref(), Some("/hero"));
        assert_eq!(header.theme, crate::theme::ThemePreference::Dark);
        let node = header.render().unwrap();
        let current = node.find_by_attr("aria-current", "page").unwrap();
        assert_eq!(current.get_attr("href"), Some("/hero"));

        assert_eq!(page.shell_breadcrumbs().unwrap().items.len(), 2);
    }

    #[test]
    fn test_page_without_shell() {
        let page = Page::from_yaml(PAGE).unwrap();
        let state = ThemeState {
            theme: crate::theme::ThemePreference::System,
            density: crate::theme::Density::Default,
            resolved_theme: crate::theme::ColorMode::Light,
        };
        assert!(page.shell_header(&state).is_none());
        assert!(page.shell_breadcrumbs().is_none());
        assert!(page.footer.is_none());

        let with_nav = Page::new("Docs").nav(NavLink::new("Docs", "/docs"));
        assert_eq!(
            with_nav.shell_header(&state).unwrap().brand.as_deref(),
            Some("Docs")
        );
    }

    #[test]
    fn test_unknown_shell_keys_are_rejected() {
        let err = Page::from_yaml("title: x
nav:
  - { label: a, href: /a, icon: star }
")
            .unwrap_err();
        assert!(err.to_string().contains("icon"));
    }

    #[test]
    fn test_builder_counts_level_one_headings() {
        let page = Page::new("Two heroes")
            .block(HeroBlock::new("First"))
            .block(HeroBlock::new("Second"))
            .block(CtaBlock::new("Go", CallToAction::new("Start", "/start")));
        let nodes = page.render_nodes().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(level_one_headings(&nodes), 2);
    }
}
