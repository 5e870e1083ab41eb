//! Page shell: header with navigation and theme controls, breadcrumbs and
//! footer.
//!
//! The theme and density controls are static markup. They carry
//! `data-action` attributes for a client script and reflect the
//! [`ThemeState`] the page was rendered with.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Error;
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::{resolve, ComponentStyleSpec, StyleProps};
use crate::theme::{Density, ThemePreference, ThemeState};

use super::button::{nav_link_variant, Button, ButtonSize, ButtonVariant};
use super::heading::{Heading, HeadingLevel, HeadingSize};
use super::text::{Text, TextVariant};
use super::Render;

const HOME_LABEL: &str = "Accueil";
const INNER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";
const FOOTER_LINK: &str = "text-sm text-muted-foreground hover:text-foreground transition-colors";

token_enum! {
    pub enum HeaderVariant ("header variant") {
        Default => "default",
        Transparent => "transparent",
        Colored => "colored",
    }
    default Default
}

token_enum! {
    pub enum FooterVariant ("footer variant") {
        Default => "default",
        Minimal => "minimal",
        Extended => "extended",
    }
    default Default
}

pub static HEADER_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Header",
    base: &[Class("w-full border-b bg-background/80 backdrop-blur-sm transition-colors")],
    axes: &[
        axis!("variant" default "default" {
            "default" => [Class("bg-background border-border")],
            "transparent" => [Class("bg-transparent border-transparent")],
            "colored" => [Class("bg-primary border-primary text-primary-foreground")],
        }),
        axis!("fixed" default "false" {
            "false" => [],
            "true" => [Class("sticky top-0 z-40")],
        }),
    ],
};

pub static FOOTER_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Footer",
    base: &[Class("border-t bg-muted/30 mt-auto")],
    axes: &[axis!("variant" default "default" {
        "default" => [Class("py-12")],
        "minimal" => [Class("py-6")],
        "extended" => [Class("py-16")],
    })],
};

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Site header: brand link, navigation and the theme controls.
///
/// Only the presentation fields come from YAML; the navigation, the
/// current path and the theme state are filled in per page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Header {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub variant: HeaderVariant,
    #[serde(default)]
    pub fixed: bool,
    /// Render the theme and density controls.
    #[serde(default = "default_true")]
    pub toggles: bool,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(skip)]
    pub nav: Vec<NavLink>,
    #[serde(skip)]
    pub current_path: Option<String>,
    #[serde(skip)]
    pub theme: ThemePreference,
    #[serde(skip)]
    pub density: Density,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            brand: None,
            variant: HeaderVariant::default(),
            fixed: false,
            toggles: true,
            class: None,
            nav: Vec::new(),
            current_path: None,
            theme: ThemePreference::default(),
            density: Density::default(),
        }
    }
}

impl Header {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            ..Self::default()
        }
    }

    pub fn nav(mut self, links: impl IntoIterator<Item = NavLink>) -> Self {
        self.nav.extend(links);
        self
    }

    /// Path of the page being rendered; the matching link is marked current.
    pub fn current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }

    pub fn theme_state(mut self, state: &ThemeState) -> Self {
        self.theme = state.theme;
        self.density = state.density;
        self
    }

    fn nav_item(&self, link: &NavLink) -> Result<Node, Error> {
        let variant = match self.current_path.as_deref() {
            Some(path) => nav_link_variant(path, &link.href),
            None => ButtonVariant::Ghost,
        };
        let node = Button::new(link.label.as_str())
            .href(link.href.as_str())
            .variant(variant)
            .size(ButtonSize::Sm)
            .render()?;
        Ok(if variant == ButtonVariant::Default {
            with_attrs(node, &[("aria-current", "page")])
        } else {
            node
        })
    }
}

impl Render for Header {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new()
            .with("variant", self.variant.as_str())
            .with("fixed", if self.fixed { "true" } else { "false" });
        let style = resolve(&HEADER_STYLE, &props, self.class.as_deref())?;

        let brand = Element::new("a")
            .attr("href", "/")
            .class("flex items-center gap-2 font-semibold")
            .child(self.brand.as_deref().unwrap_or_default());

        let links = self
            .nav
            .iter()
            .map(|link| self.nav_item(link))
            .collect::<Result<Vec<_>, _>>()?;
        let nav = (!links.is_empty()).then(|| {
            Element::new("nav")
                .attr("aria-label", "Main")
                .class("hidden md:flex items-center gap-1")
                .children(links)
        });

        let controls = if self.toggles {
            Some(
                Element::new("div")
                    .class("hidden md:flex items-center gap-2")
                    .child(ThemeToggle::new(self.theme).render()?)
                    .child(DensityToggle::new(self.density).render()?),
            )
        } else {
            None
        };

        let bar = Element::new("div")
            .class("flex justify-between items-center h-16")
            .child(brand)
            .child_opt(nav)
            .child_opt(controls);

        Ok(Element::new("header")
            .styled(&style)
            .attr("data-variant", self.variant.as_str())
            .child(Element::new("div").class(INNER).child(bar))
            .into())
    }
}

/// Light/dark switch. Offers the opposite of `light`, so `system` and
/// `dark` both offer light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    pub theme: ThemePreference,
}

impl ThemeToggle {
    pub fn new(theme: ThemePreference) -> Self {
        Self { theme }
    }

    /// The preference a click selects.
    pub fn target(&self) -> ThemePreference {
        match self.theme {
            ThemePreference::Light => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

impl Render for ThemeToggle {
    fn render(&self) -> Result<Node, Error> {
        let target = self.target();
        let label = match target {
            ThemePreference::Dark => "Dark",
            _ => "Light",
        };
        let button = Button::new(label)
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Sm)
            .render()?;
        Ok(with_attrs(
            button,
            &[
                ("aria-label", "Toggle theme"),
                ("data-action", "set-theme"),
                ("data-theme", target.as_str()),
            ],
        ))
    }
}

/// One button per density; the active one is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityToggle {
    pub density: Density,
}

impl DensityToggle {
    pub fn new(density: Density) -> Self {
        Self { density }
    }
}

fn density_label(density: Density) -> &'static str {
    match density {
        Density::Compact => "Compact",
        Density::Default => "Normal",
        Density::Comfortable => "Large",
    }
}

impl Render for DensityToggle {
    fn render(&self) -> Result<Node, Error> {
        let buttons = Density::ALL
            .iter()
            .map(|&density| {
                let active = density == self.density;
                let variant = if active {
                    ButtonVariant::Default
                } else {
                    ButtonVariant::Secondary
                };
                let button = Button::new(density_label(density))
                    .variant(variant)
                    .size(ButtonSize::Sm)
                    .render()?;
                Ok(with_attrs(
                    button,
                    &[
                        ("data-action", "set-density"),
                        ("data-density", density.as_str()),
                        ("aria-pressed", if active { "true" } else { "false" }),
                    ],
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Element::new("div")
            .class("flex items-center gap-1")
            .attr("role", "group")
            .attr("aria-label", "Density")
            .children(buttons)
            .into())
    }
}

/// A breadcrumb entry. Entries without `href` render as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Crumb {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl Crumb {
    pub fn new(label: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            label: label.into(),
            href: href.map(str::to_string),
        }
    }
}

/// Breadcrumb trail, led by a home link unless disabled. The last entry
/// is the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs {
    pub items: Vec<Crumb>,
    pub show_home: bool,
    pub class: Option<String>,
}

impl Breadcrumbs {
    pub fn new(items: impl IntoIterator<Item = Crumb>) -> Self {
        Self {
            items: items.into_iter().collect(),
            show_home: true,
            class: None,
        }
    }

    pub fn show_home(mut self, show: bool) -> Self {
        self.show_home = show;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The trail as a schema.org `BreadcrumbList`. Relative hrefs are
    /// joined onto `origin`.
    pub fn json_ld(&self, origin: &str) -> Value {
        let origin = origin.trim_end_matches('/');
        let absolute = |href: &str| {
            if href.starts_with("http://") || href.starts_with("https://") {
                href.to_string()
            } else {
                format!("{origin}{href}")
            }
        };

        let home = self.show_home.then(|| {
            json!({
                "@type": "ListItem",
                "position": 1,
                "name": HOME_LABEL,
                "item": format!("{origin}/"),
            })
        });
        let first = if self.show_home { 2 } else { 1 };
        let items = self.items.iter().enumerate().map(|(i, crumb)| {
            let mut item = json!({
                "@type": "ListItem",
                "position": first + i,
                "name": crumb.label.as_str(),
            });
            if let Some(href) = &crumb.href {
                item["item"] = Value::String(absolute(href));
            }
            item
        });

        json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": home.into_iter().chain(items).collect::<Vec<_>>(),
        })
    }

    /// [`json_ld`](Self::json_ld) serialized for a `<script>` body.
    pub fn json_ld_script(&self, origin: &str) -> String {
        self.json_ld(origin).to_string().replace("</", "<\\/")
    }
}

fn separator() -> Element {
    Element::new("li")
        .attr("role", "presentation")
        .attr("aria-hidden", "true")
        .child("/")
}

impl Render for Breadcrumbs {
    fn render(&self) -> Result<Node, Error> {
        let link = |label: &str, href: &str| {
            Element::new("a")
                .class("transition-colors hover:text-foreground")
                .attr("href", href)
                .child(label)
        };
        let item = || Element::new("li").class("inline-flex items-center gap-1.5");

        let mut entries = Vec::new();
        if self.show_home {
            entries.push(item().child(link(HOME_LABEL, "/")));
        }
        let last = self.items.len().saturating_sub(1);
        for (i, crumb) in self.items.iter().enumerate() {
            if !entries.is_empty() {
                entries.push(separator());
            }
            let entry = match crumb.href.as_deref() {
                Some(href) if i != last => link(&crumb.label, href),
                _ => Element::new("span")
                    .class("font-normal text-foreground")
                    .attr("role", "link")
                    .attr("aria-disabled", "true")
                    .attr_opt("aria-current", (i == last).then_some("page"))
                    .child(crumb.label.as_str()),
            };
            entries.push(item().child(entry));
        }

        let list = Element::new("ol")
            .class("flex flex-wrap items-center gap-1.5 break-words text-sm text-muted-foreground sm:gap-2.5")
            .children(entries);
        let mut nav = Element::new("nav").attr("aria-label", "breadcrumb").child(list);
        if let Some(class) = &self.class {
            nav = nav.class(class.as_str());
        }
        Ok(nav.into())
    }
}

/// A footer link. External links open in a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footer {
    #[serde(default)]
    pub variant: FooterVariant,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    /// Bottom line, e.g. a copyright notice.
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

fn footer_link(link: &FooterLink) -> Element {
    let anchor = Element::new("a")
        .class(FOOTER_LINK)
        .attr("href", link.href.as_str())
        .child(link.label.as_str());
    if link.external {
        return anchor
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer");
    }
    anchor.child_opt(link.description.as_deref().map(|description| {
        Element::new("span")
            .class("block text-xs text-muted-foreground/60 mt-0.5")
            .child(description)
    }))
}

impl Footer {
    fn note(&self) -> Result<Option<Node>, Error> {
        self.note
            .as_deref()
            .map(|note| Text::new(note).variant(TextVariant::Small).render())
            .transpose()
    }

    fn minimal(&self) -> Result<Element, Error> {
        let external = self
            .columns
            .iter()
            .flat_map(|column| &column.links)
            .filter(|link| link.external)
            .map(footer_link);
        Ok(Element::new("div")
            .class("flex flex-col sm:flex-row justify-between items-center gap-2")
            .child_opt(self.note()?)
            .child(
                Element::new("div")
                    .class("flex items-center gap-4")
                    .children(external),
            ))
    }

    fn columns(&self) -> Result<Element, Error> {
        let mut cells = Vec::new();
        if let Some(brand) = &self.brand {
            let tagline = self
                .tagline
                .as_deref()
                .map(|t| Text::new(t).variant(TextVariant::Small).class("mb-4").render())
                .transpose()?;
            cells.push(
                Element::new("div")
                    .class("md:col-span-1")
                    .child(
                        Heading::new(HeadingLevel::H3, brand.as_str())
                            .size(HeadingSize::Lg)
                            .class("mb-4")
                            .render()?,
                    )
                    .child_opt(tagline),
            );
        }
        for column in &self.columns {
            let items = column
                .links
                .iter()
                .map(|link| Element::new("li").child(footer_link(link)));
            cells.push(
                Element::new("div")
                    .child(
                        Heading::new(HeadingLevel::H4, column.title.as_str())
                            .size(HeadingSize::Sm)
                            .class("mb-4")
                            .render()?,
                    )
                    .child(Element::new("ul").class("space-y-2").children(items)),
            );
        }

        let bottom = self
            .note()?
            .map(|note| Element::new("div").class("mt-8 pt-6 border-t border-border").child(note));
        Ok(Element::new("div")
            .child(
                Element::new("div")
                    .class("grid grid-cols-1 md:grid-cols-4 gap-8")
                    .children(cells),
            )
            .child_opt(bottom))
    }
}

impl Render for Footer {
    fn render(&self) -> Result<Node, Error> {
        let props = StyleProps::new().with("variant", self.variant.as_str());
        let style = resolve(&FOOTER_STYLE, &props, self.class.as_deref())?;

        let body = match self.variant {
            FooterVariant::Minimal => self.minimal()?,
            FooterVariant::Default | FooterVariant::Extended => self.columns()?,
        };
        Ok(Element::new("footer")
            .styled(&style)
            .attr("data-variant", self.variant.as_str())
            .child(Element::new("div").class(INNER).child(body))
            .into())
    }
}

fn with_attrs(node: Node, attrs: &[(&'static str, &str)]) -> Node {
    match node {
        Node::Element(element) => attrs
            .iter()
            .fold(element, |element, &(name, value)| element.attr(name, value))
            .into(),
        text => text,
    }
}
