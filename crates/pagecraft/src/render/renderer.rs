//! HTML output through MiniJinja.
//!
//! Node trees are handed to the built-in `node.html` template as plain
//! serialized data, so every text node and attribute value goes through
//! the environment's HTML auto-escaping. Full documents use `page.html`,
//! which includes `node.html` for the body and receives the page shell
//! (header, breadcrumbs, footer) as pre-rendered fragments.

use minijinja::{context, Environment, Value};
use serde::Serialize;
use tracing::{debug, warn};

use crate::components::{Render, ALL_STYLES};
use crate::error::Error;
use crate::theme::ThemeState;

use super::page::{level_one_headings, Page};
use super::Node;

const NODE_TEMPLATE: &str = r#"
{%- for node in nodes recursive -%}
{%- if node is string -%}
{{ node }}
{%- else -%}
<{{ node.tag }}{% if node.class %} class="{{ node.class }}"{% endif %}{% for attr in node.attrs %} {{ attr[0] }}="{{ attr[1] }}"{% endfor %}>
{%- if not node.void -%}
{{ loop(node.children) }}</{{ node.tag }}>
{%- endif -%}
{%- endif -%}
{%- endfor -%}
"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}"{% if root_class %} class="{{ root_class }}"{% endif %}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
{%- if json_ld %}
<script type="application/ld+json">{{ json_ld }}</script>
{%- endif %}
</head>
<body{% if scope_class %} class="{{ scope_class }}" data-theme-scope="{{ scope }}"{% endif %}>
{%- if header or breadcrumbs or footer %}
<div class="min-h-screen flex flex-col">
{%- if header %}
{{ header }}
{%- endif %}
<main class="flex-1 flex flex-col">
{%- if breadcrumbs %}
<div class="border-b bg-muted/30"><div class="mx-auto max-w-6xl px-4 py-4 sm:px-6 lg:px-8">{{ breadcrumbs }}</div></div>
{%- endif %}
<div class="flex-1">{% include "node.html" %}</div>
</main>
{%- if footer %}
{{ footer }}
{%- endif %}
</div>
{%- else %}
<main>{% include "node.html" %}</main>
{%- endif %}
</body>
</html>
"#;

/// Renders node trees and pages to HTML strings.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a shipped style table is
    /// inconsistent.
    pub fn new() -> Result<Self, Error> {
        for spec in ALL_STYLES {
            spec.validate()?;
        }
        let mut env = Environment::new();
        env.add_template("node.html", NODE_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Registers an extra template. Custom templates may
    /// `{% include "node.html" %}` with a `nodes` list in scope.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with arbitrary data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    pub fn render_nodes(&self, nodes: &[Node]) -> Result<String, Error> {
        self.render("node.html", &context! { nodes => nodes })
    }

    pub fn render_fragment(&self, node: &Node) -> Result<String, Error> {
        self.render_nodes(std::slice::from_ref(node))
    }

    /// Renders `page` as a full document, with the root classes of `state`
    /// on `<html>`.
    pub fn render_page(&self, page: &Page, state: &ThemeState) -> Result<String, Error> {
        let nodes = page.render_nodes()?;
        let headings = level_one_headings(&nodes);
        if headings > 1 {
            warn!(
                page = %page.title,
                count = headings,
                "page has more than one level-1 heading"
            );
        }
        debug!(page = %page.title, blocks = nodes.len(), "rendering page");

        let header = page.shell_header(state).map(|h| h.render()).transpose()?;
        let breadcrumbs = page.shell_breadcrumbs();
        let trail = breadcrumbs.as_ref().map(Render::render).transpose()?;
        let footer = page.footer.as_ref().map(Render::render).transpose()?;
        let json_ld = breadcrumbs.map(|crumbs| {
            Value::from_safe_string(crumbs.json_ld_script(page.origin.as_deref().unwrap_or_default()))
        });

        self.render(
            "page.html",
            &context! {
                title => &page.title,
                lang => &page.lang,
                root_class => state.root_classes().join(" "),
                scope => page.theme_scope.map(|scope| scope.as_str()),
                scope_class => page.theme_scope.map(|scope| scope.class()),
                header => self.fragment(header)?,
                breadcrumbs => self.fragment(trail)?,
                footer => self.fragment(footer)?,
                json_ld => json_ld,
                nodes => nodes,
            },
        )
    }

    /// `node` rendered through `node.html`, marked safe for inclusion in
    /// another template.
    fn fragment(&self, node: Option<Node>) -> Result<Option<Value>, Error> {
        node.map(|node| self.render_fragment(&node).map(Value::from_safe_string))
            .transpose()
    }
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}
