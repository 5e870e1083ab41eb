//! The rendered element tree.

use serde::Serialize;

use crate::style::ResolvedStyle;
use crate::theme::{ScopeChain, ThemeScope};

const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "source", "wbr"];

/// A node of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Visits every element, this one included, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }

    /// Visits every element with the theme scopes enclosing it, the
    /// element's own `data-theme-scope` included.
    pub fn walk_scoped<'a>(
        &'a self,
        outer: &ScopeChain,
        visit: &mut dyn FnMut(&'a Element, &ScopeChain),
    ) {
        if let Node::Element(element) = self {
            let chain = outer.enter(element.theme_scope());
            visit(element, &chain);
            for child in &element.children {
                child.walk_scoped(&chain, visit);
            }
        }
    }

    /// Every element matching `pred`, in document order.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if pred(element) {
                found.push(element);
            }
        });
        found
    }

    /// The first element whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find_all(|e| e.get_attr(name) == Some(value)).into_iter().next()
    }

    /// Concatenated text content.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// An element with a class list, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub class: String,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    #[serde(rename = "void")]
    pub is_void: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            is_void: VOID_TAGS.contains(&tag),
        }
    }

    /// Sets the class attribute verbatim.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the class attribute from a resolved style.
    pub fn styled(self, style: &ResolvedStyle) -> Self {
        self.class(style.class_string())
    }

    /// Sets an attribute, replacing an earlier value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets an attribute when `value` is present.
    pub fn attr_opt<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends `node` when present.
    pub fn child_opt<N: Into<Node>>(self, node: Option<N>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// The scope declared by this element, if any.
    pub fn theme_scope(&self) -> Option<ThemeScope> {
        self.get_attr("data-theme-scope")
            .and_then(|scope| scope.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("section")
            .attr("data-theme-scope", "ocean")
            .child(
                Element::new("div")
                    .attr("data-testid", "inner")
                    .attr("data-theme-scope", "corporate")
                    .child(Element::new("h2").child("Title")),
            )
            .child(Element::new("img").attr("src", "/a.png"))
            .into()
    }

    #[test]
    fn test_void_tags_are_flagged() {
        assert!(Element::new("img").is_void);
        assert!(!Element::new("div").is_void);
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let element = Element::new("a").attr("href", "/a").attr("href", "/b");
        assert_eq!(element.get_attr("href"), Some("/b"));
        assert_eq!(element.attrs.len(), 1);
    }

    #[test]
    fn test_find_by_attr_and_text() {
        let node = sample();
        let inner = node.find_by_attr("data-testid", "inner").unwrap();
        assert_eq!(Node::from(inner.clone()).text_content(), "Title");
        assert_eq!(node.find_all(|e| e.tag == "h2").len(), 1);
    }

    #[test]
    fn test_innermost_scope_wins() {
        let mut seen = Vec::new();
        sample().walk_scoped(&ScopeChain::new(), &mut |element, chain| {
            seen.push((element.tag, chain.active()));
        });
        assert_eq!(
            seen,
            vec![
                ("section", Some(ThemeScope::Ocean)),
                ("div", Some(ThemeScope::Corporate)),
                ("h2", Some(ThemeScope::Corporate)),
                ("img", Some(ThemeScope::Ocean)),
            ]
        );
    }
}
