//! Nested theme scopes.

use super::mode::ThemeScope;

/// The theme scopes enclosing a point in the tree, outermost first.
///
/// Scopes never touch [`ThemeState`](super::ThemeState); they only layer a
/// class on their subtree. When scopes nest, the innermost one is in effect.
///
/// # Example
///
/// ```rust
/// use pagecraft::theme::{ScopeChain, ThemeScope};
///
/// let page = ScopeChain::new().enter(Some(ThemeScope::Ocean));
/// let section = page.enter(Some(ThemeScope::Corporate));
/// let plain = section.enter(None);
///
/// assert_eq!(page.active(), Some(ThemeScope::Ocean));
/// assert_eq!(plain.active(), Some(ThemeScope::Corporate));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeChain {
    scopes: Vec<ThemeScope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain seen by a child node that declares `scope`.
    pub fn enter(&self, scope: Option<ThemeScope>) -> Self {
        let mut scopes = self.scopes.clone();
        scopes.extend(scope);
        Self { scopes }
    }

    /// The scope in effect: the innermost one.
    pub fn active(&self) -> Option<ThemeScope> {
        self.scopes.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ThemeScope> + '_ {
        self.scopes.iter().copied()
    }
}
