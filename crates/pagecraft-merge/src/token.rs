//! Utility class token parsing.
//!
//! A token such as `sm:hover:!px-4` is split into its variant modifiers
//! (`sm`, `hover`), the important flag and the base utility (`px-4`).
//! Colons inside brackets belong to the base, so arbitrary properties like
//! `md:[--gap:1rem]` keep their value intact.

/// A single parsed class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    raw: &'a str,
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ClassToken<'a> {
    /// Parses a single whitespace-free token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagecraft_merge::ClassToken;
    ///
    /// let token = ClassToken::parse("sm:hover:!px-4");
    /// assert_eq!(token.modifiers(), &["sm", "hover"]);
    /// assert!(token.is_important());
    /// assert_eq!(token.base(), "px-4");
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;

        for (i, c) in raw.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&raw[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut base = &raw[start..];
        let mut important = false;
        if let Some(stripped) = base.strip_prefix('!') {
            base = stripped;
            important = true;
        } else if let Some(stripped) = base.strip_suffix('!') {
            base = stripped;
            important = true;
        }

        Self {
            raw,
            modifiers,
            important,
            base,
        }
    }

    /// The token as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Variant modifiers in written order (`sm`, `hover`, `dark`, ...).
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }

    /// Whether the utility carries the `!` important marker.
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// The utility without modifiers or important marker.
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// For arbitrary property tokens (`[--name:value]`), returns the
    /// property name and value.
    pub fn arbitrary_property(&self) -> Option<(&'a str, &'a str)> {
        let inner = self.base.strip_prefix('[')?.strip_suffix(']')?;
        let (name, value) = inner.split_once(':')?;
        if name.is_empty() {
            return None;
        }
        Some((name, value))
    }

    /// Canonical modifier prefix used when comparing two tokens.
    ///
    /// Modifier order does not change which rule wins, so `hover:sm:` and
    /// `sm:hover:` produce the same prefix.
    pub(crate) fn modifier_key(&self) -> String {
        let mut sorted: Vec<&str> = self.modifiers.clone();
        sorted.sort_unstable();
        let mut key = sorted.join(":");
        if self.important {
            key.push('!');
        }
        key
    }
}
