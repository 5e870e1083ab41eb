//! Conflict-aware merging.
//!
//! Merging walks the token list from the end, keeping a token only when no
//! later token already claimed its property under the same modifiers. The
//! surviving tokens are then emitted in their original relative order, so a
//! later class always wins and the result is deterministic.

use std::collections::HashSet;

use crate::group::{covered_properties, property_of};
use crate::token::ClassToken;

/// Merges class tokens, dropping every token overridden by a later one.
///
/// # Example
///
/// ```rust
/// use pagecraft_merge::merge_tokens;
///
/// let merged = merge_tokens(["px-2", "py-1", "text-left", "p-4", "text-center"]);
/// assert_eq!(merged, vec!["p-4", "text-center"]);
/// ```
pub fn merge_tokens<'a, I>(tokens: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&'a str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&'a str> = Vec::with_capacity(tokens.len());

    for raw in tokens.iter().rev() {
        let token = ClassToken::parse(raw);
        let modifiers = token.modifier_key();

        let key = match property_of(token.base()) {
            Some(property) => {
                let key = format!("{}|{}", modifiers, property);
                if claimed.contains(&key) {
                    continue;
                }
                for covered in covered_properties(&property) {
                    claimed.insert(format!("{}|{}", modifiers, covered));
                }
                key
            }
            None => format!("{}|={}", modifiers, token.base()),
        };

        if !claimed.insert(key) {
            continue;
        }
        kept.push(raw);
    }

    kept.reverse();
    kept
}

/// Merges whitespace-separated class lists into one class string.
///
/// Each input may hold several classes; empty inputs are skipped.
///
/// # Example
///
/// ```rust
/// use pagecraft_merge::merge_classes;
///
/// let classes = merge_classes(&["font-body text-foreground", "text-muted-foreground"]);
/// assert_eq!(classes, "font-body text-muted-foreground");
/// ```
pub fn merge_classes(inputs: &[&str]) -> String {
    merge_tokens(inputs.iter().flat_map(|input| input.split_whitespace())).join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn token() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "flex", "grid", "block", "flex-col", "flex-row", "p-2", "p-4", "px-2", "py-8",
            "text-sm", "text-lg", "text-center", "text-left", "text-foreground",
            "bg-muted", "bg-primary", "sm:p-2", "md:text-xl", "gap-4",
            "[--stack-gap:1rem]", "[--stack-gap:2rem]", "custom-a", "custom-b",
        ])
        .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(tokens in prop::collection::vec(token(), 0..12)) {
            let once = merge_tokens(tokens.iter().map(String::as_str));
            let twice = merge_tokens(once.iter().copied());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn appended_token_always_survives(
            tokens in prop::collection::vec(token(), 0..12),
            last in token(),
        ) {
            let merged = merge_tokens(
                tokens.iter().map(String::as_str).chain(std::iter::once(last.as_str())),
            );
            prop_assert_eq!(merged.last().copied(), Some(last.as_str()));
        }

        #[test]
        fn merged_tokens_keep_input_order(tokens in prop::collection::vec(token(), 0..12)) {
            let merged = merge_tokens(tokens.iter().map(String::as_str));
            let mut cursor = 0;
            for kept in merged {
                let pos = tokens[cursor..].iter().position(|t| t == kept);
                prop_assert!(pos.is_some());
                cursor += pos.unwrap_or(0) + 1;
            }
        }
    }
}
