//! Conflict-aware merging of utility class lists.
//!
//! Concatenating class strings is not enough when two utilities set the same
//! CSS property: `bg-muted bg-accent` leaves the winner up to stylesheet
//! order. This crate resolves such conflicts up front.
//!
//! - [`ClassToken`]: parses a token into modifiers, important flag and base
//! - [`property_of`]: maps a utility base to the CSS property it writes
//! - [`merge_tokens`] / [`merge_classes`]: keep only the last writer of each
//!   property (per modifier set), preserving relative order
//!
//! Tokens the property table does not know pass through untouched and are
//! only deduplicated against identical tokens.
//!
//! # Example
//!
//! ```rust
//! use pagecraft_merge::merge_classes;
//!
//! let base = "w-full bg-background text-foreground py-[var(--section-py)]";
//! let merged = merge_classes(&[base, "bg-accent text-accent-foreground"]);
//! assert_eq!(
//!     merged,
//!     "w-full py-[var(--section-py)] bg-accent text-accent-foreground"
//! );
//! ```

mod group;
mod merge;
mod token;

pub use group::{covered_properties, property_of};
pub use merge::{merge_classes, merge_tokens};
pub use token::ClassToken;
