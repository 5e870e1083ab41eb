//! Typed style variants, theming and block composition for page builders.
//!
//! Pagecraft separates what a component looks like from how it is built.
//! Every component owns a static style table of named axes with closed value
//! domains; rendering resolves the caller's axis values against that table
//! and merges the resulting utility classes so the last writer of each CSS
//! property wins.
//!
//! # Modules
//!
//! - [`style`]: the variant rule engine ([`resolve`], [`ComponentStyleSpec`])
//! - [`theme`]: global light/dark and density state, persistence and scopes
//! - [`components`]: primitives (heading, text, layout, section, image,
//!   button) and content blocks (hero, features, CTA, pricing, media-text)
//! - [`compose`]: the block to section contract
//! - [`render`]: node trees, YAML page descriptions and HTML output
//!
//! # Example
//!
//! ```rust
//! use pagecraft::components::{FontWeight, Heading, HeadingLevel, HeadingSize, Render};
//! use pagecraft::PageRenderer;
//!
//! let node = Heading::new(HeadingLevel::H2, "Pricing")
//!     .size(HeadingSize::Xl2)
//!     .weight(FontWeight::Bold)
//!     .render()?;
//! let html = PageRenderer::new()?.render_fragment(&node)?;
//! assert!(html.contains("font-bold"));
//! assert!(html.contains(r#"data-level="2""#));
//! # Ok::<(), pagecraft::Error>(())
//! ```

#[macro_use]
mod macros;

pub mod components;
pub mod compose;
pub mod error;
pub mod render;
pub mod style;
pub mod theme;

pub use error::{Error, MissingFieldError};
pub use render::{Block, Element, Node, Page, PageRenderer};
pub use style::{resolve, ComponentStyleSpec, ConfigurationError, ResolvedStyle, StyleProps};
pub use theme::{
    ColorMode, Density, ThemeConfig, ThemePreference, ThemeProvider, ThemeScope, ThemeState,
    ThemeStore,
};
