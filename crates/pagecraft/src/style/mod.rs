//! Style variant resolution.
//!
//! This module provides the rule engine every component resolves through:
//!
//! - [`StyleDirective`]: a class list or custom-property binding
//! - [`StyleAxis`] / [`AxisValue`]: a named closed domain and its directives
//! - [`ComponentStyleSpec`]: the static table of one component kind
//! - [`resolve`]: props plus override class to a merged [`ResolvedStyle`]
//! - [`ConfigurationError`]: values outside a declared domain
//!
//! Component tables are plain `static` items, so a component's whole style
//! vocabulary is visible in one place and checked by
//! [`ComponentStyleSpec::validate`].

mod axis;
mod directive;
mod error;
mod resolve;
mod spec;

pub use axis::{AxisValue, StyleAxis};
pub use directive::StyleDirective;
pub use error::ConfigurationError;
pub use resolve::{resolve, ResolvedAxis, ResolvedStyle, StyleProps};
pub use spec::ComponentStyleSpec;
