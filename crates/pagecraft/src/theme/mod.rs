//! Global theme and density state.
//!
//! This module provides:
//!
//! - [`ThemePreference`], [`ColorMode`], [`Density`], [`ThemeScope`]: the
//!   closed token domains
//! - [`ThemeStore`]: owner of [`ThemeState`], the root classes and their
//!   persistence
//! - [`ThemeProvider`] / [`ThemeHandle`]: lifetime scoping for consumers
//! - [`Storage`]: durable key-value persistence
//! - [`DocumentRoot`]: the node the store asserts classes on
//! - [`ScopeChain`]: subtree-local theme scopes, innermost wins
//! - [`set_theme_detector`]: overrides the ambient light/dark signal

mod adaptive;
mod config;
mod mode;
mod provider;
mod root;
mod scope;
mod storage;
mod store;

pub use adaptive::{detect_color_mode, reset_theme_detector, set_theme_detector, ThemeDetector};
pub use config::ThemeConfig;
pub use mode::{ColorMode, Density, ThemePreference, ThemeScope};
pub use provider::{StoreMisuseError, ThemeHandle, ThemeProvider};
pub use root::{ClassList, DocumentRoot};
pub use scope::ScopeChain;
pub use storage::{DisabledStorage, FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{SharedRoot, SubscriptionId, ThemeState, ThemeStore, ThemeStoreBuilder};
