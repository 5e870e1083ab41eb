//! Theme store configuration.

use serde::{Deserialize, Serialize};

use super::mode::{Density, ThemePreference};

fn default_storage_key() -> String {
    "ui-theme".to_string()
}

/// Defaults and storage key for a [`ThemeStore`](super::ThemeStore).
///
/// # Example
///
/// ```rust
/// use pagecraft::theme::{Density, ThemeConfig, ThemePreference};
///
/// let config = ThemeConfig::from_yaml("default_theme: dark\nstorage_key: site-theme\n").unwrap();
/// assert_eq!(config.default_theme, ThemePreference::Dark);
/// assert_eq!(config.default_density, Density::Default);
/// assert_eq!(config.density_key(), "site-theme-density");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub default_theme: ThemePreference,
    #[serde(default)]
    pub default_density: Density,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemePreference::default(),
            default_density: Density::default(),
            storage_key: default_storage_key(),
        }
    }
}

impl ThemeConfig {
    /// Parses a configuration document. Token fields go through the same
    /// validation as the store setters.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_default_theme(mut self, theme: ThemePreference) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn with_default_density(mut self, density: Density) -> Self {
        self.default_density = density;
        self
    }

    /// Key the theme token is persisted under.
    pub fn theme_key(&self) -> &str {
        &self.storage_key
    }

    /// Key the density token is persisted under: `<storage_key>-density`.
    pub fn density_key(&self) -> String {
        format!("{}-density", self.storage_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, ThemePreference::System);
        assert_eq!(config.default_density, Density::Default);
        assert_eq!(config.theme_key(), "ui-theme");
        assert_eq!(config.density_key(), "ui-theme-density");
    }

    #[test]
    fn test_empty_yaml_takes_defaults() {
        let config = ThemeConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_invalid_token_rejected_at_load() {
        let err = ThemeConfig::from_yaml("default_density: roomy\n").unwrap_err();
        assert!(err.to_string().contains("roomy"));
    }
}
