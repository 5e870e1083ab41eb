//! Theme, density and scope tokens.

token_enum! {
    /// The persisted color theme choice.
    ///
    /// `System` is an indirection: it is never applied to the document as
    /// such but resolved to a concrete [`ColorMode`] from the ambient signal.
    pub enum ThemePreference ("theme") {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
    default System
}

impl ThemePreference {
    /// The concrete mode this preference stands for under `ambient`.
    pub fn resolve(self, ambient: ColorMode) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::System => ambient,
        }
    }

    /// The preference a theme toggle switches to: light goes dark, anything
    /// else goes light.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }
}

token_enum! {
    /// A concrete color mode; exactly one is asserted on the document root.
    pub enum ColorMode ("color mode") {
        Light => "light",
        Dark => "dark",
    }
    default Light
}

impl ColorMode {
    /// Every class a color mode can put on the root.
    pub const CLASSES: &'static [&'static str] = &["light", "dark"];

    pub fn class(self) -> &'static str {
        self.as_str()
    }
}

token_enum! {
    /// Spacing scale. `Default` is the absence of an override and carries no
    /// class.
    pub enum Density ("density") {
        Compact => "compact",
        Default => "default",
        Comfortable => "comfortable",
    }
    default Default
}

impl Density {
    /// Every class a density can put on the root.
    pub const CLASSES: &'static [&'static str] = &["density-compact", "density-comfortable"];

    pub fn class(self) -> Option<&'static str> {
        match self {
            Density::Compact => Some("density-compact"),
            Density::Default => None,
            Density::Comfortable => Some("density-comfortable"),
        }
    }
}

token_enum! {
    /// A named palette layered on one subtree without touching the global
    /// theme state.
    pub enum ThemeScope ("theme scope") {
        Ocean => "ocean",
        Corporate => "corporate",
    }
    default Ocean
}

impl ThemeScope {
    /// `theme-ocean`, `theme-corporate`.
    pub fn class(self) -> &'static str {
        match self {
            ThemeScope::Ocean => "theme-ocean",
            ThemeScope::Corporate => "theme-corporate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ConfigurationError;

    #[test]
    fn test_system_tracks_ambient() {
        assert_eq!(ThemePreference::System.resolve(ColorMode::Dark), ColorMode::Dark);
        assert_eq!(ThemePreference::System.resolve(ColorMode::Light), ColorMode::Light);
        assert_eq!(ThemePreference::Light.resolve(ColorMode::Dark), ColorMode::Light);
    }

    #[test]
    fn test_toggle_sends_system_to_light() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Light);
    }

    #[test]
    fn test_tokens_parse_and_reject() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("comfortable".parse::<Density>(), Ok(Density::Comfortable));
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidToken { kind: "theme", .. }));
        assert!("Dark".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_default_density_has_no_class() {
        assert_eq!(Density::default().class(), None);
        assert_eq!(Density::Compact.class(), Some("density-compact"));
        for density in Density::ALL {
            if let Some(class) = density.class() {
                assert!(Density::CLASSES.contains(&class));
            }
        }
    }

    #[test]
    fn test_tokens_serialize_as_literals() {
        let json = serde_json::to_string(&ThemeScope::Corporate).unwrap();
        assert_eq!(json, "\"corporate\"");
        let back: ThemeScope = serde_json::from_str(&json).unwrap();
        assert_eq!(back.class(), "theme-corporate");
        assert!(serde_json::from_str::<ThemeScope>("\"forest\"").is_err());
    }
}
