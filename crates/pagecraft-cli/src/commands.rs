//! Command implementations. Each returns the text to print so the binary
//! stays a thin dispatcher.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use console::style;
use pagecraft::components::{style_for, ALL_STYLES};
use pagecraft::style::{resolve, StyleProps};
use pagecraft::theme::{detect_color_mode, FileStorage, ThemeDetector};
use pagecraft::{
    Density, Page, PageRenderer, ThemeConfig, ThemePreference, ThemeState, ThemeStore,
};
use tracing::{debug, info};

/// Splits `axis=value` arguments.
fn parse_pairs(pairs: &[String]) -> Result<Vec<(&str, &str)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(axis, value)| !axis.is_empty() && !value.is_empty())
                .ok_or_else(|| anyhow!("expected axis=value, got '{pair}'"))
        })
        .collect()
}

pub fn resolve_component(component: &str, pairs: &[String], class: Option<&str>) -> Result<String> {
    let Some(spec) = style_for(component) else {
        let known: Vec<_> = ALL_STYLES.iter().map(|s| s.component).collect();
        bail!(
            "unknown component '{component}' (known: {})",
            known.join(", ")
        );
    };

    let mut props = StyleProps::new();
    for (axis, value) in parse_pairs(pairs)? {
        props.set(axis, value);
    }
    let resolved = resolve(spec, &props, class)?;

    let width = spec.axes.iter().map(|a| a.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    writeln!(out, "{}", style(spec.component).bold())?;
    for axis in resolved.axes() {
        let marker = if props.get(axis.axis).is_some() { "" } else { " (default)" };
        writeln!(
            out,
            "  {:width$}  {}{}",
            style(axis.axis).cyan(),
            axis.value,
            style(marker).dim(),
        )?;
    }
    write!(out, "{}", resolved.class_string())?;
    Ok(out)
}

/// Reads the theme configuration at `path`; no path means the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = ThemeConfig::from_yaml(&yaml)
        .with_context(|| format!("invalid theme config {}", path.display()))?;
    debug!(path = %path.display(), key = %config.storage_key, "loaded theme config");
    Ok(config)
}

/// Opens the theme store persisted at `path`.
pub fn open_store(path: &Path, config: ThemeConfig, detector: ThemeDetector) -> ThemeStore {
    debug!(path = %path.display(), "opening theme store");
    ThemeStore::builder()
        .config(config)
        .storage(FileStorage::new(path))
        .detector(detector)
        .build()
}

pub struct RenderOptions<'a> {
    pub theme: Option<ThemePreference>,
    pub density: Option<Density>,
    pub output: Option<&'a Path>,
}

/// Renders the page description at `input`. The persisted theme state is
/// the baseline; `--theme` and `--density` override it for this render only.
pub fn render_page(input: &Path, store: &ThemeStore, options: RenderOptions<'_>) -> Result<String> {
    let yaml = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let page = Page::from_yaml(&yaml)
        .with_context(|| format!("failed to load {}", input.display()))?;

    let base = store.state();
    let theme = options.theme.unwrap_or(base.theme);
    let state = ThemeState {
        theme,
        density: options.density.unwrap_or(base.density),
        resolved_theme: match options.theme {
            Some(theme) => theme.resolve(detect_color_mode()),
            None => base.resolved_theme,
        },
    };

    let html = PageRenderer::new()?.render_page(&page, &state)?;
    match options.output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), blocks = page.blocks.len(), "page written");
            Ok(format!(
                "{} {} ({} blocks)",
                style("wrote").green(),
                path.display(),
                page.blocks.len()
            ))
        }
        None => Ok(html),
    }
}

pub fn theme_show(store: &ThemeStore) -> String {
    let state = store.state();
    format!(
        "{:8} {}\n{:8} {}\n{:8} {}\n{:8} {}",
        style("theme").cyan(),
        state.theme,
        style("resolved").cyan(),
        state.resolved_theme,
        style("density").cyan(),
        state.density,
        style("root").cyan(),
        state.root_classes().join(" "),
    )
}

pub fn theme_set(store: &mut ThemeStore, token: &str) -> Result<String> {
    store.set_theme_token(token)?;
    Ok(theme_show(store))
}

pub fn theme_density(store: &mut ThemeStore, token: &str) -> Result<String> {
    store.set_density_token(token)?;
    Ok(theme_show(store))
}

pub fn theme_toggle(store: &mut ThemeStore) -> String {
    store.toggle_theme();
    theme_show(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft::ColorMode;
    use tempfile::TempDir;

    fn dark() -> ColorMode {
        ColorMode::Dark
    }

    fn args(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_resolve_lists_axes_and_classes() {
        let out = resolve_component("heading", &args(&["size=2xl", "weight=bold"]), None).unwrap();
        assert!(out.contains("Heading"));
        assert!(out.contains("2xl"));
        assert!(out.lines().last().unwrap().contains("font-bold"));
    }

    #[test]
    fn test_resolve_marks_defaults() {
        let out = resolve_component("Heading", &args(&["size=xl"]), Some("text-primary")).unwrap();
        assert!(out.contains("semibold"));
        assert!(out.contains("(default)"));
        assert!(out.ends_with("text-primary"));
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        assert!(resolve_component("Carousel", &[], None).is_err());
        assert!(resolve_component("Heading", &args(&["size"]), None).is_err());
        let err = resolve_component("Heading", &args(&["size=huge"]), None).unwrap_err();
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_resolve_rejects_repeated_axis() {
        let err = resolve_component("Heading", &args(&["size=huge", "size=lg"]), None).unwrap_err();
        assert!(err.to_string().contains("Heading.size is given more than once"));
        assert!(resolve_component("Heading", &args(&["size=lg", "size=lg"]), None).is_err());
    }

    #[test]
    fn test_theme_commands_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = open_store(&path, ThemeConfig::default(), dark);
        assert!(theme_show(&store).contains("system"));
        theme_set(&mut store, "light").unwrap();
        theme_density(&mut store, "compact").unwrap();
        assert!(theme_set(&mut store, "sepia").is_err());

        let store = open_store(&path, ThemeConfig::default(), dark);
        let out = theme_show(&store);
        assert!(out.contains("light density-compact"));
        assert_eq!(store.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_config_file_sets_storage_key_and_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("theme.yaml");
        fs::write(&config_path, "default_theme: dark\nstorage_key: site-theme\n").unwrap();
        let storage = dir.path().join("storage.json");

        let config = load_config(Some(&config_path)).unwrap();
        let mut store = open_store(&storage, config.clone(), dark);
        assert_eq!(store.theme(), ThemePreference::Dark);
        theme_set(&mut store, "light").unwrap();
        theme_density(&mut store, "compact").unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&storage).unwrap()).unwrap();
        assert_eq!(saved["site-theme"], "light");
        assert_eq!(saved["site-theme-density"], "compact");
        assert!(saved.get("ui-theme").is_none());

        let reopened = open_store(&storage, config, dark);
        assert_eq!(reopened.theme(), ThemePreference::Light);
        let defaults = open_store(&storage, ThemeConfig::default(), dark);
        assert_eq!(defaults.theme(), ThemePreference::System);
    }

    #[test]
    fn test_config_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("theme.yaml");
        fs::write(&config_path, "default_theme: sepia\n").unwrap();
        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(format!("{err:#}").contains("theme.yaml"));
        assert!(format!("{err:#}").contains("sepia"));

        assert!(load_config(Some(&dir.path().join("missing.yaml"))).is_err());
        assert_eq!(load_config(None).unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_toggle_from_system_goes_light() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir.path().join("storage.json"), ThemeConfig::default(), dark);
        theme_toggle(&mut store);
        assert_eq!(store.theme(), ThemePreference::Light);
        theme_toggle(&mut store);
        assert_eq!(store.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_render_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.yaml");
        let output = dir.path().join("page.html");
        fs::write(
            &input,
            "title: Hello\nblocks:\n  - block: hero\n    title: Welcome\n",
        )
        .unwrap();

        let store = open_store(&dir.path().join("storage.json"), ThemeConfig::default(), dark);
        let options = RenderOptions {
            theme: Some(ThemePreference::Light),
            density: Some(Density::Comfortable),
            output: Some(&output),
        };
        let message = render_page(&input, &store, options).unwrap();
        assert!(message.contains("1 blocks"));

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"class="light density-comfortable""#));
        assert!(html.contains("Welcome"));
    }

    #[test]
    fn test_render_uses_persisted_state_by_default() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.yaml");
        fs::write(&input, "title: Hello\n").unwrap();

        let store = open_store(&dir.path().join("storage.json"), ThemeConfig::default(), dark);
        let options = RenderOptions {
            theme: None,
            density: None,
            output: None,
        };
        let html = render_page(&input, &store, options).unwrap();
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
    }

    #[test]
    fn test_render_reports_invalid_pages() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.yaml");
        fs::write(&input, "title: x\nblocks:\n  - block: hero\n    variant: diagonal\n").unwrap();
        let store = open_store(&dir.path().join("storage.json"), ThemeConfig::default(), dark);
        let options = RenderOptions {
            theme: None,
            density: None,
            output: None,
        };
        let err = render_page(&input, &store, options).unwrap_err();
        assert!(format!("{err:#}").contains("diagonal"));
    }
}
