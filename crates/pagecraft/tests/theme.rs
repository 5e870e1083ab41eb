use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use pagecraft::theme::{
    reset_theme_detector, set_theme_detector, ClassList, ColorMode, Density, DocumentRoot,
    FileStorage, StoreMisuseError, ThemeConfig, ThemeHandle, ThemePreference, ThemeProvider,
    ThemeStore,
};
use serial_test::serial;
use tempfile::TempDir;

fn store_at(dir: &TempDir, root: Rc<RefCell<ClassList>>, ambient: fn() -> ColorMode) -> ThemeStore {
    ThemeStore::builder()
        .storage(FileStorage::new(dir.path().join("storage.json")))
        .root(root)
        .detector(ambient)
        .build()
}

fn managed(root: &ClassList) -> Vec<&str> {
    root.iter()
        .filter(|c| ColorMode::CLASSES.contains(c) || Density::CLASSES.contains(c))
        .collect()
}

#[test]
fn test_preferences_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_at(&dir, Rc::new(RefCell::new(ClassList::new())), || ColorMode::Light);
        store.set_theme(ThemePreference::Dark);
        store.set_density(Density::Compact);
    }

    let raw = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(raw.contains("\"ui-theme\": \"dark\""));
    assert!(raw.contains("\"ui-theme-density\": \"compact\""));

    let root = Rc::new(RefCell::new(ClassList::new()));
    let store = store_at(&dir, root.clone(), || ColorMode::Light);
    assert_eq!(store.theme(), ThemePreference::Dark);
    assert_eq!(store.density(), Density::Compact);
    assert_eq!(managed(&root.borrow()), vec!["dark", "density-compact"]);
}

#[test]
fn test_corrupt_storage_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("storage.json"), "not json").unwrap();

    let root = Rc::new(RefCell::new(ClassList::new()));
    let mut store = store_at(&dir, root.clone(), || ColorMode::Dark);
    assert_eq!(store.theme(), ThemePreference::System);
    assert_eq!(store.resolved_theme(), ColorMode::Dark);

    // Writes fail against the corrupt file but the session state still moves.
    store.set_theme(ThemePreference::Light);
    assert_eq!(managed(&root.borrow()), vec!["light"]);
}

#[test]
fn test_invalid_stored_token_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("storage.json"),
        r#"{"ui-theme": "sepia", "ui-theme-density": "comfortable"}"#,
    )
    .unwrap();

    let store = store_at(&dir, Rc::new(RefCell::new(ClassList::new())), || ColorMode::Light);
    assert_eq!(store.theme(), ThemePreference::System);
    assert_eq!(store.density(), Density::Comfortable);
}

#[test]
fn test_exactly_one_color_mode_class_at_a_time() {
    let dir = TempDir::new().unwrap();
    let root = Rc::new(RefCell::new(ClassList::new()));
    root.borrow_mut().add_class("font-sans");
    let mut store = store_at(&dir, root.clone(), || ColorMode::Dark);

    for theme in [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
        ThemePreference::Light,
    ] {
        store.set_theme(theme);
        let root = root.borrow();
        let modes: Vec<_> = root.iter().filter(|c| ColorMode::CLASSES.contains(c)).collect();
        assert_eq!(modes, vec![store.resolved_theme().class()]);
        assert!(root.has_class("font-sans"));
    }
}

#[test]
fn test_default_density_removes_the_density_class() {
    let dir = TempDir::new().unwrap();
    let root = Rc::new(RefCell::new(ClassList::new()));
    let mut store = store_at(&dir, root.clone(), || ColorMode::Light);

    store.set_density(Density::Comfortable);
    assert!(root.borrow().has_class("density-comfortable"));
    store.set_density(Density::Compact);
    assert!(!root.borrow().has_class("density-comfortable"));
    assert!(root.borrow().has_class("density-compact"));
    store.set_density(Density::Default);
    assert_eq!(managed(&root.borrow()), vec!["light"]);
}

#[test]
fn test_custom_storage_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("prefs.json");
    let mut store = ThemeStore::builder()
        .config(ThemeConfig::default().with_storage_key("site"))
        .storage(FileStorage::new(&path))
        .detector(|| ColorMode::Light)
        .build();
    store.toggle_theme();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"site\": \"light\""));
}

#[test]
fn test_handle_outlives_provider() {
    let provider = ThemeProvider::new(
        ThemeStore::builder().detector(|| ColorMode::Light).build(),
    );
    let handle = provider.handle();
    assert_eq!(handle.toggle_theme(), Ok(ThemePreference::Light));
    assert_eq!(handle.toggle_theme(), Ok(ThemePreference::Dark));
    assert_eq!(handle.resolved_theme(), Ok(ColorMode::Dark));

    drop(provider);
    assert_eq!(handle.state(), Err(StoreMisuseError::NoProvider));
    assert_eq!(
        ThemeHandle::detached().set_density(Density::Compact),
        Err(StoreMisuseError::NoProvider)
    );
}

#[test]
#[serial]
fn test_system_follows_process_detector() {
    set_theme_detector(|| ColorMode::Dark);
    let mut store = ThemeStore::builder().build();
    assert_eq!(store.resolved_theme(), ColorMode::Dark);

    set_theme_detector(|| ColorMode::Light);
    store.refresh_ambient();
    assert_eq!(store.resolved_theme(), ColorMode::Light);

    store.set_theme(ThemePreference::Dark);
    set_theme_detector(|| ColorMode::Light);
    store.refresh_ambient();
    assert_eq!(store.resolved_theme(), ColorMode::Dark);

    reset_theme_detector();
}
