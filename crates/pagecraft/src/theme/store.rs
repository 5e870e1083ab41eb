//! The theme/density store.
//!
//! One store per application owns the [`ThemeState`]. It is the only writer
//! of the color-mode and density classes on the document root and of the
//! persisted tokens. Every setter is synchronous: the validated value is in
//! memory, on the root and handed to subscribers before the call returns.
//! Persistence is best effort and never fails a setter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::adaptive::{detect_color_mode, ThemeDetector};
use super::config::ThemeConfig;
use super::mode::{ColorMode, Density, ThemePreference};
use super::root::{ClassList, DocumentRoot};
use super::storage::{MemoryStorage, Storage};
use crate::style::ConfigurationError;

/// A document root shared between the store and the host.
pub type SharedRoot = Rc<RefCell<dyn DocumentRoot>>;

type Listener = Box<dyn FnMut(&ThemeState)>;

/// Snapshot of the global presentation mode.
///
/// `resolved_theme` is always concrete; with `theme = system` it follows the
/// ambient signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: ThemePreference,
    pub density: Density,
    pub resolved_theme: ColorMode,
}

impl ThemeState {
    /// The classes this state asserts on the root: the color mode, then the
    /// density class unless density is the default.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.resolved_theme.class()];
        classes.extend(self.density.class());
        classes
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Builder for [`ThemeStore`].
pub struct ThemeStoreBuilder {
    config: ThemeConfig,
    storage: Box<dyn Storage>,
    root: SharedRoot,
    detector: ThemeDetector,
}

impl ThemeStoreBuilder {
    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    /// The node the store asserts its classes on.
    pub fn root(mut self, root: SharedRoot) -> Self {
        self.root = root;
        self
    }

    /// Ambient color-scheme source; defaults to the process-wide detector.
    pub fn detector(mut self, detector: ThemeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Reads the persisted tokens and applies the initial classes.
    ///
    /// Stored values that are missing, unreadable or outside their domain
    /// fall back to the configured defaults.
    pub fn build(self) -> ThemeStore {
        let theme = read_token(
            self.storage.as_ref(),
            self.config.theme_key(),
            self.config.default_theme,
        );
        let density = read_token(
            self.storage.as_ref(),
            &self.config.density_key(),
            self.config.default_density,
        );
        let state = ThemeState {
            theme,
            density,
            resolved_theme: theme.resolve((self.detector)()),
        };

        let store = ThemeStore {
            config: self.config,
            storage: self.storage,
            root: self.root,
            detector: self.detector,
            state,
            listeners: Vec::new(),
            next_id: 0,
        };
        store.apply_classes();
        debug!(
            theme = %store.state.theme,
            density = %store.state.density,
            resolved = %store.state.resolved_theme,
            "theme store initialised"
        );
        store
    }
}

fn read_token<T>(storage: &dyn Storage, key: &str, default: T) -> T
where
    T: std::str::FromStr<Err = ConfigurationError> + Copy,
{
    match storage.get(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(value) => value,
            Err(err) => {
                debug!(key, %err, "ignoring invalid stored value");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            debug!(key, %err, "storage unavailable, using default");
            default
        }
    }
}

/// Owner of the global theme and density.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use pagecraft::theme::{ClassList, ColorMode, DocumentRoot, ThemePreference, ThemeStore};
///
/// let root = Rc::new(RefCell::new(ClassList::new()));
/// let mut store = ThemeStore::builder()
///     .root(root.clone())
///     .detector(|| ColorMode::Dark)
///     .build();
///
/// assert!(root.borrow().has_class("dark"));
/// store.set_theme(ThemePreference::Light);
/// assert!(root.borrow().has_class("light"));
/// assert!(!root.borrow().has_class("dark"));
/// ```
pub struct ThemeStore {
    config: ThemeConfig,
    storage: Box<dyn Storage>,
    root: SharedRoot,
    detector: ThemeDetector,
    state: ThemeState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Starts a builder with the default configuration, session-only
    /// storage, a private root and the process-wide detector.
    pub fn builder() -> ThemeStoreBuilder {
        ThemeStoreBuilder {
            config: ThemeConfig::default(),
            storage: Box::new(MemoryStorage::new()),
            root: Rc::new(RefCell::new(ClassList::new())),
            detector: detect_color_mode,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.theme
    }

    pub fn density(&self) -> Density {
        self.state.density
    }

    pub fn resolved_theme(&self) -> ColorMode {
        self.state.resolved_theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn root(&self) -> SharedRoot {
        Rc::clone(&self.root)
    }

    /// Persists and applies a theme preference.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.persist(self.config.theme_key().to_string(), theme.as_str());
        let resolved_theme = theme.resolve((self.detector)());
        self.transition(ThemeState {
            theme,
            resolved_theme,
            ..self.state
        });
    }

    /// Parses then applies a theme token. An invalid token is rejected
    /// before anything is persisted or changed.
    pub fn set_theme_token(&mut self, token: &str) -> Result<(), ConfigurationError> {
        let theme = token.parse()?;
        self.set_theme(theme);
        Ok(())
    }

    /// Persists and applies a density.
    pub fn set_density(&mut self, density: Density) {
        self.persist(self.config.density_key(), density.as_str());
        self.transition(ThemeState {
            density,
            ..self.state
        });
    }

    pub fn set_density_token(&mut self, token: &str) -> Result<(), ConfigurationError> {
        let density = token.parse()?;
        self.set_density(density);
        Ok(())
    }

    /// Light goes dark, anything else (including `system`) goes light.
    /// Returns the new preference.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        let next = self.state.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Feeds a new ambient color-scheme observation.
    ///
    /// Only has an effect while the preference is `system`.
    pub fn ambient_changed(&mut self, ambient: ColorMode) {
        if self.state.theme != ThemePreference::System {
            return;
        }
        self.transition(ThemeState {
            resolved_theme: ambient,
            ..self.state
        });
    }

    /// Re-reads the detector and applies the result, see
    /// [`ambient_changed`](Self::ambient_changed).
    pub fn refresh_ambient(&mut self) {
        let ambient = (self.detector)();
        self.ambient_changed(ambient);
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn persist(&mut self, key: String, value: &str) {
        if let Err(err) = self.storage.set(&key, value) {
            warn!(key = %key, %err, "failed to persist theme setting");
        }
    }

    fn transition(&mut self, next: ThemeState) {
        if next == self.state {
            return;
        }
        debug!(
            theme = %next.theme,
            density = %next.density,
            resolved = %next.resolved_theme,
            "theme state changed"
        );
        self.state = next;
        self.apply_classes();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Retracts every managed class, then asserts the current ones, in one
    /// borrow of the root.
    fn apply_classes(&self) {
        let mut root = self.root.borrow_mut();
        for class in ColorMode::CLASSES.iter().chain(Density::CLASSES) {
            root.remove_class(class);
        }
        for class in self.state.root_classes() {
            root.add_class(class);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
