//! Lifetime scoping for the theme store.
//!
//! A [`ThemeProvider`] owns the store for as long as the application is
//! mounted. Consumers hold [`ThemeHandle`]s, which do not keep the store
//! alive: using a handle after its provider is gone, or one that was never
//! attached to a provider, is an error rather than a silent default.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;

use super::mode::{ColorMode, Density, ThemePreference};
use super::store::{ThemeState, ThemeStore};

/// Misuse of a [`ThemeHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreMisuseError {
    #[error("theme state used outside of a ThemeProvider")]
    NoProvider,

    #[error("theme store accessed while it is already being updated")]
    Reentrant,
}

/// Owns the application's [`ThemeStore`].
#[derive(Debug)]
pub struct ThemeProvider {
    store: Rc<RefCell<ThemeStore>>,
}

impl ThemeProvider {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// A consumer handle bound to this provider.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            store: Rc::downgrade(&self.store),
        }
    }
}

/// A consumer's view of the theme store.
#[derive(Debug, Clone, Default)]
pub struct ThemeHandle {
    store: Weak<RefCell<ThemeStore>>,
}

impl ThemeHandle {
    /// A handle bound to no provider; every access fails with
    /// [`StoreMisuseError::NoProvider`].
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the provider is still mounted.
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Runs `f` with shared access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&ThemeStore) -> R) -> Result<R, StoreMisuseError> {
        let store = self.store.upgrade().ok_or(StoreMisuseError::NoProvider)?;
        let guard = store.try_borrow().map_err(|_| StoreMisuseError::Reentrant)?;
        Ok(f(&*guard))
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Fails with [`StoreMisuseError::Reentrant`] when called from inside a
    /// store subscriber.
    pub fn with_mut<R>(
        &self,
        f: impl FnOnce(&mut ThemeStore) -> R,
    ) -> Result<R, StoreMisuseError> {
        let store = self.store.upgrade().ok_or(StoreMisuseError::NoProvider)?;
        let mut guard = store
            .try_borrow_mut()
            .map_err(|_| StoreMisuseError::Reentrant)?;
        Ok(f(&mut *guard))
    }

    pub fn state(&self) -> Result<ThemeState, StoreMisuseError> {
        self.with(ThemeStore::state)
    }

    pub fn resolved_theme(&self) -> Result<ColorMode, StoreMisuseError> {
        self.with(ThemeStore::resolved_theme)
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreMisuseError> {
        self.with_mut(|store| store.set_theme(theme))
    }

    pub fn set_density(&self, density: Density) -> Result<(), StoreMisuseError> {
        self.with_mut(|store| store.set_density(density))
    }

    pub fn toggle_theme(&self) -> Result<ThemePreference, StoreMisuseError> {
        self.with_mut(ThemeStore::toggle_theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ThemeProvider {
        ThemeProvider::new(ThemeStore::builder().detector(|| ColorMode::Light).build())
    }

    #[test]
    fn test_handle_reads_and_writes_through_provider() {
        let provider = provider();
        let handle = provider.handle();
        handle.set_theme(ThemePreference::Dark).unwrap();
        assert_eq!(handle.resolved_theme(), Ok(ColorMode::Dark));
        assert_eq!(provider.handle().state().unwrap().theme, ThemePreference::Dark);
    }

    #[test]
    fn test_detached_handle_fails_loudly() {
        let handle = ThemeHandle::detached();
        assert!(!handle.is_attached());
        assert_eq!(handle.state(), Err(StoreMisuseError::NoProvider));
        assert_eq!(
            handle.set_density(Density::Compact),
            Err(StoreMisuseError::NoProvider)
        );
    }

    #[test]
    fn test_handle_fails_after_unmount() {
        let provider = provider();
        let handle = provider.handle();
        assert!(handle.is_attached());
        drop(provider);
        assert_eq!(handle.toggle_theme(), Err(StoreMisuseError::NoProvider));
    }

    #[test]
    fn test_write_from_subscriber_is_reentrant() {
        let provider = provider();
        let handle = provider.handle();
        let inner = handle.clone();
        let result = Rc::new(RefCell::new(None));
        let sink = result.clone();
        handle
            .with_mut(|store| {
                store.subscribe(move |_| {
                    *sink.borrow_mut() = Some(inner.set_density(Density::Compact));
                })
            })
            .unwrap();

        handle.set_theme(ThemePreference::Dark).unwrap();
        assert_eq!(*result.borrow(), Some(Err(StoreMisuseError::Reentrant)));
    }
}
