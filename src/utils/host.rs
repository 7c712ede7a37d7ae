//! Host capabilities the theme controller talks to.
//!
//! The browser build reads `localStorage`, queries `matchMedia` and marks
//! `<html>` with a `dark` class. Native builds have none of those, so they
//! get in-memory stand-ins that behave the same way minus persistence across
//! launches. Tests use the in-memory versions too.

use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::utils::ThemePreferenceController;

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

pub trait SystemScheme {
    /// Whether the host currently requests a dark color scheme.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
}

pub trait DocumentRoot {
    fn set_dark_marker(&mut self, dark: bool);
    fn has_dark_marker(&self) -> bool;
}

/// Key-value store backed by a shared map. Clones see the same entries, which
/// is how a page reload is simulated.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            available: Rc::new(Cell::new(true)),
        }
    }

    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Reads the raw entry regardless of availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if !self.available.get() {
            return Err(ThemeError::StorageUnavailable("memory store disabled".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if !self.available.get() {
            return Err(ThemeError::StorageUnavailable("memory store disabled".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// System preference with a fixed answer. `None` means the host cannot report one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub Option<bool>);

impl SystemScheme for FixedScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.0.ok_or(ThemeError::SystemPreferenceUnavailable)
    }
}

/// Shared dark marker for hosts without a DOM.
#[derive(Clone, Debug, Default)]
pub struct MarkerFlag(Rc<Cell<bool>>);

impl MarkerFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl DocumentRoot for MarkerFlag {
    fn set_dark_marker(&mut self, dark: bool) {
        self.0.set(dark);
    }

    fn has_dark_marker(&self) -> bool {
        self.0.get()
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ DocumentRoot, PreferenceStore, SystemScheme };
    use crate::error::ThemeError;

    const DARK_CLASS: &str = "dark";
    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    fn storage() -> Result<web_sys::Storage, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_string()))
    }

    /// `window.localStorage`, looked up on every access since it can be
    /// revoked while the page is open.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorage;

    impl PreferenceStore for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
            Ok(storage()?.get_item(key)?)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            Ok(storage()?.set_item(key, value)?)
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub struct MediaQueryScheme;

    impl SystemScheme for MediaQueryScheme {
        fn prefers_dark(&self) -> Result<bool, ThemeError> {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .map(|mq| mq.matches())
                .ok_or(ThemeError::SystemPreferenceUnavailable)
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub struct DocumentElement;

    impl DocumentElement {
        fn root() -> Option<web_sys::Element> {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
        }
    }

    impl DocumentRoot for DocumentElement {
        fn set_dark_marker(&mut self, dark: bool) {
            let Some(root) = Self::root() else {
                log::warn!("No document element to mark with theme");
                return;
            };
            let class_list = root.class_list();
            let result = if dark {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
            if let Err(e) = result {
                log::warn!("Failed to update theme class: {:?}", e);
            }
        }

        fn has_dark_marker(&self) -> bool {
            Self::root().map_or(false, |root| root.class_list().contains(DARK_CLASS))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{ DocumentElement, LocalStorage, MediaQueryScheme };

#[cfg(target_arch = "wasm32")]
pub type HostThemeController = ThemePreferenceController<
    LocalStorage,
    MediaQueryScheme,
    DocumentElement
>;

#[cfg(not(target_arch = "wasm32"))]
pub type HostThemeController = ThemePreferenceController<MemoryStore, FixedScheme, MarkerFlag>;

/// Builds the controller for the current target. It still needs `initialize`.
#[cfg(target_arch = "wasm32")]
pub fn host_controller() -> HostThemeController {
    ThemePreferenceController::new(LocalStorage, MediaQueryScheme, DocumentElement)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn host_controller() -> HostThemeController {
    ThemePreferenceController::new(MemoryStore::new(), FixedScheme(None), MarkerFlag::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let mut store = MemoryStore::new();
        let other = store.clone();
        store.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_memory_store_unavailable() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.read("k"), Err(ThemeError::StorageUnavailable(_))));
        assert!(store.write("k", "v").is_err());
        assert_eq!(store.peek("k"), None);
    }

    #[test]
    fn test_fixed_scheme() {
        assert_eq!(FixedScheme(Some(true)).prefers_dark(), Ok(true));
        assert_eq!(FixedScheme(None).prefers_dark(), Err(ThemeError::SystemPreferenceUnavailable));
    }

    #[test]
    fn test_native_host_controller_starts_light() {
        let mut controller = host_controller();
        assert!(!controller.initialize());
    }
}
