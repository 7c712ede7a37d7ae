use crate::utils::host::{ FixedScheme, MarkerFlag, MemoryStore };
use crate::utils::{ ThemePreferenceController, STORAGE_KEY };

pub type MockController = ThemePreferenceController<MemoryStore, FixedScheme, MarkerFlag>;

/// Host handles kept by the test so state can be checked after the
/// controller takes ownership of its clones.
pub struct MockHost {
    pub store: MemoryStore,
    pub system: FixedScheme,
    pub marker: MarkerFlag,
}

impl MockHost {
    pub fn new(stored: Option<&str>, system: Option<bool>) -> Self {
        let store = match stored {
            Some(value) => MemoryStore::with_entry(STORAGE_KEY, value),
            None => MemoryStore::new(),
        };
        Self {
            store,
            system: FixedScheme(system),
            marker: MarkerFlag::new(),
        }
    }

    pub fn broken_storage(system: Option<bool>) -> Self {
        let host = Self::new(None, system);
        host.store.set_available(false);
        host
    }

    pub fn controller(&self) -> MockController {
        ThemePreferenceController::new(self.store.clone(), self.system, self.marker.clone())
    }

    pub fn stored(&self) -> Option<String> {
        self.store.peek(STORAGE_KEY)
    }
}
