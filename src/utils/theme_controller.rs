use crate::utils::host::{ DocumentRoot, PreferenceStore, SystemScheme };
use crate::utils::ThemeState;

/// Storage key of the persisted preference.
pub const STORAGE_KEY: &str = "prefers-dark";

/// Single owner of the page's light/dark mode.
///
/// Resolution order on `initialize` is stored choice, then system preference,
/// then light. Every change goes through `apply`, which marks the document and
/// persists the value. Storage and system failures never leave this type.
pub struct ThemePreferenceController<S, Q, D> {
    store: S,
    system: Q,
    document: D,
    state: ThemeState,
}

impl<S, Q, D> ThemePreferenceController<S, Q, D>
    where S: PreferenceStore, Q: SystemScheme, D: DocumentRoot
{
    pub fn new(store: S, system: Q, document: D) -> Self {
        Self {
            store,
            system,
            document,
            state: ThemeState::default(),
        }
    }

    /// Resolves the initial preference. Only reads; nothing is applied.
    pub fn initialize(&mut self) -> bool {
        let stored = match self.store.read(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Ignoring stored theme: {}", e);
                None
            }
        };

        self.state = match stored {
            Some(value) => ThemeState::from_stored(&value),
            None => {
                let prefers_dark = self.system.prefers_dark().unwrap_or_else(|e| {
                    log::debug!("Falling back to light theme: {}", e);
                    false
                });
                ThemeState::from(prefers_dark)
            }
        };

        log::info!("Initial theme: {}", self.state.label());
        self.state.is_dark
    }

    /// Initializes and applies the resolved value, as on page load.
    pub fn start(mut self) -> Self {
        let initial = self.initialize();
        self.apply(initial);
        self
    }

    /// Marks the document and persists the value. Idempotent.
    pub fn apply(&mut self, preference: bool) {
        self.state = ThemeState::from(preference);
        self.document.set_dark_marker(preference);

        if let Err(e) = self.store.write(STORAGE_KEY, self.state.as_stored()) {
            log::debug!("Theme not persisted: {}", e);
        }
    }

    pub fn toggle(&mut self) {
        let next = self.state.toggled();
        log::info!("Switching theme to {}", next.label());
        self.apply(next.is_dark);
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn has_dark_marker(&self) -> bool {
        self.document.has_dark_marker()
    }
}
