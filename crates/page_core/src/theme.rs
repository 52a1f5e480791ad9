use shared::domain::{ThemePreference, THEME_STORAGE_KEY};
use shared::error::PageError;
use storage::{MemoryPreferences, PreferenceStore};
use tracing::{debug, warn};

/// Document-level styling scope that every themed surface reads from.
pub trait StyleScope: Send {
    fn set_dark(&mut self, dark: bool);
}

impl<S: StyleScope + ?Sized> StyleScope for Box<S> {
    fn set_dark(&mut self, dark: bool) {
        (**self).set_dark(dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
    Durable,
    /// Storage failed once; the preference lives in memory for the session.
    InMemory,
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    scope: Box<dyn StyleScope>,
    mode: PersistenceMode,
}

impl ThemeController {
    pub fn new(store: Box<dyn PreferenceStore>, scope: Box<dyn StyleScope>) -> Self {
        Self {
            store,
            scope,
            mode: PersistenceMode::Durable,
        }
    }

    /// Reads the persisted preference. Never fails: storage errors and
    /// unrecognized values both resolve to Dark.
    pub fn initialize(&mut self) -> ThemePreference {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let preference = ThemePreference::from_persisted(Some(&raw));
                if ThemePreference::parse(&raw).is_none() {
                    debug!(value = %raw, "unrecognized persisted theme; using dark");
                }
                preference
            }
            Ok(None) => ThemePreference::Dark,
            Err(err) => {
                self.degrade(&err);
                ThemePreference::Dark
            }
        }
    }

    pub fn toggle(current: ThemePreference) -> ThemePreference {
        current.opposite()
    }

    /// Persists `preference` and updates the style scope, in that order.
    pub fn apply(&mut self, preference: ThemePreference) {
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, preference.as_str()) {
            self.degrade(&err);
            if let Err(err) = self.store.set(THEME_STORAGE_KEY, preference.as_str()) {
                warn!(error = %err, "session preference store rejected write");
            }
        }
        self.scope.set_dark(preference.is_dark());
        debug!(theme = %preference, "theme applied");
    }

    pub fn persistence_mode(&self) -> PersistenceMode {
        self.mode
    }

    fn degrade(&mut self, err: &PageError) {
        if self.mode == PersistenceMode::InMemory {
            return;
        }
        warn!(code = ?err.code(), error = %err, "theme storage unavailable; keeping preference in memory for this session");
        self.mode = PersistenceMode::InMemory;
        self.store = Box::new(MemoryPreferences::new());
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
