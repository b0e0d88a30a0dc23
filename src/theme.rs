use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }

    /// Class applied to the page root so `dark:` variants take effect.
    pub fn root_class(self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            ""
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Preference storage unavailable")]
    Unavailable,
    #[error("Couldn't write preference: {0}")]
    Write(String),
}

/// Somewhere the dark/light flag survives a page reload.
pub trait PreferenceStore {
    fn load(&self) -> Option<bool>;
    fn save(&self, is_dark: bool) -> Result<(), StoreError>;
}

/// In-process store. Nothing survives a restart; backs the controller in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: std::sync::Mutex<Option<bool>>,
}

impl MemoryStore {
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            value: std::sync::Mutex::new(initial),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        self.value.lock().ok().and_then(|v| *v)
    }

    fn save(&self, is_dark: bool) -> Result<(), StoreError> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        *value = Some(is_dark);
        Ok(())
    }
}

type Subscriber = Arc<dyn Fn(ThemeState) + Send + Sync>;

/// Owns the single theme flag. Views never mutate it directly: they read
/// through a subscription and request changes with [`ThemeController::toggle`].
pub struct ThemeController<S> {
    state: ThemeState,
    store: S,
    subscribers: Vec<Subscriber>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Persisted preference wins; otherwise fall back to the system setting.
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let is_dark = store.load().unwrap_or(system_prefers_dark);
        Self {
            state: ThemeState { is_dark },
            store,
            subscribers: Vec::new(),
        }
    }

    pub fn theme(&self) -> ThemeState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers `f` and immediately calls it with the current state.
    pub fn subscribe(&mut self, f: impl Fn(ThemeState) + Send + Sync + 'static) {
        let f: Subscriber = Arc::new(f);
        f(self.state);
        self.subscribers.push(f);
    }

    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggled();
        if let Err(e) = self.store.save(self.state.is_dark) {
            log::debug!("theme preference not persisted: {e}");
        }
        for f in &self.subscribers {
            f(self.state);
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Option<bool> {
            None
        }

        fn save(&self, _: bool) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_initial_state_prefers_persisted_value() {
        let controller = ThemeController::new(MemoryStore::new(Some(true)), false);
        assert!(controller.theme().is_dark);

        let controller = ThemeController::new(MemoryStore::new(Some(false)), true);
        assert!(!controller.theme().is_dark);
    }

    #[test]
    fn test_initial_state_falls_back_to_system() {
        let controller = ThemeController::new(MemoryStore::new(None), true);
        assert!(controller.theme().is_dark);
        let controller = ThemeController::new(MemoryStore::new(None), false);
        assert!(!controller.theme().is_dark);
    }

    #[test]
    fn test_toggle_from_light_persists_each_change() {
        let mut controller = ThemeController::new(MemoryStore::new(None), false);
        assert!(!controller.theme().is_dark);

        controller.toggle();
        assert!(controller.theme().is_dark);
        assert_eq!(controller.store().load(), Some(true));

        controller.toggle();
        assert!(!controller.theme().is_dark);
        assert_eq!(controller.store().load(), Some(false));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for start in [true, false] {
            let mut controller = ThemeController::new(MemoryStore::new(Some(start)), !start);
            let before = controller.theme();
            let persisted_before = controller.store().load();
            controller.toggle();
            controller.toggle();
            assert_eq!(controller.theme(), before);
            assert_eq!(controller.store().load(), persisted_before);
        }
    }

    #[test]
    fn test_persistence_failure_still_flips() {
        let mut controller = ThemeController::new(BrokenStore, false);
        let state = controller.toggle();
        assert!(state.is_dark);
        assert!(controller.theme().is_dark);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(std::sync::Mutex::new(None));
        let mut controller = ThemeController::new(MemoryStore::default(), false);
        {
            let calls = calls.clone();
            let last = last.clone();
            controller.subscribe(move |t| {
                calls.fetch_add(1, Ordering::SeqCst);
                *last.lock().unwrap() = Some(t);
            });
        }
        // initial delivery
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), Some(ThemeState { is_dark: false }));

        controller.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*last.lock().unwrap(), Some(ThemeState { is_dark: true }));
    }

    #[test]
    fn test_root_class() {
        assert_eq!(ThemeState { is_dark: true }.root_class(), "dark");
        assert_eq!(ThemeState { is_dark: false }.root_class(), "");
    }
}
