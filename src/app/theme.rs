use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{PreferenceStore, StoreError, ThemeController, ThemeState};

#[cfg(feature = "hydrate")]
pub const STORAGE_KEY: &str = "theme_dark";

/// Theme flag kept in the browser's localStorage. Blocked or missing
/// storage shows up as "no preference".
#[derive(Debug, Clone, Copy)]
pub struct LocalPreference {
    stored: Signal<Option<bool>>,
    set_stored: WriteSignal<Option<bool>>,
}

impl LocalPreference {
    fn new() -> Self {
        #[cfg(feature = "hydrate")]
        let (stored, set_stored, _) =
            use_local_storage::<Option<bool>, JsonSerdeWasmCodec>(STORAGE_KEY);
        #[cfg(not(feature = "hydrate"))]
        let (stored, set_stored) = {
            let (stored, set_stored) = signal(None::<bool>);
            (Signal::from(stored), set_stored)
        };
        Self { stored, set_stored }
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Option<bool> {
        self.stored.get_untracked()
    }

    fn save(&self, is_dark: bool) -> Result<(), StoreError> {
        self.set_stored.set(Some(is_dark));
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<ThemeState>,
    controller: StoredValue<Option<ThemeController<LocalPreference>>>,
}

impl ThemeContext {
    pub fn get(&self) -> ThemeState {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.controller.update_value(|c| {
            if let Some(c) = c {
                let theme = c.toggle();
                log::debug!("theme switched, dark = {}", theme.is_dark);
            }
        });
    }
}

/// Creates the one theme controller for the page and shares it through
/// context. The server always renders light; the stored or system
/// preference is applied once the page has hydrated.
pub fn provide_theme() -> ThemeContext {
    let (theme, set_theme) = signal(ThemeState::default());
    let prefers_dark = use_preferred_dark();
    let store = LocalPreference::new();
    let controller = StoredValue::new(None::<ThemeController<LocalPreference>>);

    Effect::new(move |_| {
        let mut c = ThemeController::new(store, prefers_dark.get_untracked());
        c.subscribe(move |t| set_theme.set(t));
        controller.set_value(Some(c));
    });

    let ctx = ThemeContext { theme, controller };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
