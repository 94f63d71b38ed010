//! Two-valued light/dark display mode, owned by the shell and handed to
//! whichever component needs it.

use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

/// Single-writer cell holding the active [`ThemePreference`].
///
/// Constructed once in the shell and passed down by value, so a test can
/// substitute `ThemeCell::new(ThemePreference::Light)` for the loaded one.
#[derive(Clone, Copy)]
pub struct ThemeCell(RwSignal<ThemePreference>);

impl ThemeCell {
    pub fn new(initial: ThemePreference) -> Self {
        Self(RwSignal::new(initial))
    }

    /// Honors a previously stored preference when the host offers storage,
    /// otherwise starts dark.
    pub fn load() -> Self {
        Self::new(stored_preference().unwrap_or_default())
    }

    pub fn get(self) -> ThemePreference {
        self.0.get()
    }

    pub fn toggle(self) {
        let next = self.0.get_untracked().toggled();
        self.0.set(next);
        store_preference(next);
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_preference() -> Option<ThemePreference> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    ThemePreference::from_str(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_preference() -> Option<ThemePreference> {
    None
}

// Persistence is best-effort; a host without storage still themes fine.
#[cfg(target_arch = "wasm32")]
fn store_preference(preference: ThemePreference) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, preference.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_preference(_preference: ThemePreference) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
        assert_eq!(ThemeCell::load().get(), ThemePreference::Dark);
    }

    #[test]
    fn toggled_is_an_involution() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn cell_toggle_round_trips() {
        let cell = ThemeCell::new(ThemePreference::Dark);
        cell.toggle();
        assert_eq!(cell.get(), ThemePreference::Light);
        cell.toggle();
        assert_eq!(cell.get(), ThemePreference::Dark);
    }

    #[test]
    fn string_form_round_trips() {
        for mode in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemePreference::from_str("solarized"), None);
    }
}
