//! Theme preference controller.
//!
//! Owns both halves of the theme state: the persisted preference in a
//! [`PreferenceStore`] and the applied markers on the page's root container
//! (a [`ThemeSurface`]). Nothing else reads the storage key or touches the
//! markers.
//!
//! Page load runs two passes over the same apply routine:
//!
//! 1. [`ThemeController::early_apply`] as soon as the container exists, to
//!    avoid a flash of the wrong theme. It never writes the store, so it
//!    cannot race the second pass on a first visit.
//! 2. [`ThemeController::authoritative_apply`] once the page structure is
//!    ready. It applies the stored value, or applies and persists `Light`
//!    when nothing valid is stored.
//!
//! After that, [`ThemeController::toggle`] flips the theme and persists it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{ThemePreference, ToggleAffordance};
use crate::util::storage::PreferenceStore;

/// The page element carrying the theme markers, plus the optional toggle.
pub trait ThemeSurface {
    fn has_marker(&self, marker: &str) -> bool;
    fn add_marker(&mut self, marker: &str);
    fn remove_marker(&mut self, marker: &str);
    /// Update the toggle control's text and accessible name. No-op when the
    /// page has no toggle.
    fn label_toggle(&mut self, affordance: ToggleAffordance);
}

pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: String,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T, key: impl Into<String>) -> Self {
        Self { store, surface, key: key.into() }
    }

    /// The persisted preference, or `None` when unset, unreadable, or not one
    /// of the two known values.
    pub fn stored(&self) -> Option<ThemePreference> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("{err}");
                return None;
            }
        };
        let parsed = ThemePreference::parse(&raw);
        if parsed.is_none() {
            log::warn!("ignoring unknown stored theme {raw:?}");
        }
        parsed
    }

    /// The theme currently applied to the container.
    pub fn current(&self) -> ThemePreference {
        if self.surface.has_marker(ThemePreference::Dark.as_str()) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Set the marker for `pref`, clear the other one and relabel the toggle.
    pub fn apply(&mut self, pref: ThemePreference) {
        self.surface.add_marker(pref.as_str());
        self.surface.remove_marker(pref.opposite().as_str());
        self.surface.label_toggle(pref.toggle_affordance());
        log::debug!("theme applied: {pref}");
    }

    /// Best-effort pre-render pass. Reads the store but never writes it.
    pub fn early_apply(&mut self) -> ThemePreference {
        let pref = self.stored().unwrap_or_default();
        self.apply(pref);
        pref
    }

    /// Definitive pass once the page is ready. Establishes the persisted
    /// default when nothing valid is stored.
    pub fn authoritative_apply(&mut self) -> ThemePreference {
        match self.stored() {
            Some(pref) => {
                self.apply(pref);
                pref
            }
            None => {
                let pref = ThemePreference::default();
                self.apply(pref);
                self.persist(pref);
                log::info!("no saved theme; defaulted to {pref}");
                pref
            }
        }
    }

    /// Switch to the opposite of the applied theme and persist it.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current().opposite();
        self.apply(next);
        self.persist(next);
        log::info!("theme toggled to {next}");
        next
    }

    fn persist(&mut self, pref: ThemePreference) {
        if let Err(err) = self.store.set(&self.key, pref.as_str()) {
            log::warn!("{err}");
        }
    }
}
