//! Persisted page state, loaded once at startup and passed to the components
//! that need it.

use crate::constants::{THEME_KEY, VISITED_KEY};
use crate::store::{persist, KvStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteState {
    pub theme: Theme,
    /// True only on the very first page load; the visited flag is written as
    /// part of loading, so every later load sees `false`.
    pub first_visit: bool,
}

impl SiteState {
    pub fn load(store: &mut impl KvStore) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let first_visit = store.get(VISITED_KEY).is_none();
        if first_visit {
            persist(store, VISITED_KEY, "true");
        }
        log::debug!(
            "[state] theme={} first_visit={}",
            theme.as_str(),
            first_visit
        );
        Self { theme, first_visit }
    }
}
