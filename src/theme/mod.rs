//! Light/dark theme switching with a persisted preference.

pub mod storage;
pub mod view;

use std::cell::Cell;

use crate::config::THEME_STORAGE_KEY;
use storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Order the toggle cycles through.
    pub const CYCLE: [ThemePreference; 2] = [ThemePreference::Dark, ThemePreference::Light];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::CYCLE
            .iter()
            .position(|theme| *theme == self)
            .unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}

/// Where a theme becomes visible: the page and the toggle control.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeView {
    fn apply(&self, theme: ThemePreference);
    /// Show the affordance for switching away from `theme`.
    fn show_toggle_for(&self, theme: ThemePreference);
}

pub struct ThemeController<S: PreferenceStore, V: ThemeView> {
    current: Cell<ThemePreference>,
    store: S,
    view: V,
}

impl<S: PreferenceStore, V: ThemeView> ThemeController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            current: Cell::new(ThemePreference::default()),
            store,
            view,
        }
    }

    /// Apply the saved preference, falling back to dark.
    pub fn initialize(&self) {
        let theme = match self.store.get(THEME_STORAGE_KEY) {
            Some(saved) => ThemePreference::parse(&saved).unwrap_or_else(|| {
                log::debug!("Ignoring unrecognized theme preference {:?}", saved);
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        self.current.set(theme);
        self.view.apply(theme);
        self.view.show_toggle_for(theme);
        log::debug!("Theme initialized to {}", theme.as_str());
    }

    pub fn toggle(&self) -> ThemePreference {
        let theme = self.current.get().next();
        self.current.set(theme);
        self.view.apply(theme);
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
        self.view.show_toggle_for(theme);
        log::info!("Theme switched to {}", theme.as_str());
        theme
    }

    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }
}
