//! Light/dark theme preference.
//!
//! The preference is resolved once after mount (stored value first, then the
//! system colour scheme) and changes only through [`ThemeState::toggle`],
//! which persists it and marks the document root.

use leptos::logging;
use leptos::prelude::*;

use crate::storage::{ClientState, KeyValueStore, THEME_KEY, use_client_state};

const DARK_CLASS: &str = "dark";
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// A recognised stored value wins over the system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}

pub fn load(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    Theme::resolve(store.get(THEME_KEY).as_deref(), prefers_dark)
}

pub fn persist(store: &dyn KeyValueStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

fn system_prefers_dark() -> bool {
    window()
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn apply_to_document(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        logging::warn!("Failed to apply theme class: {err:?}");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    client: StoredValue<ClientState>,
}

impl ThemeState {
    /// Reactive current theme.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set(next);
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        self.client.with_value(|client| persist(client.store(), theme));
        apply_to_document(theme);
    }
}

/// Provides the theme state. The stored/system preference is read after
/// mount, so server-rendered markup always starts light.
pub fn provide_theme_state() -> ThemeState {
    let state = ThemeState {
        theme: RwSignal::new(Theme::default()),
        client: StoredValue::new(use_client_state()),
    };
    provide_context(state);

    Effect::new(move || {
        let theme = state
            .client
            .with_value(|client| load(client.store(), system_prefers_dark()));
        state.theme.set(theme);
        apply_to_document(theme);
    });

    state
}

pub fn use_theme_state() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(provide_theme_state)
}
