//! Light/Dark Theme
//!
//! The preference lives in `localStorage` under `theme` and is applied as a
//! `data-theme` attribute on the `<html>` element.

const THEME_STORAGE_KEY: &str = "theme";
const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but `"dark"` falls back to light
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle icon: shows the mode a click switches to
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Saved preference, or light when nothing is stored
pub fn load_theme() -> Theme {
    let stored = storage().and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::parse(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = storage() {
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(?err, "failed to persist theme");
        }
    }
}

pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            tracing::warn!(?err, "failed to apply theme");
        }
    }
}
