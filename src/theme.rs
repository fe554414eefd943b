use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted mode.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class placed on the document root for this mode.
    pub fn marker(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Replace any mode marker in a class attribute with `theme`'s.
///
/// Other classes keep their order; the result carries exactly one marker.
pub fn with_marker(classes: &str, theme: Theme) -> String {
    classes
        .split_whitespace()
        .filter(|c| *c != Theme::Light.marker() && *c != Theme::Dark.marker())
        .chain(std::iter::once(theme.marker()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Everything the theme logic needs from the platform.
///
/// In the browser this is local storage, the `prefers-color-scheme` media
/// query and the `<html>` class list. During server rendering none of those
/// exist and the host is inert.
pub trait ThemeHost {
    /// Raw persisted value, if any.
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
    fn prefers_dark(&self) -> bool;
    /// Put exactly one mode marker on the document root.
    fn mark_root(&self, theme: Theme);
}

/// Host used where there is no browser, e.g. while pre-rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl DetachedHost {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeHost for DetachedHost {
    fn load(&self) -> Option<String> {
        None
    }

    fn store(&self, _value: &str) {}

    fn prefers_dark(&self) -> bool {
        false
    }

    fn mark_root(&self, _theme: Theme) {}
}

/// The session's display mode.
///
/// Starts uninitialized so that pre-rendered and hydrated markup agree; the
/// real value is resolved by [`ThemePreference::initialize`] once a live
/// platform is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    mode: Option<Theme>,
}

impl ThemePreference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.mode.is_some()
    }

    /// Current mode; `Light` until initialized.
    pub fn get(&self) -> Theme {
        self.mode.unwrap_or_default()
    }

    /// Resolve the mode from storage, falling back to the platform
    /// preference. Only the first call has any effect.
    pub fn initialize(&mut self, host: &impl ThemeHost) -> Theme {
        if let Some(mode) = self.mode {
            return mode;
        }
        let persisted = host.load().and_then(|raw| match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::debug!("ignoring persisted value: {e}");
                None
            }
        });
        let mode = persisted.unwrap_or_else(|| {
            if host.prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });
        log::debug!("theme initialized to {mode}");
        host.mark_root(mode);
        self.mode = Some(mode);
        mode
    }

    /// Flip the mode, persist it and re-mark the root.
    pub fn toggle(&mut self, host: &impl ThemeHost) -> Theme {
        let next = self.get().toggled();
        self.mode = Some(next);
        host.store(next.marker());
        host.mark_root(next);
        next
    }
}
