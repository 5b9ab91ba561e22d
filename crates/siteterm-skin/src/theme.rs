//! Light/dark theme with a persisted preference.

use siteterm_platform::PreferenceStore;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

/// Stored value older versions used for the light theme.
const LEGACY_LIGHT: &str = "light";

/// The two site themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark, green-on-black, with the rain animation.
    Hacker,
    /// Light, plain, no animation.
    Professional,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hacker => "hacker",
            Self::Professional => "professional",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Self::Hacker => Self::Professional,
            Self::Professional => Self::Hacker,
        }
    }
}

/// Pick the starting theme.
///
/// A stored choice wins (the legacy `light` value maps to professional);
/// otherwise the system light preference selects professional, and the
/// default is hacker.
pub fn resolve_initial(stored: Option<&str>, prefers_light: bool) -> Theme {
    match stored {
        Some(v) if v == Theme::Professional.as_str() || v == LEGACY_LIGHT => Theme::Professional,
        Some(v) if v == Theme::Hacker.as_str() => Theme::Hacker,
        _ if prefers_light => Theme::Professional,
        _ => Theme::Hacker,
    }
}

/// The theme button and the state behind it.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    theme: Theme,
}

impl ThemeToggle {
    /// Restore the theme from `store`.
    ///
    /// Storage is best-effort: an unreadable store counts as "nothing
    /// stored" and never surfaces to the visitor.
    pub fn load(store: &dyn PreferenceStore, prefers_light: bool) -> Self {
        let stored = store.get(THEME_KEY).unwrap_or_else(|e| {
            log::debug!("Theme preference unreadable, ignoring: {e}");
            None
        });
        let theme = resolve_initial(stored.as_deref(), prefers_light);
        log::info!("Initial theme: {}", theme.as_str());
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and remember the choice.
    ///
    /// Storage is best-effort: a failed write leaves the new theme applied
    /// for this run and is otherwise ignored.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = store.set(THEME_KEY, self.theme.as_str()) {
            log::debug!("Theme preference not saved: {e}");
        }
        self.theme
    }

    /// Button caption: names the theme a click switches to.
    pub fn button_label(&self) -> &'static str {
        match self.theme {
            Theme::Professional => "Dark Mode",
            Theme::Hacker => "Light Mode",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self.theme {
            Theme::Professional => "Switch to dark mode",
            Theme::Hacker => "Switch to light mode",
        }
    }

    /// Pressed state of the toggle button.
    pub fn pressed(&self) -> bool {
        self.theme == Theme::Professional
    }
}
