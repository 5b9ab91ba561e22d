//! Skin system -- the site's visual personality.
//!
//! Two peer features share the page with the terminal: a light/dark theme
//! toggle whose choice survives reloads, and the decorative digital rain
//! drawn behind the dark theme.

pub mod effects;
pub mod theme;

pub use effects::{RAIN_GLYPHS, RainCell, RainEffect};
pub use theme::{THEME_KEY, Theme, ThemeToggle, resolve_initial};
