//! Site configuration loaded from TOML.
//!
//! Every field has a default, so an empty or missing file yields a working
//! configuration. Page destinations are the only thing that changes where
//! `cd` leads; the set of sections itself is fixed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::page::Page;

/// Top-level configuration (`siteterm.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prompt shown before the pending input.
    pub prompt: String,
    /// Placeholder shown while the input is empty.
    pub placeholder: String,
    /// Hint line rendered under the prompt.
    pub helper_text: String,
    /// Section name -> destination identifier.
    pub pages: BTreeMap<String, String>,
    /// Delay between the fade-out and the page transition.
    pub navigation_delay_ms: u64,
    /// Clock refresh period.
    pub clock_interval_ms: u64,
    /// Rain animation frame period.
    pub rain_interval_ms: u64,
    /// Disable the rain animation entirely.
    pub reduced_motion: bool,
    /// System-level light color scheme preference.
    pub prefers_light: bool,
    /// Where the theme preference is persisted.
    pub preferences_path: PathBuf,
    /// Where log output goes (the UI owns the screen).
    pub log_file: PathBuf,
    /// Output lines kept in the scrollback pane.
    pub max_output_lines: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            prompt: "root@site:~$ ".to_string(),
            placeholder: "Type 'help'. Press TAB for autocomplete.".to_string(),
            helper_text: "[Hint: Type commands or use the navigation menu above]".to_string(),
            pages: Page::ALL
                .into_iter()
                .map(|p| (p.name().to_string(), p.default_destination().to_string()))
                .collect(),
            navigation_delay_ms: 280,
            clock_interval_ms: 1000,
            rain_interval_ms: 35,
            reduced_motion: false,
            prefers_light: false,
            preferences_path: PathBuf::from("siteterm-prefs.toml"),
            log_file: PathBuf::from("siteterm.log"),
            max_output_lines: 500,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::info!("No config at {} -- using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Destination identifier for a section.
    ///
    /// Sections missing from `pages` fall back to their default file.
    pub fn destination(&self, page: Page) -> &str {
        self.pages
            .get(page.name())
            .map_or(page.default_destination(), String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if let Some(unknown) = self.pages.keys().find(|k| Page::from_name(k).is_none()) {
            return Err(SiteError::Config(format!("unknown page '{unknown}'")));
        }
        if let Some((name, _)) = self.pages.iter().find(|(_, dest)| dest.trim().is_empty()) {
            return Err(SiteError::Config(format!("empty destination for '{name}'")));
        }
        if self.max_output_lines == 0 {
            return Err(SiteError::Config("max_output_lines must be > 0".into()));
        }
        Ok(())
    }
}
