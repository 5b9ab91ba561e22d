//! Platform service traits and desktop implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use siteterm_types::error::{Result, SiteError};

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current local date and time.
pub trait ClockService {
    /// Current wall-clock time with its UTC offset.
    fn now(&self) -> Result<DateTime<FixedOffset>>;
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Performs full page transitions.
///
/// Callers never observe completion: a scheduled navigation is
/// fire-and-forget and cannot be cancelled.
pub trait Navigator {
    /// Start the fade-out transition on the current page.
    fn fade_out(&mut self);

    /// Navigate to `destination` once `delay` has elapsed.
    fn schedule(&mut self, destination: &str, delay: Duration);
}

// ---------------------------------------------------------------------------
// Preference storage
// ---------------------------------------------------------------------------

/// Small key/value store for user preferences.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, toml::to_string(&table)?)?;
        log::debug!("Stored preference {key}={value} in {}", self.path.display());
        Ok(())
    }
}

/// In-memory preferences, optionally simulating unavailable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails, like storage in a private window.
    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(SiteError::Storage("storage unavailable".into()));
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation for desktop hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl ClockService for DesktopPlatform {
    fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(Local::now().fixed_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("siteterm-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn desktop_clock_is_close_to_now() {
        let now = DesktopPlatform::new().now().unwrap();
        let drift = (Local::now().fixed_offset() - now).num_seconds().abs();
        assert!(drift < 5);
    }

    #[test]
    fn memory_store_set_then_get() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "hacker").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("hacker"));
        store.set("theme", "professional").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("professional"));
    }

    #[test]
    fn unavailable_store_fails_both_ways() {
        let mut store = MemoryPreferenceStore::unavailable();
        assert!(matches!(store.get("theme"), Err(SiteError::Storage(_))));
        assert!(matches!(store.set("theme", "x"), Err(SiteError::Storage(_))));
    }

    #[test]
    fn file_store_missing_file_reads_none() {
        let store = FilePreferenceStore::new(temp_path("missing"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_path("persist");
        let _ = std::fs::remove_file(&path);
        {
            let mut store = FilePreferenceStore::new(&path);
            store.set("theme", "professional").unwrap();
            store.set("other", "1").unwrap();
        }
        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("professional"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("1"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_store_corrupt_file_is_error() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "theme = [").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.get("theme"), Err(SiteError::TomlParse(_))));
        let _ = std::fs::remove_file(&path);
    }
}
