//! Error types for siteterm.

use std::io;

/// Errors produced by the siteterm framework.
///
/// These cover configuration, platform and storage failures. Mistakes a
/// visitor makes at the prompt are not errors at this level; the terminal
/// reports them as styled output lines.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SiteError>;
