//! Platform-agnostic key events.
//!
//! Every backend maps its native input to these variants. The terminal core
//! never sees raw platform input.

/// A single key press delivered to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Submit the pending line.
    Enter,
    /// Request autocomplete at the caret.
    Tab,
    /// Recall an older history entry.
    ArrowUp,
    /// Recall a newer history entry.
    ArrowDown,
    /// Move the caret one character left.
    ArrowLeft,
    /// Move the caret one character right.
    ArrowRight,
    /// Move the caret to the start of the line.
    Home,
    /// Move the caret to the end of the line.
    End,
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character under the caret.
    Delete,
    /// Ordinary text entry.
    Char(char),
    /// Flip between the dark and light themes.
    ToggleTheme,
    /// User asked to leave (window close, Ctrl-C).
    Quit,
}
