//! Bounded, most-recent-first command history with cursor recall.

use std::collections::VecDeque;

/// Maximum number of history entries to retain.
pub const MAX_HISTORY: usize = 100;

/// Command history for one session.
///
/// Entry 0 is the most recent submission. The cursor is `None` while the
/// visitor is typing live, `Some(i)` while browsing entry `i`.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a submitted line to the front, evicting the oldest past the cap.
    ///
    /// Always stops browsing.
    pub fn record(&mut self, command: &str) {
        self.entries.push_front(command.to_string());
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_back();
        }
        self.cursor = None;
    }

    /// Step toward older entries.
    ///
    /// Returns `None` when there is nothing to recall, in which case the
    /// pending input stays as it is. Sticks at the oldest entry.
    pub fn recall_older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let next = self.cursor.map_or(0, |c| (c + 1).min(last));
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step toward newer entries.
    ///
    /// Stepping past the newest entry leaves browsing and yields `""`; the
    /// draft typed before browsing is not restored.
    pub fn recall_newer(&mut self) -> &str {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1).map_or("", String::as_str)
            },
            _ => {
                self.cursor = None;
                ""
            },
        }
    }

    /// Current browsing position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Snapshot of the entries, most recent first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
