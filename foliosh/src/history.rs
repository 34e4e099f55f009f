//! Submitted-line history with an arrow-key cursor.

use std::collections::VecDeque;

pub const DEFAULT_MAX_ENTRIES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow
    Older,
    /// Down arrow
    Newer,
}

/// Most recent line first. `cursor` is `None` while the user is not
/// browsing.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl History {
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            max_entries: max_entries.max(1),
        }
    }

    /// Record a submitted line and stop browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.max_entries);
        self.cursor = None;
    }

    /// Move the cursor. `None` means nothing changed and the input line
    /// should stay as it is; stepping newer past the most recent entry
    /// yields the empty line.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Older => {
                let next = self.cursor.map_or(0, |c| c + 1);
                if next >= self.entries.len() {
                    return None;
                }
                self.cursor = Some(next);
                self.entries.get(next).map(String::as_str)
            }
            Direction::Newer => match self.cursor? {
                0 => {
                    self.cursor = None;
                    Some("")
                }
                c => {
                    self.cursor = Some(c - 1);
                    self.entries.get(c - 1).map(String::as_str)
                }
            },
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
