//! Session state: current directory, output log and input history.

use folio_config::IdentityConfig;
use folio_core::{format_path, Filesystem};
use std::sync::Arc;

use crate::completion;
use crate::help;
use crate::history::{Direction, History, DEFAULT_MAX_ENTRIES};
use crate::output::{LogEntry, Output};

/// Names reported by `whoami`, `uname` and `neofetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
    pub os: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self::from(&IdentityConfig::default())
    }
}

impl From<&IdentityConfig> for Identity {
    fn from(config: &IdentityConfig) -> Self {
        Self {
            user: config.user.clone(),
            host: config.host.clone(),
            os: config.os.clone(),
        }
    }
}

/// What a call to [`Terminal::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted<'a> {
    /// Blank input, nothing recorded.
    Ignored,
    /// `clear` emptied the log.
    Cleared,
    Appended(&'a LogEntry),
}

pub struct Terminal {
    pub(crate) fs: Arc<Filesystem>,
    pub(crate) identity: Identity,
    pub(crate) cwd: Vec<String>,
    pub(crate) log: Vec<LogEntry>,
    pub(crate) history: History,
}

impl Terminal {
    #[must_use]
    pub fn new(fs: Arc<Filesystem>) -> Self {
        TerminalBuilder::new(fs).build()
    }

    #[must_use]
    pub fn builder(fs: Arc<Filesystem>) -> TerminalBuilder {
        TerminalBuilder::new(fs)
    }

    /// Run one line. Blank lines are ignored; everything else is recorded in
    /// the history, and every command but `clear` appends to the log.
    pub fn submit(&mut self, line: &str) -> Submitted<'_> {
        let line = line.trim();
        if line.is_empty() {
            return Submitted::Ignored;
        }

        self.history.push(line);
        tracing::trace!(line, cwd = %self.prompt(), "submit");

        match self.dispatch(line) {
            Some(output) => {
                self.log.push(LogEntry {
                    command: line.to_string(),
                    output,
                });
                self.log.last().map_or(Submitted::Ignored, Submitted::Appended)
            }
            None => Submitted::Cleared,
        }
    }

    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The current directory as `/a/b`, or `/` at the root.
    #[must_use]
    pub fn prompt(&self) -> String {
        format_path(&self.cwd)
    }

    #[must_use]
    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The line to put in the input field, or `None` to leave it.
    pub fn navigate_history(&mut self, direction: Direction) -> Option<String> {
        self.history.navigate(direction).map(str::to_string)
    }

    /// `partial` with the single unambiguous completion applied, or
    /// `partial` unchanged.
    #[must_use]
    pub fn request_completion(&self, partial: &str) -> String {
        completion::complete(partial, &self.fs, &self.cwd).unwrap_or_else(|| partial.to_string())
    }
}

pub struct TerminalBuilder {
    fs: Arc<Filesystem>,
    identity: Identity,
    history_limit: usize,
}

impl TerminalBuilder {
    #[must_use]
    pub fn new(fs: Arc<Filesystem>) -> Self {
        Self {
            fs,
            identity: Identity::default(),
            history_limit: DEFAULT_MAX_ENTRIES,
        }
    }

    #[must_use]
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    #[must_use]
    pub const fn history_limit(mut self, max_entries: usize) -> Self {
        self.history_limit = max_entries;
        self
    }

    /// A fresh session at `/`, with the command list already on screen.
    #[must_use]
    pub fn build(self) -> Terminal {
        Terminal {
            fs: self.fs,
            identity: self.identity,
            cwd: Vec::new(),
            log: vec![LogEntry {
                command: "help".to_string(),
                output: Output::KeyValue(help::help_block()),
            }],
            history: History::new(self.history_limit),
        }
    }
}
