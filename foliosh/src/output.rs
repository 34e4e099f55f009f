//! Render-ready command output.
//!
//! Commands produce data, hosts decide how it looks. `Display` gives the
//! plain-text rendering; `Serialize` gives a tagged JSON shape for hosts
//! that draw their own widgets.

use folio_core::{FsNode, NodeKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Output {
    Text(String),
    List(Vec<ListEntry>),
    KeyValue(KeyValueBlock),
    Preformatted(String),
}

impl Output {
    /// What a successful `cd` produces.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Preformatted(s) => s.is_empty(),
            Self::List(entries) => entries.is_empty(),
            Self::KeyValue(block) => block.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl ListEntry {
    /// Directories get a trailing `/`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            NodeKind::Directory => format!("{}/", self.name),
            NodeKind::File => self.name.clone(),
        }
    }
}

impl From<&FsNode> for ListEntry {
    fn from(node: &FsNode) -> Self {
        Self {
            name: node.name().to_string(),
            kind: node.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValueBlock {
    pub title: Option<String>,
    pub logo: Option<String>,
    pub pairs: Vec<(String, String)>,
    pub separator: String,
    pub footer: Option<String>,
}

impl Default for KeyValueBlock {
    fn default() -> Self {
        Self {
            title: None,
            logo: None,
            pairs: Vec::new(),
            separator: ": ".to_string(),
            footer: None,
        }
    }
}

impl KeyValueBlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.logo.is_none() && self.pairs.is_empty() && self.footer.is_none()
    }
}

/// One submitted line and what it printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub command: String,
    pub output: Output,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Preformatted(s) => f.write_str(s),
            Self::List(entries) => {
                let names: Vec<String> = entries.iter().map(ListEntry::display_name).collect();
                f.write_str(&names.join("  "))
            }
            Self::KeyValue(block) => fmt::Display::fmt(block, f),
        }
    }
}

impl fmt::Display for KeyValueBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        if let Some(logo) = &self.logo {
            lines.extend(logo.lines().map(str::to_string));
            lines.push(String::new());
        }
        let indent = if self.title.is_some() { "  " } else { "" };
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for (key, value) in &self.pairs {
            lines.push(format!("{indent}{key}{}{value}", self.separator));
        }
        if let Some(footer) = &self.footer {
            lines.push(String::new());
            lines.push(footer.clone());
        }
        f.write_str(&lines.join("\n"))
    }
}
