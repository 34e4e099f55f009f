//! foliosh - Interactive terminal for the Folio portfolio filesystem
//!
//! This crate provides:
//! - A session ([`Terminal`]) holding the current directory, output log and input history
//! - A small fixed set of shell-like builtins (`ls`, `cd`, `cat`, `neofetch`, ...)
//! - Single-candidate tab completion for command names and paths
//! - Structured [`Output`] that hosts render as text, ANSI or JSON

pub mod completion;
pub mod error;
pub mod eval;
pub mod help;
pub mod history;
pub mod output;
pub mod terminal;

pub use error::{CommandError, CommandResult};
pub use history::{Direction, History};
pub use output::{KeyValueBlock, ListEntry, LogEntry, Output};
pub use terminal::{Identity, Submitted, Terminal, TerminalBuilder};
