//! Command dispatch
//!
//! A line is split on whitespace (no quoting, no escapes), the first word is
//! lowercased and looked up among the builtins. Handlers return
//! `CommandResult<Output>`; failures become the literal error line.

use crate::error::{CommandError, CommandResult};
use crate::output::Output;
use crate::terminal::Terminal;

mod builtins_fs;
mod builtins_info;

pub use builtins_info::{format_date, neofetch_block, NeofetchStats, LOGO};

impl Terminal {
    /// Run `line` and return its output, or `None` for `clear`, which empties
    /// the log instead of adding to it.
    pub(crate) fn dispatch(&mut self, line: &str) -> Option<Output> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Some(Output::empty());
        };
        let name = first.to_lowercase();
        let args: Vec<&str> = words.collect();

        if name == "clear" {
            self.log.clear();
            return None;
        }

        let result = self.execute_builtin(&name, &args);
        Some(result.unwrap_or_else(|e| {
            tracing::debug!(command = %name, error = ?e, "command failed");
            Output::Text(e.to_string())
        }))
    }

    fn execute_builtin(&mut self, name: &str, args: &[&str]) -> CommandResult<Output> {
        if let Some(result) = self.try_execute_fs_builtin(name, args) {
            return result;
        }

        if let Some(result) = self.try_execute_info_builtin(name, args) {
            return result;
        }

        Err(CommandError::unknown_command(name))
    }
}
