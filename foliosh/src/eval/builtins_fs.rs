use folio_core::{format_path, FsError};

use crate::error::{CommandError, CommandResult};
use crate::output::{ListEntry, Output};
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn try_execute_fs_builtin(
        &mut self,
        name: &str,
        args: &[&str],
    ) -> Option<CommandResult<Output>> {
        match name {
            "ls" | "cd" | "pwd" | "cat" => Some(self.dispatch_fs_builtin(name, args)),
            _ => None,
        }
    }

    fn dispatch_fs_builtin(&mut self, name: &str, args: &[&str]) -> CommandResult<Output> {
        match name {
            "pwd" => Ok(self.cmd_pwd()),
            "cd" => self.cmd_cd(args),
            "ls" => self.cmd_ls(args),
            "cat" => self.cmd_cat(args),
            _ => unreachable!(),
        }
    }

    fn cmd_pwd(&self) -> Output {
        Output::Text(format_path(&self.cwd))
    }

    fn cmd_cd(&mut self, args: &[&str]) -> CommandResult<Output> {
        match args.first().copied() {
            None | Some("~" | "/") => self.cwd.clear(),
            Some("..") => {
                self.cwd.pop();
            }
            Some(path) => {
                let cd_error = |source| CommandError::Path {
                    command: "cd",
                    path: path.to_string(),
                    source,
                };
                let resolution = self.fs.resolve(path, &self.cwd).map_err(cd_error)?;
                if !resolution.node.is_dir() {
                    return Err(cd_error(FsError::not_a_directory(format_path(
                        &resolution.segments,
                    ))));
                }
                tracing::debug!(from = %format_path(&self.cwd), to = %format_path(&resolution.segments), "cd");
                self.cwd = resolution.segments;
            }
        }
        Ok(Output::empty())
    }

    fn cmd_ls(&self, args: &[&str]) -> CommandResult<Output> {
        let path = args.first().copied().unwrap_or("");
        let cannot_access = |source| CommandError::CannotAccess {
            path: path.to_string(),
            source,
        };

        let resolution = self.fs.resolve(path, &self.cwd).map_err(cannot_access)?;
        if !resolution.node.is_dir() {
            return Err(cannot_access(FsError::not_a_directory(format_path(
                &resolution.segments,
            ))));
        }

        Ok(Output::List(
            resolution.node.children().map(ListEntry::from).collect(),
        ))
    }

    fn cmd_cat(&self, args: &[&str]) -> CommandResult<Output> {
        let Some(&path) = args.first() else {
            return Err(CommandError::MissingOperand { command: "cat" });
        };

        let resolution = self
            .fs
            .resolve(path, &self.cwd)
            .map_err(|source| CommandError::Path {
                command: "cat",
                path: path.to_string(),
                source,
            })?;

        resolution.node.content().map_or_else(
            || {
                Err(CommandError::IsADirectory {
                    command: "cat",
                    path: path.to_string(),
                })
            },
            |content| Ok(Output::Preformatted(content.to_string())),
        )
    }
}
