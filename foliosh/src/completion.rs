//! Tab completion.
//!
//! Only ever suggests one thing: a candidate is applied when it is the
//! single match for what was typed, otherwise the line is left alone.

use folio_core::Filesystem;

use crate::help;

/// Commands whose first argument is completed as a path.
pub const PATH_COMMANDS: &[&str] = &["cd", "ls", "cat"];

/// Complete `line` against the command list or, after a space, against the
/// children of the directory named by the last word. `None` when no single
/// completion applies.
#[must_use]
pub fn complete(line: &str, fs: &Filesystem, cwd: &[String]) -> Option<String> {
    if !line.contains(' ') {
        let typed = line.to_lowercase();
        return single(help::command_names().filter(|name| name.starts_with(&typed)))
            .map(str::to_string);
    }

    let mut words = line.split(' ');
    let command = words.next()?.to_lowercase();
    let fragment = words.next_back()?;
    if fragment.is_empty() || !PATH_COMMANDS.contains(&command.as_str()) {
        return None;
    }

    let (dir_part, prefix) = match fragment.rfind('/') {
        Some(i) => fragment.split_at(i + 1),
        None => ("", fragment),
    };

    // only the last segment is completed; an unfinished directory name
    // before it does not resolve and stops here
    let dir = fs.resolve(dir_part, cwd).ok()?;
    if !dir.node.is_dir() {
        return None;
    }

    let only = single(dir.node.children().filter(|c| c.name().starts_with(prefix)))?;
    let suffix = if only.is_dir() { "/" } else { "" };
    Some(format!("{command} {dir_part}{}{suffix}", only.name()))
}

fn single<T>(mut candidates: impl Iterator<Item = T>) -> Option<T> {
    let first = candidates.next()?;
    match candidates.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str, cwd: &[&str]) -> Option<String> {
        let fs = Filesystem::portfolio();
        let cwd: Vec<String> = cwd.iter().map(ToString::to_string).collect();
        complete(line, &fs, &cwd)
    }

    #[test]
    fn unique_command_prefix() {
        assert_eq!(run("neo", &[]).as_deref(), Some("neofetch"));
        assert_eq!(run("WH", &[]).as_deref(), Some("whoami"));
    }

    #[test]
    fn ambiguous_or_unknown_command_prefix() {
        // clear, cd, cat, contact
        assert_eq!(run("c", &[]), None);
        assert_eq!(run("", &[]), None);
        assert_eq!(run("zz", &[]), None);
    }

    #[test]
    fn directory_gets_trailing_separator() {
        assert_eq!(run("cd proj", &[]).as_deref(), Some("cd projects/"));
    }

    #[test]
    fn file_in_current_directory() {
        assert_eq!(
            run("cat eco", &["projects"]).as_deref(),
            Some("cat ecommerce.txt")
        );
    }

    #[test]
    fn nested_directory_part_is_kept() {
        assert_eq!(
            run("cat resume/edu", &[]).as_deref(),
            Some("cat resume/education.txt")
        );
        assert_eq!(
            run("ls ../res", &["projects"]).as_deref(),
            Some("ls ../resume/")
        );
        assert_eq!(
            run("cat /projects/task", &["resume"]).as_deref(),
            Some("cat /projects/taskmanager.txt")
        );
    }

    #[test]
    fn leading_separator_completes_from_root() {
        assert_eq!(run("cd /pro", &["resume"]).as_deref(), Some("cd /projects/"));
    }

    #[test]
    fn ambiguous_children_leave_line() {
        // experience.txt and education.txt
        assert_eq!(run("cat resume/e", &[]), None);
    }

    #[test]
    fn no_completion_beyond_single_segment() {
        assert_eq!(run("cat proj/eco", &[]), None);
    }

    #[test]
    fn only_path_commands_complete_paths() {
        assert_eq!(run("echo proj", &[]), None);
        assert_eq!(run("cd ", &[]), None);
        assert_eq!(run("cat about.txt/x", &[]), None);
    }

    #[test]
    fn rebuilt_line_keeps_only_command_and_path() {
        assert_eq!(run("ls -a proj", &[]).as_deref(), Some("ls projects/"));
    }
}
