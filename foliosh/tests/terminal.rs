//! End-to-end sessions driven through the public `Terminal` API.

use folio_core::{portfolio, Filesystem, FsNode};
use foliosh::{Direction, Output, Submitted, Terminal};
use std::sync::Arc;

fn terminal() -> Terminal {
    Terminal::new(Arc::new(Filesystem::portfolio()))
}

/// Submit `line` and return what it printed.
fn run(t: &mut Terminal, line: &str) -> Output {
    match t.submit(line) {
        Submitted::Appended(entry) => entry.output.clone(),
        other => panic!("{line:?} did not append: {other:?}"),
    }
}

fn text(t: &mut Terminal, line: &str) -> String {
    run(t, line).to_string()
}

#[test]
fn fresh_session_starts_at_root() {
    let t = terminal();
    assert_eq!(t.prompt(), "/");
    assert_eq!(t.log().len(), 1);
    assert_eq!(t.log()[0].command, "help");
    assert!(matches!(t.log()[0].output, Output::KeyValue(_)));
}

#[test]
fn browse_projects() {
    let mut t = terminal();
    assert_eq!(text(&mut t, "pwd"), "/");

    assert!(run(&mut t, "cd projects").is_empty());
    assert_eq!(t.prompt(), "/projects");

    assert_eq!(
        text(&mut t, "ls"),
        "ecommerce.txt  portfolio.txt  taskmanager.txt"
    );
    assert_eq!(
        run(&mut t, "cat ecommerce.txt"),
        Output::Preformatted(portfolio::ECOMMERCE.to_string())
    );

    assert!(run(&mut t, "cd ..").is_empty());
    assert_eq!(t.prompt(), "/");
}

#[test]
fn ls_lists_immediate_children() {
    let mut t = terminal();
    let Output::List(entries) = run(&mut t, "ls") else {
        panic!("ls should list");
    };
    let names: Vec<String> = entries.iter().map(|e| e.display_name()).collect();
    assert_eq!(
        names,
        ["about.txt", "contact.txt", "projects/", "resume/", "skills.txt"]
    );
}

/// Absolute paths of every directory in the tree, root first.
fn every_directory() -> Vec<String> {
    fn collect(node: &FsNode, at: &str, out: &mut Vec<String>) {
        out.push(if at.is_empty() { "/".to_string() } else { at.to_string() });
        for child in node.children().filter(|c| c.is_dir()) {
            collect(child, &format!("{at}/{}", child.name()), out);
        }
    }
    let fs = Filesystem::portfolio();
    let mut out = Vec::new();
    collect(fs.root(), "", &mut out);
    out
}

/// Paths that resolve from no directory: names absent everywhere, dressed up
/// with `.`, `..`, leading and repeated separators.
fn missing_paths() -> Vec<String> {
    let mut out = Vec::new();
    for name in ["missing", "nope.txt", "About.txt", "projects/missing", "resume/x/y"] {
        out.extend([
            name.to_string(),
            format!("./{name}"),
            format!("../{name}"),
            format!("/{name}"),
            format!("//{name}"),
            format!("{name}/"),
            format!("{name}/."),
            format!("../../{name}"),
            format!("././/{name}"),
        ]);
    }
    out
}

#[test]
fn failed_cd_leaves_cwd() {
    let dirs = every_directory();
    assert_eq!(dirs, ["/", "/projects", "/resume"]);

    let mut t = terminal();
    for dir in &dirs {
        run(&mut t, &format!("cd {dir}"));
        assert_eq!(&t.prompt(), dir);
        let log_len = t.log().len();

        for path in missing_paths() {
            assert_eq!(
                text(&mut t, &format!("cd {path}")),
                format!("cd: {path}: No such file or directory"),
                "from {dir}"
            );
            assert_eq!(&t.prompt(), dir, "cd {path} moved the session");
        }
        assert_eq!(t.log().len(), log_len + missing_paths().len());
    }
}

#[test]
fn missing_paths_are_quoted_verbatim() {
    let mut t = terminal();
    for dir in every_directory() {
        run(&mut t, &format!("cd {dir}"));
        for path in missing_paths() {
            assert_eq!(
                text(&mut t, &format!("cat {path}")),
                format!("cat: {path}: No such file or directory")
            );
            assert_eq!(
                text(&mut t, &format!("ls {path}")),
                format!("ls: cannot access '{path}': No such file or directory")
            );
        }
    }
}

#[test]
fn cd_parent_at_root() {
    let mut t = terminal();
    let before = t.log().len();
    assert!(run(&mut t, "cd ..").is_empty());
    assert_eq!(t.prompt(), "/");
    assert_eq!(t.log().len(), before + 1);
}

#[test]
fn cat_reports_the_given_argument() {
    let mut t = terminal();
    assert_eq!(
        text(&mut t, "cat ./resume/../projects"),
        "cat: ./resume/../projects: Is a directory"
    );
    assert_eq!(
        text(&mut t, "cat missing.txt"),
        "cat: missing.txt: No such file or directory"
    );
}

#[test]
fn unknown_commands() {
    let mut t = terminal();
    assert_eq!(
        text(&mut t, "foo"),
        "Command not found. Type 'help' for available commands."
    );
    assert_eq!(text(&mut t, "./foo"), "bash: ./foo: Permission denied");
    assert_eq!(
        text(&mut t, "usr/bin/foo"),
        "bash: usr/bin/foo: No such file or directory"
    );
}

#[test]
fn clear_empties_the_log() {
    let mut t = terminal();
    run(&mut t, "pwd");
    run(&mut t, "ls");
    assert_eq!(t.submit("clear"), Submitted::Cleared);
    assert!(t.log().is_empty());

    run(&mut t, "pwd");
    assert_eq!(t.log().len(), 1);
    assert_eq!(t.log()[0].command, "pwd");
}

#[test]
fn history_navigation() {
    let mut t = terminal();
    run(&mut t, "pwd");
    run(&mut t, "ls");

    assert_eq!(t.navigate_history(Direction::Older).as_deref(), Some("ls"));
    assert_eq!(t.navigate_history(Direction::Older).as_deref(), Some("pwd"));
    assert_eq!(t.navigate_history(Direction::Older), None);
    assert_eq!(t.navigate_history(Direction::Newer).as_deref(), Some("ls"));
    assert_eq!(t.navigate_history(Direction::Newer).as_deref(), Some(""));
    assert_eq!(t.navigate_history(Direction::Newer), None);
}

#[test]
fn history_records_failures_and_clear() {
    let mut t = terminal();
    run(&mut t, "cat nope");
    t.submit("clear");
    t.submit("   ");
    assert_eq!(t.history().entries().collect::<Vec<_>>(), ["clear", "cat nope"]);
}

#[test]
fn tab_completion() {
    let mut t = terminal();
    assert_eq!(t.request_completion("cd proj"), "cd projects/");
    assert_eq!(t.request_completion("wh"), "whoami");
    assert_eq!(t.request_completion("cat pro/eco"), "cat pro/eco");

    run(&mut t, "cd projects");
    assert_eq!(t.request_completion("cat task"), "cat taskmanager.txt");
    assert_eq!(t.request_completion("cat ../res"), "cat ../resume/");
}

#[test]
fn completion_then_submit() {
    let mut t = terminal();
    let line = t.request_completion("cat resume/exp");
    assert_eq!(
        run(&mut t, &line),
        Output::Preformatted(portfolio::EXPERIENCE.to_string())
    );
}

#[test]
fn log_entry_json_shape() {
    let mut t = terminal();
    let Submitted::Appended(entry) = t.submit("ls resume") else {
        panic!("ls should append");
    };
    let json = serde_json::to_value(entry).expect("serializable");
    assert_eq!(json["command"], "ls resume");
    assert_eq!(json["output"]["type"], "list");
    assert_eq!(json["output"]["data"][0]["name"], "education.txt");
    assert_eq!(json["output"]["data"][0]["kind"], "file");
}
