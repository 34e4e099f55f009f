use colored::Colorize;
use folio_core::NodeKind;
use foliosh::{KeyValueBlock, ListEntry, Output};

/// ANSI rendering of an output. With colors turned off this is the same
/// text as `Output`'s `Display`.
pub fn render(output: &Output) -> String {
    match output {
        Output::Text(s) | Output::Preformatted(s) => s.clone(),
        Output::List(entries) => entries
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join("  "),
        Output::KeyValue(block) => render_block(block),
    }
}

fn render_entry(entry: &ListEntry) -> String {
    if entry.kind == NodeKind::Directory {
        entry.display_name().cyan().bold().to_string()
    } else {
        entry.display_name()
    }
}

fn render_block(block: &KeyValueBlock) -> String {
    let mut lines = Vec::new();
    if let Some(logo) = &block.logo {
        lines.extend(logo.lines().map(|l| l.cyan().to_string()));
        lines.push(String::new());
    }
    let indent = if block.title.is_some() { "  " } else { "" };
    if let Some(title) = &block.title {
        lines.push(title.bold().to_string());
    }
    for (key, value) in &block.pairs {
        lines.push(format!("{indent}{}{}{value}", key.green(), block.separator));
    }
    if let Some(footer) = &block.footer {
        lines.push(String::new());
        lines.push(footer.dimmed().to_string());
    }
    lines.join("\n")
}
