use crate::output::KeyValueBlock;

pub struct CommandHelp {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Every builtin, in the order `help` lists them.
pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "help",
        summary: "Show available commands",
    },
    CommandHelp {
        name: "about",
        summary: "Learn about me",
    },
    CommandHelp {
        name: "skills",
        summary: "View my technical skills",
    },
    CommandHelp {
        name: "projects",
        summary: "List my projects",
    },
    CommandHelp {
        name: "contact",
        summary: "Get my contact information",
    },
    CommandHelp {
        name: "clear",
        summary: "Clear the terminal",
    },
    CommandHelp {
        name: "ls",
        summary: "List directory contents",
    },
    CommandHelp {
        name: "cd",
        summary: "Change directory",
    },
    CommandHelp {
        name: "pwd",
        summary: "Print working directory",
    },
    CommandHelp {
        name: "cat",
        summary: "Display file contents",
    },
    CommandHelp {
        name: "date",
        summary: "Display current date and time",
    },
    CommandHelp {
        name: "whoami",
        summary: "Display current user",
    },
    CommandHelp {
        name: "echo",
        summary: "Display a message",
    },
    CommandHelp {
        name: "uname",
        summary: "Display system information",
    },
    CommandHelp {
        name: "neofetch",
        summary: "Display system info with logo",
    },
];

pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

/// The block printed by `help` and seeded into every new session.
#[must_use]
pub fn help_block() -> KeyValueBlock {
    COMMANDS.iter().fold(
        KeyValueBlock::new()
            .title("Available commands:")
            .separator(" - "),
        |block, cmd| block.pair(cmd.name, cmd.summary),
    )
}
