use clap::Parser;
use folio_config::{FolioConfig, LogFormat, LoggingConfig, ShellConfig};
use folio_core::Filesystem;
use foliosh::{Direction, Identity, Output, Submitted, Terminal};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod completer;
mod format;

/// foliosh - Interactive terminal for the Folio portfolio filesystem
#[derive(Parser, Debug)]
#[command(name = "foliosh", version, about)]
struct Args {
    /// Execute command and exit (repeat for several)
    #[arg(short = 'c', value_name = "COMMAND")]
    command: Vec<String>,

    /// Config file (overrides the search paths)
    #[arg(long)]
    config: Option<String>,

    /// Print each log entry as a JSON line
    #[arg(long, requires = "command")]
    json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, config_error) = match &args.config {
        Some(path) => match folio_config::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (FolioConfig::default(), Some(e)),
        },
        None => match folio_config::load() {
            Ok(config) => (config, None),
            Err(e) => (FolioConfig::default(), Some(e)),
        },
    };

    init_logging(&config.logging, args.debug);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "failed to load config, using defaults");
    }

    if args.no_color || !config.shell.color {
        colored::control::set_override(false);
    }

    let terminal = Terminal::builder(Arc::new(Filesystem::portfolio()))
        .identity(Identity::from(&config.identity))
        .history_limit(config.shell.history.max_entries)
        .build();
    tracing::debug!(user = %terminal.identity().user, "session started");

    if args.command.is_empty() {
        run_repl(terminal, &config.shell)
    } else {
        run_commands(terminal, &args.command, args.json)
    }
}

fn init_logging(config: &LoggingConfig, debug: bool) {
    let filter = if debug {
        "debug".to_string()
    } else if config.filter.is_empty() {
        config.level.as_str().to_string()
    } else {
        config.filter.clone()
    };

    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match config.format {
        LogFormat::Pretty => registry.with(layer.pretty()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Compact => registry.with(layer.compact()).init(),
    }
}

fn run_commands(
    mut terminal: Terminal,
    commands: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for command in commands {
        if let Submitted::Appended(entry) = terminal.submit(command) {
            if json {
                println!("{}", serde_json::to_string(entry)?);
            } else {
                print_output(&entry.output);
            }
        }
    }
    Ok(())
}

fn print_output(output: &Output) {
    if !output.is_empty() {
        println!("{}", format::render(output));
    }
}

/// Fill `{user}`, `{host}` and `{cwd}` in the prompt template.
fn render_prompt(template: &str, terminal: &Terminal) -> String {
    let identity = terminal.identity();
    template
        .replace("{user}", &identity.user)
        .replace("{host}", &identity.host)
        .replace("{cwd}", &terminal.prompt())
}

fn run_repl(terminal: Terminal, shell_config: &ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    use completer::{lock, FolioHelper, HistoryKey};
    use rustyline::error::ReadlineError;
    use rustyline::history::DefaultHistory;
    use rustyline::{
        CompletionType, Config, Editor, EventHandler, KeyCode, KeyEvent, Modifiers,
    };

    // history lives in the session, rustyline's own list stays empty
    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();

    let terminal = Arc::new(Mutex::new(terminal));
    let mut rl: Editor<FolioHelper, DefaultHistory> = Editor::with_config(rl_config)?;
    rl.set_helper(Some(FolioHelper::new(Arc::clone(&terminal))));
    rl.bind_sequence(
        KeyEvent(KeyCode::Up, Modifiers::NONE),
        EventHandler::Conditional(Box::new(HistoryKey::new(
            Arc::clone(&terminal),
            Direction::Older,
        ))),
    );
    rl.bind_sequence(
        KeyEvent(KeyCode::Down, Modifiers::NONE),
        EventHandler::Conditional(Box::new(HistoryKey::new(
            Arc::clone(&terminal),
            Direction::Newer,
        ))),
    );

    println!("foliosh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' to quit, 'help' for help.");
    println!();
    if let Some(entry) = lock(&terminal).log().first() {
        print_output(&entry.output);
    }

    loop {
        let prompt = render_prompt(&shell_config.prompt, &lock(&terminal));

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }

                let mut session = lock(&terminal);
                match session.submit(&line) {
                    Submitted::Appended(entry) => print_output(&entry.output),
                    Submitted::Cleared => {
                        print!("\x1b[2J\x1b[H");
                        std::io::stdout().flush()?;
                    }
                    Submitted::Ignored => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                tracing::error!(error = ?err, "readline failed");
                break;
            }
        }
    }

    Ok(())
}
