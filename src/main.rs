//! batteries-console - interactive demo binary
//!
//! Runs the dashboard console as a line-oriented REPL on stdin/stdout:
//! the seed transcript is printed on startup, each submitted line goes
//! through the interpreter, and newly appended scrollback lines are
//! rendered with ANSI styling.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use batteries_console::error::Result;
use batteries_console::{ansi, kubectl, ConfigLoader, ConsoleSession};

/// Parsed command line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Start with an empty scrollback
    no_seed: bool,
    /// Disable ANSI colors
    no_color: bool,
    /// Print usage and exit
    help: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--no-seed" => {
                    app_args.no_seed = true;
                }
                "--no-color" => {
                    app_args.no_color = true;
                }
                "--help" | "-h" => {
                    app_args.help = true;
                }
                other => {
                    return Err(format!("Unknown argument: {}", other).into());
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

fn print_usage() {
    println!("{} v{}", batteries_console::NAME, batteries_console::VERSION);
    println!("{}", batteries_console::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    batteries-console [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Load configuration from PATH");
    println!("    -d, --debug            Enable debug logging");
    println!("        --no-seed          Start with an empty scrollback");
    println!("        --no-color         Disable ANSI colors");
    println!("    -h, --help             Print this help");
    println!();
    println!("Type 'help' inside the console for available commands,");
    println!("'exit' or Ctrl-D to leave.");
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = match AppArgs::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if args.help {
        print_usage();
        return;
    }

    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &AppArgs) -> Result<()> {
    let mut config = match &args.config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if args.no_seed {
        config.console.seed_transcript = false;
    }
    if args.no_color {
        config.console.color = false;
    }

    let mut session = kubectl::demo_session(&config);
    let color = config.console.color;
    info!(session_id = %session.id(), "console session opened");

    let mut cursor = RenderCursor::default();
    flush_new_lines(&mut session, &mut cursor, color)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        session.submit(&line);
        flush_new_lines(&mut session, &mut cursor, color)?;
    }

    info!(session_id = %session.id(), "console session closed");
    Ok(())
}

/// Scrollback counters snapshotted after the last flush
#[derive(Debug, Default, Clone, Copy)]
struct RenderCursor {
    appended: u64,
    clears: u64,
}

/// Print lines appended since the last call; after a clear, wipe the
/// screen and start over. Progress is tracked against the buffer's
/// monotone counters rather than its length, which stops growing once
/// a scrollback cap is reached.
fn flush_new_lines(session: &mut ConsoleSession, cursor: &mut RenderCursor, color: bool) -> Result<()> {
    if !session.take_dirty() {
        return Ok(());
    }

    let appended = session.scrollback().total_appended();
    let clears = session.scrollback().clear_count();
    let snapshot = session.snapshot();

    let start = if clears != cursor.clears {
        if color {
            print!("\x1b[2J\x1b[H");
        }
        0
    } else {
        // Cap eviction can discard lines never shown, so the delta may
        // exceed what the buffer still holds
        let fresh = (appended - cursor.appended) as usize;
        snapshot.len().saturating_sub(fresh)
    };

    let mut stdout = io::stdout().lock();
    for line in &snapshot[start..] {
        writeln!(stdout, "{}", ansi::render_line(line, color))?;
    }
    stdout.flush()?;

    cursor.appended = appended;
    cursor.clears = clears;
    Ok(())
}
