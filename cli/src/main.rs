mod formatter;
mod server;

use anyhow::{Context, Result};
use calculator::{reduce, CalculatorState, Event};
use clap::{Args, Parser, Subcommand};
use formatter::{Formatter, Step};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "A left-to-right keypad calculator.")]
#[command(
    long_about = "calc drives a keypad calculator from key presses or recorded events.\nExpressions are evaluated strictly left to right as entered: 2+3*4= is 20.\nThe CLI can also serve the reducer over HTTP so a web front end can thread its state through it."
)]
#[command(version)]
struct Cli {
    /// Log every dispatched and ignored event to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Press keys and show the resulting display
    ///
    /// Every character of every argument is one key press; whitespace is ignored.
    ///
    /// Keys:
    ///   0-9 .      digits
    ///   + - * / x  operators (x is multiply)
    ///   =          evaluate
    ///   c          clear
    ///   d <        delete last digit
    ///
    /// Examples:
    ///   calc run 12+3-4=        - prints 11
    ///   calc run 10 / 4 =       - prints 2.5
    ///   calc run --trace 7x6=   - shows the display after every key
    Run {
        /// Keys to press, in order
        #[arg(value_name = "KEYS", required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replay recorded events from a JSON file
    ///
    /// The file holds an array of events in action form, for example
    /// [{"type": "add-digit", "payload": {"digit": "1"}}, {"type": "evaluate"}].
    /// Use - to read from stdin.
    Replay {
        /// JSON file with the events to replay
        file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// Serves the reducer statelessly: clients send their current state with
    /// each event and store the state that comes back.
    /// API: POST /reduce with {state, event}, POST /replay with {state, events},
    /// POST /evaluate with {previous, current, operation}
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print the final state and display as JSON
    #[arg(long, conflicts_with = "raw")]
    json: bool,
    /// Output the current operand only (for piping to other tools)
    #[arg(short = 'r', long)]
    raw: bool,
    /// Show the display after every event
    #[arg(short = 't', long, conflicts_with_all = ["json", "raw"])]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Run { keys, output } => run_command(keys, output),
        Commands::Replay { file, output } => replay_command(file, output),
        Commands::Server { host, port } => server_command(host, *port),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "calculator=debug,calc=debug,tower_http=debug"
    } else {
        "calculator=info,calc=info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(keys: &[String], output: &OutputArgs) -> Result<()> {
    let mut events = Vec::new();
    for key_group in keys {
        let parsed = Event::parse_keys(key_group)
            .with_context(|| format!("Failed to read keys '{}'", key_group))?;
        events.extend(parsed);
    }

    debug!("Pressing {} key(s)", events.len());
    print_session(events, output)
}

fn replay_command(file: &Path, output: &OutputArgs) -> Result<()> {
    let contents = if file == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read events from stdin")?;
        buffer
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read events file {}", file.display()))?
    };

    let events: Vec<Event> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid events in {}", file.display()))?;

    debug!("Replaying {} event(s) from {}", events.len(), file.display());
    print_session(events, output)
}

/// Dispatch `events` from the initial state and print the outcome
fn print_session(events: Vec<Event>, output: &OutputArgs) -> Result<()> {
    let mut state = CalculatorState::new();
    let mut steps = Vec::with_capacity(events.len());

    for event in events {
        state = reduce(state, event);
        if output.trace {
            steps.push(Step {
                event,
                state: state.clone(),
            });
        }
    }

    let formatter = Formatter::default();
    if output.json {
        print!("{}", formatter.format_json(&state)?);
    } else if output.raw {
        print!("{}", formatter.format_raw(&state));
    } else if output.trace {
        print!("{}", formatter.format_trace(&steps));
    } else {
        print!("{}", formatter.format_display(&state));
    }

    Ok(())
}

fn server_command(host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        tracing::info!("Starting HTTP server");
        rt.block_on(server::http::start_server(host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
