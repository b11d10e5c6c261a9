//! Flask sort terminal game.
//!
//! Loads a layout file and plays it interactively on stdin/stdout.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flask_sort::core::{GameConfig, DEFAULT_COMPLETE_COUNT, DEFAULT_FLASK_CAPACITY};
use flask_sort::game::Session;
use flask_sort::layout::parse_layout;
use flask_sort::terminal::{BoardRenderer, Outcome, Prompt};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "flask-sort")]
#[command(about = "Pour chemicals between flasks until each holds a single kind")]
struct Args {
    /// Layout file: a `<flasks> <chemical types>` header, then one chemical
    /// or distribution directive per line
    #[arg(value_name = "LEVEL")]
    level: PathBuf,

    /// Units each flask can hold
    #[arg(long, default_value_t = DEFAULT_FLASK_CAPACITY)]
    capacity: usize,

    /// Identical units that complete a flask
    #[arg(long, default_value_t = DEFAULT_COMPLETE_COUNT)]
    complete_count: usize,

    /// No colours and no screen clearing
    #[arg(long)]
    plain: bool,

    /// Log to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_tracing(&args)?;

    let config = GameConfig::new(args.capacity, args.complete_count);
    if let Err(err) = config.validate() {
        bail!("invalid flask sizes: {err}");
    }

    let text = std::fs::read_to_string(&args.level)
        .with_context(|| format!("failed to read layout {}", args.level.display()))?;
    let layout = parse_layout(&text, &config)
        .with_context(|| format!("failed to load layout {}", args.level.display()))?;

    if !layout.unassigned.is_empty() {
        warn!(count = layout.unassigned.len(), "layout left chemicals undistributed");
    }
    info!(
        level = %args.level.display(),
        flasks = layout.total_flasks,
        chemical_types = layout.total_chemical_types,
        "starting game"
    );

    let mut session = Session::from_layout(layout);
    let renderer = if args.plain {
        BoardRenderer::plain()
    } else {
        BoardRenderer::default()
    };

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout(), renderer);
    match prompt.run(&mut session).context("terminal I/O failed")? {
        Outcome::Won { moves } => info!(moves, "game won"),
        Outcome::Quit => info!(moves = session.moves(), "game abandoned"),
    }

    Ok(())
}

/// Logs never go to stdout: the board is drawn there.
fn setup_tracing(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("FLASK_SORT_LOG").unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("flask_sort=debug")
        } else {
            EnvFilter::new("flask_sort=info")
        }
    });

    if let Some(path) = &args.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}
