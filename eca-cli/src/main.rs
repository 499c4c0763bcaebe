use anyhow::{Context, Result};
use clap::Parser;
use eca::{Config, Symbols};
use std::{io, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Evolves an elementary cellular automaton and prints every generation.
#[derive(Parser, Debug)]
#[command(name = "eca", version)]
struct Args {
    /// Setup file: rule number, "<dead> <alive>" symbols, initial row.
    /// Defaults to a single live cell under rule 30.
    input: Option<PathBuf>,

    /// Number of generations to compute after the initial one.
    #[arg(short = 'n', long, default_value_t = 16, allow_negative_numbers = true)]
    steps: i64,

    /// Write the evolution here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Symbol for dead cells, overriding the setup file.
    #[arg(long)]
    dead: Option<char>,

    /// Symbol for live cells, overriding the setup file.
    #[arg(long)]
    alive: Option<char>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.input {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to read setup from {}", path.display()))?,
        None => include_str!("../../patterns/rule30.txt").parse()?,
    };
    let symbols = Symbols::new(
        args.dead.unwrap_or(config.symbols.dead),
        args.alive.unwrap_or(config.symbols.alive),
    );
    info!(
        rule = %config.rule,
        width = config.initial.width(),
        steps = args.steps,
        "setup loaded"
    );

    let now = Instant::now();
    let mut automaton = config.automaton();
    automaton.advance(args.steps);
    info!(
        generations = automaton.total_steps() + 1,
        population = automaton.current().population(),
        elapsed = ?now.elapsed(),
        "evolution finished"
    );
    if let Some(cycle) = automaton.cycle() {
        info!(start = cycle.start, period = cycle.period, "evolution is periodic");
    }

    match &args.output {
        Some(path) => automaton
            .save_evolution(path, symbols)
            .with_context(|| format!("failed to write evolution to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            automaton.write_evolution(stdout.lock(), symbols)?;
            println!();
        }
    }

    Ok(())
}
