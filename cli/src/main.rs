//! Command-line front end for the decay event generator
//!
//! Loads a configuration (file and/or flags), runs the generation loop,
//! and writes the event dataset as JSON Lines for the downstream analysis
//! step. Histogramming and plotting live entirely on the consumer side of
//! that dataset.

use anyhow::{Context, Result};
use clap::Parser;
use decay_generator_core_rs::{Generator, GeneratorConfig};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decay-gen")]
#[command(about = "Monte Carlo two-body decay event generator")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Generator configuration file (JSON); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of events to generate
    #[arg(short = 'n', long)]
    events: Option<usize>,

    /// RNG seed (0 = derive from system entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file for the dataset (JSON Lines). Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open config file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("cannot parse config file {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(events) = cli.events {
        config.event_count = events;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    let mut generator = Generator::new(config).context("configuration rejected")?;

    tracing::info!(
        seed = generator.seed(),
        events = generator.config().event_count,
        "generating events"
    );
    let log = generator.run().context("event generation failed")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            log.write_jsonl(BufWriter::new(file))
                .with_context(|| format!("cannot write dataset to {}", path.display()))?;
            tracing::info!(events = log.len(), output = %path.display(), "dataset written");
        }
        None => {
            log.write_jsonl(io::stdout().lock())
                .context("cannot write dataset to stdout")?;
        }
    }

    Ok(())
}
