//! Word List Generator
//!
//! Regenerates the app's word list: fetches the frequency list and the
//! blacklists, filters, and writes the generated Swift file.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate with the built-in sources and output path
//! ./target/release/gen_words
//!
//! # Use a JSON config and see what would change without writing
//! ./target/release/gen_words --config curator.json --dry-run
//!
//! # Ignore the local blacklist store
//! ./target/release/gen_words --no-store
//! ```
//!
//! `RUST_LOG` takes precedence over `--log-level`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use curator_core::{CurateError, CuratorConfig, Pipeline};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gen_words", about = "Generate the curated word list")]
struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the artifact path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Use this blacklist store instead of the configured one
    #[arg(long, conflicts_with = "no_store")]
    store: Option<PathBuf>,

    /// Do not read any local blacklist store
    #[arg(long)]
    no_store: bool,

    /// Run everything except writing the artifact
    #[arg(long)]
    dry_run: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

fn load_config(cli: &Cli) -> Result<CuratorConfig, CurateError> {
    let mut config = match &cli.config {
        Some(path) => CuratorConfig::from_file(path)?,
        None => CuratorConfig::default(),
    };

    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(store) = &cli.store {
        config.set_store(store);
        config.optional_store_missing_ok = false;
    }
    if cli.no_store {
        config.clear_store();
    }
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli).map_err(with_stage)?;
    let pipeline = Pipeline::new(config).dry_run(cli.dry_run);

    println!("Fetching word lists...");
    let summary = pipeline.run().map_err(with_stage)?;

    println!(
        "Blacklist: {} entries from {} source(s)",
        summary.blacklist_entries, summary.blacklist_sources
    );
    println!(
        "Words: {} kept of {} ({} too short, {} blacklisted)",
        summary.stats.kept, summary.stats.seen, summary.stats.too_short, summary.stats.blacklisted
    );
    match &summary.output {
        Some(path) => println!("Wrote {}", path.display()),
        None => println!("Dry run, nothing written"),
    }
    println!("Done.");
    Ok(())
}

fn with_stage(err: CurateError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(format!("{stage} stage failed"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match run(&cli).context("word list generation aborted") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
