//! datagen-config - Configuration Checker
//!
//! Loads a job configuration, validates it and runs it through the logging
//! sink, so a configuration can be checked before any data is generated.
//! A configuration error is returned from `main`, so the process exits
//! with status 1 and prints it.

use clap::Parser;
use datagen_config::{load_config, JobSink, LoggingSink};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datagen-config", about = "Validate a data-generation job configuration")]
struct Args {
    /// JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    file: PathBuf,

    /// Accept entries without a 'database' field
    #[arg(long)]
    ignore_missing_db: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run(&args)?;

    Ok(())
}

/// Load, validate and dry-run the configuration. Returns the total document count.
fn run(args: &Args) -> anyhow::Result<u64> {
    let jobs = load_config(&args.file, args.ignore_missing_db)?;
    println!("✓ Loaded {} collection(s) from {}", jobs.len(), args.file.display());

    let mut sink = LoggingSink::new();
    sink.submit_all(&jobs)?;

    for job in &jobs {
        println!("  - {}: {} documents", job.namespace(), job.count);
    }
    println!("Total: {} documents", sink.documents());

    Ok(sink.documents())
}
