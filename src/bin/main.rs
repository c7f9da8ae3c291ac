use anyhow::Context;
use chrono::Local;
use clap::Parser;
use crossterm::style::Stylize;
use prompt_core::config::Config;
use prompt_core::persistence::LocalBlobStore;
use prompt_core::runner::{run_once, RunOptions};
use prompt_core::trigger::TriggerEvent;
use prompt_core::PromptError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Appends practice prompts for rarely used Finnish noun forms to the
/// prompt document of the configured bucket.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Trigger event JSON file. A test event is used when omitted.
    #[arg(long)]
    event: Option<PathBuf>,

    /// Print the new section without writing the document.
    #[arg(long)]
    dry_run: bool,

    /// Seed for reproducible sampling.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let data_error = e
                .downcast_ref::<PromptError>()
                .map(PromptError::is_data_error)
                .unwrap_or(false);
            ExitCode::from(if data_error { 2 } else { 1 })
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let event = match &args.event {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading event file {}", path.display()))?;
            TriggerEvent::from_json(&json)?
        }
        None => TriggerEvent::test_event(),
    };

    let store = LocalBlobStore::new(&config.storage_root, &config.output_bucket);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options = RunOptions { dry_run: args.dry_run };

    let report = run_once(
        &config,
        &store,
        &event,
        options,
        Local::now().naive_local(),
        &mut rng,
    )?;

    let mut lines = report.section.text.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.bold().cyan());
    }
    for line in lines {
        println!("{}", line);
    }
    if !report.written {
        println!("{}", "(dry run, nothing written)".dim());
    }
    Ok(())
}
