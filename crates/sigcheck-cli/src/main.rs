mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sigcheck_core::{Gamedata, OutputFormat, Platform, Scanner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Settings;

#[derive(Parser)]
#[command(name = "sigcheck")]
#[command(about = "Check gamedata signatures against a binary module")]
struct Args {
    /// Binary module to scan
    #[arg(long, visible_alias = "binary")]
    dll: Option<PathBuf>,

    /// Gamedata file with the signatures
    #[arg(long)]
    gamedata: Option<PathBuf>,

    /// Only check signatures for this library [default: server]
    #[arg(long)]
    lib: Option<String>,

    /// Platform whose signatures are checked [default: windows]
    #[arg(long)]
    platform: Option<Platform>,

    /// Only print signatures that were not found
    #[arg(short, long)]
    quiet: bool,

    /// Skip malformed signatures instead of stopping the run
    #[arg(long)]
    keep_going: bool,

    /// Output format (text or json) [default: text]
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Optional TOML config file
    #[arg(short, long, default_value = "sigcheck.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Settings {
            binary: args.dll.clone(),
            gamedata: args.gamedata.clone(),
            library: args.lib.clone(),
            platform: args.platform,
            quiet: args.quiet.then_some(true),
            keep_going: args.keep_going.then_some(true),
            format: args.format,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the report
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("sigcheck={}", level).parse()?)
                .add_directive(format!("sigcheck_core={}", level).parse()?),
        )
        .init();

    let file_settings = Settings::load(&args.config)?;
    if file_settings.is_some() {
        info!("Loaded config from {:?}", args.config);
    }
    let run = file_settings
        .unwrap_or_default()
        .merge(Settings::from(&args))
        .resolve()?;

    let binary = fs::read(&run.binary)
        .with_context(|| format!("Failed to read binary {}", run.binary.display()))?;
    info!("Loaded {} ({} bytes)", run.binary.display(), binary.len());

    let gamedata = Gamedata::load(&run.gamedata)
        .with_context(|| format!("Failed to load gamedata {}", run.gamedata.display()))?;
    if gamedata.is_empty() {
        warn!("No signature entries in {}", run.gamedata.display());
    }

    let formatter = run.format.formatter(run.print_found);
    let report = Scanner::new(&binary, &run.options)
        .run_with(gamedata.entries(), |result| {
            if let Some(line) = formatter.format_result(result) {
                println!("{}", line);
            }
        })
        .context("Signature scan aborted")?;

    for skipped in &report.skipped {
        warn!("{} was skipped: {}", skipped.name, skipped.error);
    }

    Ok(())
}
