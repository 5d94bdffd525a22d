use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mod_version_checker::config::{self, CheckerConfig};
use mod_version_checker::logging::init_logging;
use mod_version_checker::report::{Summary, render_text};
use mod_version_checker::version::checker::check_all;
use mod_version_checker::version::fetchers::HttpFetcher;
use mod_version_checker::version::loader::{DescriptorLoader, DirectoryLoader};

#[derive(Parser)]
#[command(name = "mod-version-checker")]
#[command(version, about = "Checks installed mods for available updates")]
struct Cli {
    /// Directory containing installed mods
    #[arg(long)]
    mods_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_logging(&config::log_path(), &cli.log_level)?;

    let config = match &cli.config {
        Some(path) => CheckerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CheckerConfig::default(),
    };

    let mods_dir = cli
        .mods_dir
        .or_else(|| config.mods_dir.clone())
        .context("No mods directory given (use --mods-dir or modsDir in the config)")?;

    info!("Checking mods in {}", mods_dir.display());

    let loader = DirectoryLoader::new(mods_dir);
    let unit_ids = loader.unit_ids()?;
    let fetcher = HttpFetcher::new(&config.fetch)?;
    let stagger = Duration::from_millis(config.fetch.stagger_delay_ms);

    let run = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(check_all(&loader, &fetcher, unit_ids, stagger));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Summary::from(&run))?);
    } else {
        print!("{}", render_text(&run));
    }

    Ok(())
}
