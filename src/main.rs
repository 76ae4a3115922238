// src/main.rs

use anyhow::Result;
use clap::Parser;
use repogen::{ReleaseFeed, collect, repofile};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "repogen")]
#[command(author, version, about = "Generate package repository definitions from the MongoDB release feed", long_about = None)]
struct Cli {
    /// Path to the downloaded full.json release feed
    feed: PathBuf,

    /// Directory to write mongodb.repo, mongodb.list and versions.txt into
    /// (defaults to the system temporary directory)
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let out_dir = cli.out_dir.unwrap_or_else(std::env::temp_dir);

    info!("Loading release feed from {}", cli.feed.display());
    let feed = ReleaseFeed::load(&cli.feed)?;

    let summary = collect::scan(&feed)?;
    info!(
        "Current release branch: {} ({} package directories)",
        summary.current_branch,
        summary.package_dirs.len()
    );

    repofile::generate(&summary, &out_dir)?;
    Ok(())
}
