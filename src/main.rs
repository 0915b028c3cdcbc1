//! citetrack - INSPIRE-HEP citation tracker
//!
//! Fetches an author's papers from INSPIRE-HEP, prints the citation totals and
//! reports papers added, papers removed and citation counts changed since the
//! last saved snapshot.
//!
//! ## Usage
//!
//! ```bash
//! citetrack --author P.Motloch.2 --snapshot old_biblio.json
//! ```

use anyhow::{Context, Result};
use citetrack::{
    config::{self, Config},
    confirm::{AutoConfirm, PromptConfirm},
    inspire::InspireClient,
    snapshot::SnapshotStore,
    tracker::{RunOutcome, Tracker},
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Report changes in an author's INSPIRE-HEP citations since the last snapshot
#[derive(Parser)]
#[command(name = "citetrack")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Author BAI (e.g., P.Motloch.2)
    #[arg(long, default_value = config::DEFAULT_AUTHOR)]
    author: String,

    /// Maximum number of papers requested from INSPIRE-HEP
    #[arg(long, default_value_t = config::DEFAULT_MAX_PAPERS)]
    max_papers: usize,

    /// Shorten paper titles to this many characters
    #[arg(long, default_value_t = config::DEFAULT_TITLE_LENGTH)]
    title_length: usize,

    /// Snapshot file
    #[arg(short, long, default_value = config::DEFAULT_SNAPSHOT_FILE)]
    snapshot: PathBuf,

    /// Save the snapshot without asking
    #[arg(short, long)]
    yes: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            author: self.author,
            max_papers: self.max_papers,
            title_length: self.title_length,
            need_write_confirm: config::DEFAULT_NEED_WRITE_CONFIRM && !self.yes,
            snapshot_path: self.snapshot,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    config.validate()?;

    let outcome = run(&config).await?;
    info!(outcome = ?outcome, "Run complete");
    Ok(())
}

async fn run(config: &Config) -> Result<RunOutcome> {
    let client = InspireClient::new()?;
    let current = client
        .fetch_author(&config.author, config.max_papers, config.title_length)
        .await
        .with_context(|| format!("Failed to fetch papers for {}", config.author))?;

    let store = SnapshotStore::new(&config.snapshot_path);
    let mut stdout = std::io::stdout();

    let result = if config.need_write_confirm {
        Tracker::new(&store, PromptConfirm::stdio()).run(&current, &mut stdout)
    } else {
        Tracker::new(&store, AutoConfirm).run(&current, &mut stdout)
    };

    result.with_context(|| format!("Snapshot comparison failed ({:?})", store.path()))
}
