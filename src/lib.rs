//! # citetrack
//!
//! Tracks an author's citations on INSPIRE-HEP and reports what changed
//! since the last saved snapshot.
//!
//! ## Modules
//!
//! - [`inspire`] - INSPIRE-HEP literature API client
//! - [`bibliography`] - Paper records and citation totals
//! - [`diff`] - Snapshot comparison and change lines
//! - [`snapshot`] - Snapshot persistence
//! - [`confirm`] - Save confirmation prompt
//! - [`tracker`] - One tracking run
//! - [`config`] - Run configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use citetrack::{confirm::AutoConfirm, inspire::InspireClient, snapshot::SnapshotStore, tracker::Tracker};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let current = InspireClient::new()?.fetch_author("P.Motloch.2", 1000, 50).await?;
//!     let store = SnapshotStore::new("old_biblio.json");
//!     Tracker::new(&store, AutoConfirm).run(&current, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod bibliography;
pub mod config;
pub mod confirm;
pub mod diff;
pub mod error;
pub mod inspire;
pub mod snapshot;
pub mod tracker;

pub use error::{CitetrackError, Result};
