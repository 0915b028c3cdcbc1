//! One tracking run over an already fetched bibliography.
//!
//! Prints the citation totals, compares against the saved snapshot, prints
//! every change and saves the new snapshot when there is something to save.

use crate::bibliography::Bibliography;
use crate::confirm::{ConfirmSave, SAVE_QUESTION};
use crate::diff::{compare, Comparison};
use crate::error::Result;
use crate::snapshot::SnapshotStore;
use std::io::Write;
use tracing::info;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// First run: the fetched bibliography was saved as baseline
    BaselineSaved,
    /// First run, but saving was declined
    BaselineDeclined,
    /// Nothing changed since the snapshot; no prompt was shown
    Unchanged,
    ChangesSaved,
    ChangesDeclined,
}

/// Compares a fetched bibliography with the snapshot and saves it on change
pub struct Tracker<'a, C> {
    store: &'a SnapshotStore,
    confirm: C,
}

impl<'a, C: ConfirmSave> Tracker<'a, C> {
    pub fn new(store: &'a SnapshotStore, confirm: C) -> Self {
        Self { store, confirm }
    }

    /// Run the comparison, writing the report to `out`
    pub fn run<W: Write>(&mut self, current: &Bibliography, out: &mut W) -> Result<RunOutcome> {
        let totals = current.totals();
        writeln!(
            out,
            "\nTotal number of citations: {}; Excluding self cites: {}\n",
            totals.citations, totals.citations_excluding_self
        )?;

        let previous = self.store.load()?;

        let diff = match compare(current, previous.as_ref()) {
            Comparison::NoBaseline => {
                info!("No snapshot found, saving baseline");
                return Ok(if self.save(current, out)? {
                    RunOutcome::BaselineSaved
                } else {
                    RunOutcome::BaselineDeclined
                });
            }
            Comparison::Compared(diff) => diff,
        };

        for line in diff.lines() {
            writeln!(out, "{}", line)?;
        }

        if !diff.has_changes() {
            info!("No changes since last snapshot");
            return Ok(RunOutcome::Unchanged);
        }

        info!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            "Changes detected"
        );

        Ok(if self.save(current, out)? {
            RunOutcome::ChangesSaved
        } else {
            RunOutcome::ChangesDeclined
        })
    }

    /// Save `current` as the new snapshot if `confirm` agrees.
    /// Returns whether the snapshot was written.
    fn save<W: Write>(&mut self, current: &Bibliography, out: &mut W) -> Result<bool> {
        if !self.confirm.confirm(SAVE_QUESTION)? {
            writeln!(out, "Not saved.")?;
            return Ok(false);
        }

        self.store.save(current)?;
        writeln!(out, "Saved.")?;
        Ok(true)
    }
}
