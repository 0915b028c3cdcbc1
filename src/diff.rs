//! Snapshot comparison.
//!
//! Compares the current bibliography against the saved one by id:
//!
//! - `removed` - ids only in the snapshot
//! - `added` - ids only in the current fetch
//! - `changed` - ids in both whose citation count moved
//!
//! Lines are reported in that group order: removed, added, then changed.
//! Within a group papers are ordered by ascending id.

use crate::bibliography::{Bibliography, PaperRecord};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Citation count movement of a paper present in both bibliographies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationChange {
    pub id: u64,
    /// Title from the current bibliography
    pub title: String,
    pub previous: u64,
    pub current: u64,
}

impl CitationChange {
    /// Signed difference `current - previous`; exact for any pair of `u64` counts
    pub fn delta(&self) -> i128 {
        i128::from(self.current) - i128::from(self.previous)
    }
}

/// Result of comparing two bibliographies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub removed: Vec<PaperRecord>,
    pub added: Vec<PaperRecord>,
    pub changed: Vec<CitationChange>,
}

/// Outcome of [`compare`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// No snapshot to compare against; the current bibliography becomes the baseline
    NoBaseline,
    Compared(SnapshotDiff),
}

/// A single human-readable change report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLine {
    Removed { title: String, citations: u64 },
    Added { title: String, citations: u64 },
    Delta { title: String, delta: i128 },
}

impl fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeLine::Removed { title, citations } => write!(
                f,
                "Removed paper: '{}' with {} {}",
                title,
                citations,
                citation_noun(*citations)
            ),
            ChangeLine::Added { title, citations } => write!(
                f,
                "Added paper: '{}' with {} {}",
                title,
                citations,
                citation_noun(*citations)
            ),
            ChangeLine::Delta { title, delta } => match *delta {
                1 => write!(f, "1 new citation: '{}'", title),
                -1 => write!(f, "1 citation removed: '{}'", title),
                d if d > 1 => write!(f, "{} new citations: '{}'", d, title),
                d => write!(f, "{} citations removed: '{}'", d.unsigned_abs(), title),
            },
        }
    }
}

/// Id lookup; a repeated id resolves to its last record
fn index_by_id(biblio: &Bibliography) -> HashMap<u64, &PaperRecord> {
    biblio.records().iter().map(|r| (r.id, r)).collect()
}

fn citation_noun(count: u64) -> &'static str {
    if count == 1 {
        "citation"
    } else {
        "citations"
    }
}

impl SnapshotDiff {
    /// Compute the diff between a saved and a freshly fetched bibliography.
    pub fn between(previous: &Bibliography, current: &Bibliography) -> Self {
        let previous_by_id = index_by_id(previous);
        let current_by_id = index_by_id(current);

        let previous_ids: BTreeSet<u64> = previous_by_id.keys().copied().collect();
        let current_ids: BTreeSet<u64> = current_by_id.keys().copied().collect();

        let removed = previous_ids
            .difference(&current_ids)
            .filter_map(|id| previous_by_id.get(id).map(|r| (*r).clone()))
            .collect();

        let added = current_ids
            .difference(&previous_ids)
            .filter_map(|id| current_by_id.get(id).map(|r| (*r).clone()))
            .collect();

        let changed = current_ids
            .intersection(&previous_ids)
            .filter_map(|id| {
                let old = previous_by_id.get(id)?;
                let new = current_by_id.get(id)?;
                (old.citations != new.citations).then(|| CitationChange {
                    id: *id,
                    title: new.title.clone(),
                    previous: old.citations,
                    current: new.citations,
                })
            })
            .collect();

        Self {
            removed,
            added,
            changed,
        }
    }

    /// True when at least one change line would be reported
    pub fn has_changes(&self) -> bool {
        !(self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty())
    }

    /// Change lines in report order
    pub fn lines(&self) -> Vec<ChangeLine> {
        let removed = self.removed.iter().map(|p| ChangeLine::Removed {
            title: p.title.clone(),
            citations: p.citations,
        });
        let added = self.added.iter().map(|p| ChangeLine::Added {
            title: p.title.clone(),
            citations: p.citations,
        });
        let changed = self.changed.iter().map(|c| ChangeLine::Delta {
            title: c.title.clone(),
            delta: c.delta(),
        });

        removed.chain(added).chain(changed).collect()
    }
}

/// Compare the current bibliography against an optional snapshot.
pub fn compare(current: &Bibliography, previous: Option<&Bibliography>) -> Comparison {
    match previous {
        None => Comparison::NoBaseline,
        Some(previous) => Comparison::Compared(SnapshotDiff::between(previous, current)),
    }
}
