//! Paper records and the bibliography they form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One paper with its citation counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// INSPIRE record id, unique within a bibliography
    pub id: u64,
    /// Title, possibly shortened; display only
    pub title: String,
    pub citations: u64,
    /// Citation count with self-citations excluded
    pub citations_excluding_self: u64,
}

impl PaperRecord {
    pub fn new(id: u64, title: impl Into<String>, citations: u64, citations_excluding_self: u64) -> Self {
        Self {
            id,
            title: title.into(),
            citations,
            citations_excluding_self,
        }
    }
}

/// Summed citation counts over a bibliography
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitationTotals {
    pub citations: u64,
    pub citations_excluding_self: u64,
}

/// Ordered collection of papers keyed by id.
///
/// Ids are expected to be unique. Duplicates are not checked; lookups then
/// resolve to the last record carrying the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bibliography {
    records: Vec<PaperRecord>,
}

impl Bibliography {
    pub fn new(records: Vec<PaperRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a paper by id
    pub fn get(&self, id: u64) -> Option<&PaperRecord> {
        self.records.iter().rev().find(|r| r.id == id)
    }

    /// Set of all paper ids, in ascending order
    pub fn ids(&self) -> BTreeSet<u64> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn totals(&self) -> CitationTotals {
        self.records
            .iter()
            .fold(CitationTotals::default(), |acc, r| CitationTotals {
                citations: acc.citations + r.citations,
                citations_excluding_self: acc.citations_excluding_self + r.citations_excluding_self,
            })
    }
}

impl FromIterator<PaperRecord> for Bibliography {
    fn from_iter<I: IntoIterator<Item = PaperRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
