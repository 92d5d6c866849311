//! Record Collection
//!
//! Ordered, owned sequence of player records. Built once, read-only after.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::query;
use crate::roster::record::{PlayerId, PlayerRecord};

/// Roster errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Two records share an identifier.
    #[error("duplicate player id: {0}")]
    DuplicateId(PlayerId),
}

/// Ordered collection of player records.
///
/// There is no mutation API; queries see the records exactly as built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vec<PlayerRecord>,
}

impl RecordCollection {
    /// Create from records, keeping their order.
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, in construction order.
    pub fn get(&self, index: usize) -> Option<&PlayerRecord> {
        self.records.get(index)
    }

    /// Iterate records in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Check that no two records share an identifier.
    ///
    /// Queries do not require this; it is available to callers that want
    /// to reject ambiguous rosters up front.
    pub fn ensure_unique_ids(&self) -> Result<(), RosterError> {
        let mut seen = BTreeSet::new();
        for record in &self.records {
            if !seen.insert(record.id) {
                return Err(RosterError::DuplicateId(record.id));
            }
        }
        Ok(())
    }

    /// Lowest run total among records of `player_type`.
    pub fn lowest_runs(&self, player_type: &str) -> Option<i32> {
        query::lowest_runs(&self.records, player_type)
    }

    /// Ascending identifiers of records with `match_type`.
    pub fn find_by_match_type(&self, match_type: &str) -> Vec<PlayerId> {
        query::find_by_match_type(&self.records, match_type)
    }
}

impl From<Vec<PlayerRecord>> for RecordCollection {
    fn from(records: Vec<PlayerRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<PlayerRecord> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
