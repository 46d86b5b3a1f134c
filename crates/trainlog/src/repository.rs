//! In-memory collection of train records.
//!
//! The collection is kept in non-decreasing order of departure time by
//! [`TrainCollection::insert_sorted`]. Records sharing a departure time keep
//! the order in which they were added.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::TrainRecord;

/// Outcome of [`TrainCollection::insert_sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The record was inserted at `position`.
    Added {
        /// Zero-based index of the new record.
        position: usize,
    },
    /// An identical record already exists; nothing changed.
    Duplicate,
}

impl Insertion {
    /// Whether the collection was modified.
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// An ordered sequence of train records, stored as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainCollection {
    records: Vec<TrainRecord>,
}

impl TrainCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` keeping the collection sorted by departure time.
    ///
    /// A record equal to one already present is rejected. Among records with
    /// the same departure time the new one goes last.
    pub fn insert_sorted(&mut self, record: TrainRecord) -> Insertion {
        if self.records.contains(&record) {
            debug!(
                "Skipping duplicate train {} at {}",
                record.number_train, record.time_departure
            );
            return Insertion::Duplicate;
        }

        let position = self
            .records
            .partition_point(|existing| existing.time_departure <= record.time_departure);
        debug!(
            "Inserting train {} at position {}",
            record.number_train, position
        );
        self.records.insert(position, record);
        Insertion::Added { position }
    }

    /// All records going to `destination`, in collection order.
    ///
    /// The comparison ignores case. No match yields an empty vector.
    #[must_use]
    pub fn filter_by_destination(&self, destination: &str) -> Vec<&TrainRecord> {
        self.records
            .iter()
            .filter(|record| record.goes_to(destination))
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrainRecord> {
        self.records.iter()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[TrainRecord] {
        &self.records
    }
}

impl From<Vec<TrainRecord>> for TrainCollection {
    fn from(records: Vec<TrainRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a TrainCollection {
    type Item = &'a TrainRecord;
    type IntoIter = std::slice::Iter<'a, TrainRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
