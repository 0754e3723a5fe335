use polyring::Ring;
use serde::{Deserialize, Serialize};

use crate::record::PolygonRecord;

/// Grant statuses that mark a polygon as taken. Matching is exact on the
/// trimmed, lower-cased status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet(Vec<String>);

impl ExclusionSet {
    pub fn new<S: AsRef<str>>(statuses: impl IntoIterator<Item = S>) -> Self {
        let mut statuses: Vec<String> = statuses.into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .collect();
        statuses.dedup();
        Self(statuses)
    }

    /// True if `status` (trimmed, lower-cased) is in the set.
    pub fn contains(&self, status: &str) -> bool {
        let status = status.trim().to_lowercase();
        self.0.iter().any(|s| *s == status)
    }

    #[inline] pub fn statuses(&self) -> &[String] { &self.0 }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(["study", "granted", "cancelled", "area"])
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(statuses: Vec<String>) -> Self { Self::new(statuses) }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self { set.0 }
}

/// The ring of a record that passed the free-zone predicate.
/// `source` is the record's index in the input, kept for traceability.
#[derive(Debug, Clone, PartialEq)]
pub struct FreePolygon {
    pub source: usize,
    pub ring: Ring,
}

/// Unclaimed and unassigned: no mineral, and a status outside `excluded`.
#[inline]
pub fn is_free(record: &PolygonRecord, excluded: &ExclusionSet) -> bool {
    record.mineral().trim().is_empty() && !excluded.contains(record.grant_status())
}

/// Parse the rings of all free records, preserving input order.
pub fn free_polygons(records: &[PolygonRecord], excluded: &ExclusionSet) -> Vec<FreePolygon> {
    records.iter()
        .enumerate()
        .filter(|(_, record)| is_free(record, excluded))
        .map(|(source, record)| FreePolygon { source, ring: record.ring() })
        .collect()
}
