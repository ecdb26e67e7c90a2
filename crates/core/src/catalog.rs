//! The item catalog: stimulus records grouped by sub-experiment label.

use std::collections::BTreeMap;

use crate::record::StimulusRecord;

/// Reserved label for the filler pool. Filler items are never
/// latin-squared; every filler record is always included in the output.
pub const FILLER_LABEL: &str = "Filler";

/// An ordered group of records sharing one sub-experiment label.
pub type Bucket = Vec<StimulusRecord>;

/// Mapping from sub-experiment label to its bucket.
///
/// Built once per run from the item source. Buckets preserve input order
/// until shuffled. Label iteration order is deterministic (sorted), so a
/// fixed RNG seed reproduces the exact same output list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    buckets: BTreeMap<String, Bucket>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its label's bucket, creating the bucket on
    /// first sight of the label.
    pub fn push(&mut self, record: StimulusRecord) {
        self.buckets
            .entry(record.label.clone())
            .or_default()
            .push(record);
    }

    pub fn bucket(&self, label: &str) -> Option<&Bucket> {
        self.buckets.get(label)
    }

    pub fn bucket_mut(&mut self, label: &str) -> Option<&mut Bucket> {
        self.buckets.get_mut(label)
    }

    /// All labels in deterministic (sorted) order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Labels of the sub-experiments, i.e. everything except "Filler".
    ///
    /// Materialized as an owned Vec so callers can mutate buckets while
    /// walking the label set.
    pub fn experiment_labels(&self) -> Vec<String> {
        self.buckets
            .keys()
            .filter(|l| *l != FILLER_LABEL)
            .cloned()
            .collect()
    }

    pub fn has_filler(&self) -> bool {
        self.buckets.contains_key(FILLER_LABEL)
    }

    /// Total record count across all buckets.
    pub fn total_records(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets.iter().map(|(l, b)| (l.as_str(), b))
    }

    /// Consume the catalog, yielding the buckets for draining.
    pub fn into_buckets(self) -> BTreeMap<String, Bucket> {
        self.buckets
    }
}
