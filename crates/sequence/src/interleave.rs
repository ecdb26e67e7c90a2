//! Constrained bucket interleaving.
//!
//! Merges the shuffled buckets into one sequence so that, whenever
//! feasible, no two consecutive records share a sub-experiment label.
//! Sampling is restricted to the eligible label set (everything but the
//! last-emitted label), never rejection-based, so the loop cannot spin on
//! a forbidden singleton. Items that cannot be placed without violation
//! fall back to plain random insertion.

use rand::Rng;
use tracing::warn;

use stimlist_core::{ExperimentList, FILLER_LABEL, ItemCatalog, StimulusRecord};

/// Drain all buckets into a single presentation order.
///
/// While more than one label has items left, the next record is popped
/// from a label chosen uniformly from the non-forbidden set. Once a single
/// label remains, its leftover items are inserted at independently chosen
/// random positions; perfect non-adjacency is not guaranteed past that
/// point. When that leftover label is not "Filler", the filler pool was
/// too small and the result carries the label as a diagnostic.
pub fn interleave<R: Rng>(catalog: ItemCatalog, rng: &mut R) -> ExperimentList {
    let mut pools: Vec<(String, Vec<StimulusRecord>)> =
        catalog.into_buckets().into_iter().collect();
    let total: usize = pools.iter().map(|(_, b)| b.len()).sum();

    let mut remaining: Vec<usize> = pools
        .iter()
        .enumerate()
        .filter(|(_, (_, bucket))| !bucket.is_empty())
        .map(|(i, _)| i)
        .collect();
    let mut trials: Vec<StimulusRecord> = Vec::with_capacity(total);
    let mut last: Option<usize> = None;

    while remaining.len() > 1 {
        let eligible: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&i| Some(i) != last)
            .collect();
        let pick = eligible[rng.gen_range(0..eligible.len())];

        // Pop order is the already-shuffled order, from the tail.
        if let Some(record) = pools[pick].1.pop() {
            trials.push(record);
        }
        last = Some(pick);
        if pools[pick].1.is_empty() {
            remaining.retain(|&i| i != pick);
        }
    }

    let mut leftover_label = None;
    if let Some(&index) = remaining.first() {
        let (label, bucket) = &mut pools[index];
        if !bucket.is_empty() && label.as_str() != FILLER_LABEL {
            warn!(
                label = %label,
                count = bucket.len(),
                "insufficient filler items; same-experiment items may be adjacent"
            );
            leftover_label = Some(label.clone());
        }
        for record in bucket.drain(..) {
            let position = rng.gen_range(0..=trials.len());
            trials.insert(position, record);
        }
    }

    ExperimentList {
        trials,
        leftover_label,
    }
}
