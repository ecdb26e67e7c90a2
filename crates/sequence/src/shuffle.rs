//! Per-bucket shuffling.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use stimlist_core::ItemCatalog;

/// Uniformly permute every bucket in place, filler included.
///
/// All randomness comes from the injected generator: the same seed always
/// produces the same permutations. Empty and singleton buckets are no-ops.
pub fn shuffle_buckets<R: Rng>(catalog: &mut ItemCatalog, rng: &mut R) {
    // Catalog label order is deterministic, so the RNG stream is consumed
    // in a reproducible order.
    for label in catalog.labels().map(str::to_string).collect::<Vec<_>>() {
        if let Some(bucket) = catalog.bucket_mut(&label) {
            bucket.shuffle(rng);
            debug!(label = %label, len = bucket.len(), "shuffled bucket");
        }
    }
}
