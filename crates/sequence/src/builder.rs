//! The full pipeline: assign, shuffle, interleave.

use rand::Rng;
use tracing::debug;

use stimlist_core::{AssignmentError, ExperimentList, ItemCatalog};

use crate::{assign_conditions, interleave, shuffle_buckets};

/// Build the presentation order for one run.
///
/// Takes the catalog by value: condition assignment discards the records
/// that do not belong to list `list_number`, shuffling permutes each
/// bucket, and interleaving drains the buckets into the final list. Called
/// once per run by the presentation layer, typically with a list number
/// derived from the subject number.
pub fn build_experiment_list<R: Rng>(
    list_number: u32,
    mut catalog: ItemCatalog,
    rng: &mut R,
) -> Result<ExperimentList, AssignmentError> {
    assign_conditions(&mut catalog, list_number)?;
    let selected = catalog.total_records();
    shuffle_buckets(&mut catalog, rng);
    let list = interleave(catalog, rng);
    debug!(list = list_number, trials = list.len(), "built experiment list");
    debug_assert_eq!(list.len(), selected);
    Ok(list)
}
