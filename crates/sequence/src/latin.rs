//! Cyclic Latin-square condition assignment.
//!
//! For a sub-experiment with N items tested across conditions 1..C, list L
//! owes item i the condition at position `(i - 1 + (L - 1)) mod (C * N)`
//! of the cyclic schedule `[1..C]` repeated N times. The lookup wraps, so
//! list numbers beyond the schedule length still resolve.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use stimlist_core::{AssignmentError, ItemCatalog};

/// Reduce every non-filler bucket to the Latin-square subset for 1-based
/// list `list_number`: exactly one condition's worth of records per item
/// id. The filler bucket is untouched.
///
/// Selection is fully deterministic; only later stages randomize order.
pub fn assign_conditions(
    catalog: &mut ItemCatalog,
    list_number: u32,
) -> Result<(), AssignmentError> {
    debug_assert!(list_number >= 1, "list numbers are 1-based");
    let offset = (list_number as usize).saturating_sub(1);

    for label in catalog.experiment_labels() {
        let Some(bucket) = catalog.bucket_mut(&label) else {
            continue;
        };

        // Conditions are 1..C where C is the highest condition seen among
        // the bucket's raw records.
        let mut num_conditions: usize = 0;
        for record in bucket.iter() {
            let value: usize = record
                .condition
                .parse()
                .ok()
                .filter(|&c| c >= 1)
                .ok_or_else(|| AssignmentError::BadCondition {
                    label: label.clone(),
                    value: record.condition.clone(),
                })?;
            num_conditions = num_conditions.max(value);
        }

        let item_ids: BTreeSet<&str> = bucket.iter().map(|r| r.item_id.as_str()).collect();
        let num_items = item_ids.len();

        // Cyclic schedule: [1..C] repeated N times.
        let schedule: Vec<usize> = (0..num_items).flat_map(|_| 1..=num_conditions).collect();

        let wanted: HashSet<(String, String)> = (1..=num_items)
            .map(|i| {
                let owed = schedule[(i - 1 + offset) % schedule.len()];
                (i.to_string(), owed.to_string())
            })
            .collect();

        bucket.retain(|r| wanted.contains(&(r.item_id.clone(), r.condition.clone())));

        if bucket.len() < num_items {
            return Err(AssignmentError::TooFewRecords {
                label: label.clone(),
                list: list_number,
                expected: num_items,
                found: bucket.len(),
            });
        }

        debug!(
            label = %label,
            items = num_items,
            conditions = num_conditions,
            list = list_number,
            "assigned latin-square subset"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stimlist_core::StimulusRecord;

    /// 4 items x 2 conditions plus a filler pool, as in the worked example.
    fn two_condition_catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        for item in 1..=4 {
            for condition in 1..=2 {
                catalog.push(StimulusRecord::new(
                    "Ambig",
                    item.to_string(),
                    condition.to_string(),
                    vec![format!("sentence_{item}_{condition}")],
                ));
            }
        }
        for item in 1..=10 {
            catalog.push(StimulusRecord::new("Filler", item.to_string(), "", vec![]));
        }
        catalog
    }

    fn conditions_by_item(catalog: &ItemCatalog, label: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = catalog
            .bucket(label)
            .unwrap()
            .iter()
            .map(|r| (r.item_id.clone(), r.condition.clone()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn list_one_selects_unshifted_schedule() {
        let mut catalog = two_condition_catalog();
        assign_conditions(&mut catalog, 1).unwrap();

        // Items 1..4 get conditions [1,2,1,2] under list 1.
        assert_eq!(
            conditions_by_item(&catalog, "Ambig"),
            vec![
                ("1".into(), "1".into()),
                ("2".into(), "2".into()),
                ("3".into(), "1".into()),
                ("4".into(), "2".into()),
            ]
        );
    }

    #[test]
    fn list_two_shifts_schedule_by_one() {
        let mut catalog = two_condition_catalog();
        assign_conditions(&mut catalog, 2).unwrap();

        assert_eq!(
            conditions_by_item(&catalog, "Ambig"),
            vec![
                ("1".into(), "2".into()),
                ("2".into(), "1".into()),
                ("3".into(), "2".into()),
                ("4".into(), "1".into()),
            ]
        );
    }

    #[test]
    fn list_numbers_wrap_around_the_schedule() {
        // Schedule length is C*N = 8, so list 9 behaves like list 1.
        let mut wrapped = two_condition_catalog();
        assign_conditions(&mut wrapped, 9).unwrap();
        let mut base = two_condition_catalog();
        assign_conditions(&mut base, 1).unwrap();

        assert_eq!(
            conditions_by_item(&wrapped, "Ambig"),
            conditions_by_item(&base, "Ambig")
        );
    }

    #[test]
    fn assignment_is_deterministic_per_list() {
        let mut a = two_condition_catalog();
        let mut b = two_condition_catalog();
        assign_conditions(&mut a, 3).unwrap();
        assign_conditions(&mut b, 3).unwrap();
        assert_eq!(
            conditions_by_item(&a, "Ambig"),
            conditions_by_item(&b, "Ambig")
        );
    }

    #[test]
    fn filler_bucket_is_never_reduced() {
        let mut catalog = two_condition_catalog();
        assign_conditions(&mut catalog, 1).unwrap();
        assert_eq!(catalog.bucket("Filler").unwrap().len(), 10);
    }

    #[test]
    fn selected_bucket_holds_one_record_per_item() {
        let mut catalog = two_condition_catalog();
        assign_conditions(&mut catalog, 1).unwrap();
        assert_eq!(catalog.bucket("Ambig").unwrap().len(), 4);
    }

    #[test]
    fn unparsable_condition_is_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog.push(StimulusRecord::new("Ambig", "1", "two", vec![]));
        catalog.push(StimulusRecord::new("Filler", "1", "", vec![]));

        let err = assign_conditions(&mut catalog, 1).unwrap_err();
        match err {
            AssignmentError::BadCondition { label, value } => {
                assert_eq!(label, "Ambig");
                assert_eq!(value, "two");
            }
            other => panic!("expected BadCondition, got {other:?}"),
        }
    }

    #[test]
    fn zero_condition_is_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog.push(StimulusRecord::new("Ambig", "1", "0", vec![]));
        catalog.push(StimulusRecord::new("Filler", "1", "", vec![]));

        assert!(matches!(
            assign_conditions(&mut catalog, 1),
            Err(AssignmentError::BadCondition { .. })
        ));
    }

    #[test]
    fn missing_item_condition_pair_is_rejected() {
        // Item 2 only exists in condition 2, but list 1 owes it condition 2
        // while item 1 gets condition 1 — drop item 1's only record to
        // force a shortfall.
        let mut catalog = ItemCatalog::new();
        catalog.push(StimulusRecord::new("Ambig", "1", "2", vec![]));
        catalog.push(StimulusRecord::new("Ambig", "2", "2", vec![]));
        catalog.push(StimulusRecord::new("Filler", "1", "", vec![]));

        // List 1 owes item 1 condition 1, which no record carries.
        let err = assign_conditions(&mut catalog, 1).unwrap_err();
        match err {
            AssignmentError::TooFewRecords {
                label,
                list,
                expected,
                found,
            } => {
                assert_eq!(label, "Ambig");
                assert_eq!(list, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected TooFewRecords, got {other:?}"),
        }
    }
}
