//! `stimlist check` — Diagnose an item source.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;

use stimlist_config::SessionConfig;
use stimlist_core::FILLER_LABEL;
use stimlist_items::ItemStore;
use stimlist_sequence::assign_conditions;

pub fn run(items: Option<PathBuf>) -> anyhow::Result<()> {
    let config = SessionConfig::load().context("Failed to load config")?;
    let path = items.unwrap_or_else(|| config.item_file.clone());

    println!("🩺 stimlist check — item source diagnostics");
    println!("==========================================\n");
    println!("  Source: {}\n", path.display());

    let mut issues = 0;

    let catalog = match ItemStore::new().with_header(config.has_header).load(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("  ❌ Item source invalid: {e}");
            println!("\n  ⚠️  1 issue found. See above for details.");
            return Ok(());
        }
    };
    println!("  ✅ Item source parsed ({} rows)", catalog.total_records());

    let filler_count = catalog.bucket(FILLER_LABEL).map_or(0, Vec::len);
    println!("  ✅ Filler pool: {filler_count} items");

    // Per-sub-experiment shape: rows should cover every item in every
    // condition (N items x C conditions).
    let mut selected_total = 0;
    for (label, bucket) in catalog.iter().filter(|(label, _)| *label != FILLER_LABEL) {
        let items: BTreeSet<&str> = bucket.iter().map(|r| r.item_id.as_str()).collect();
        let conditions: BTreeSet<&str> = bucket.iter().map(|r| r.condition.as_str()).collect();
        selected_total += items.len();

        let parse_failure = bucket
            .iter()
            .find(|r| r.condition.parse::<u32>().map_or(true, |c| c == 0));
        if let Some(record) = parse_failure {
            println!(
                "  ❌ {label}: condition {:?} (item {}) is not a positive integer",
                record.condition, record.item_id
            );
            issues += 1;
            continue;
        }

        println!(
            "  ✅ {label}: {} rows, {} items, {} conditions",
            bucket.len(),
            items.len(),
            conditions.len()
        );
        if bucket.len() != items.len() * conditions.len() {
            println!(
                "  ⚠️  {label}: expected {} rows ({} items x {} conditions), found {}",
                items.len() * conditions.len(),
                items.len(),
                conditions.len(),
                bucket.len()
            );
            issues += 1;
        }
    }

    // Every configured list must be assignable.
    for list in 1..=config.number_of_lists {
        let mut trial_catalog = catalog.clone();
        if let Err(e) = assign_conditions(&mut trial_catalog, list) {
            println!("  ❌ List {list} cannot be assigned: {e}");
            issues += 1;
        }
    }

    // The interleaver needs more fillers than experimental items to
    // guarantee separation.
    if filler_count > selected_total {
        println!("  ✅ Filler pool exceeds the {selected_total} selected experimental items");
    } else {
        println!(
            "  ⚠️  Filler pool ({filler_count}) does not exceed the {selected_total} selected \
             experimental items; adjacent same-experiment items are possible"
        );
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
