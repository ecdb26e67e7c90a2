//! `stimlist preview` — Show per-list condition assignments.

use std::path::PathBuf;

use anyhow::Context;

use stimlist_config::SessionConfig;
use stimlist_items::ItemStore;
use stimlist_sequence::assign_conditions;

pub fn run(items: Option<PathBuf>, lists: Option<u32>) -> anyhow::Result<()> {
    let config = SessionConfig::load().context("Failed to load config")?;
    let path = items.unwrap_or_else(|| config.item_file.clone());
    let num_lists = lists.unwrap_or(config.number_of_lists).max(1);

    let catalog = ItemStore::new()
        .with_header(config.has_header)
        .load(&path)
        .with_context(|| format!("Failed to load item source {}", path.display()))?;

    println!("🧪 stimlist preview — condition assignment per list");
    println!("==================================================");

    for list in 1..=num_lists {
        let mut assigned = catalog.clone();
        assign_conditions(&mut assigned, list)
            .with_context(|| format!("List {list} cannot be assigned"))?;

        println!("\n  List {list}:");
        for label in assigned.experiment_labels() {
            let Some(bucket) = assigned.bucket(&label) else {
                continue;
            };
            let mut pairs: Vec<(&str, &str)> = bucket
                .iter()
                .map(|r| (r.item_id.as_str(), r.condition.as_str()))
                .collect();
            // Item ids are numeric by convention; sort them that way.
            pairs.sort_by_key(|(item, _)| item.parse::<u32>().unwrap_or(u32::MAX));

            let table = pairs
                .iter()
                .map(|(item, condition)| format!("{item}:{condition}"))
                .collect::<Vec<_>>()
                .join("  ");
            println!("    {label:<12} {table}");
        }
    }

    Ok(())
}
