//! `stimlist build` — Build the experiment list for one run.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use stimlist_config::SessionConfig;
use stimlist_items::ItemStore;
use stimlist_sequence::build_experiment_list;

use crate::output;

pub fn run(
    items: Option<PathBuf>,
    subject: Option<u32>,
    list: Option<u32>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = SessionConfig::load().context("Failed to load config")?;
    let items_path = items.unwrap_or_else(|| config.item_file.clone());

    // An explicit --list bypasses subject bookkeeping entirely; otherwise
    // the subject (given or next free) determines the list cyclically.
    let (subject, list_number) = match (subject, list) {
        (_, Some(list)) => {
            anyhow::ensure!(list >= 1, "list numbers are 1-based");
            (None, list)
        }
        (Some(subject), None) => {
            anyhow::ensure!(subject >= 1, "subject numbers are 1-based");
            (Some(subject), config.list_for_subject(subject))
        }
        (None, None) => {
            let subject = config.next_subject_number();
            (Some(subject), config.list_for_subject(subject))
        }
    };

    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = ItemStore::new()
        .with_header(config.has_header)
        .load(&items_path)
        .with_context(|| format!("Failed to load item source {}", items_path.display()))?;
    let experiment_list = build_experiment_list(list_number, catalog, &mut rng)?;

    let destination = match output {
        Some(path) if path == PathBuf::from("-") => None,
        Some(path) => Some(path),
        None => subject.map(|s| config.results_dir.join(format!("{s:03}.tsv"))),
    };

    match &destination {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            output::write_tsv(&experiment_list, file)?;
        }
        None => output::write_tsv(&experiment_list, std::io::stdout().lock())?,
    }

    println!("🧪 stimlist build");
    println!("================");
    if let Some(subject) = subject {
        println!("  Subject:  {subject:03}");
    }
    println!("  List:     {list_number}");
    println!("  Trials:   {}", experiment_list.len());
    if let Some(path) = &destination {
        println!("  Output:   {}", path.display());
    }
    if let Some(label) = &experiment_list.leftover_label {
        println!(
            "\n  ⚠️  Insufficient filler items: \"{label}\" items may occur adjacent to each other. \
             Add fillers until they outnumber the experimental items."
        );
    }

    Ok(())
}
