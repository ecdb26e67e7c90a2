//! Item source parsing for stimlist.
//!
//! An item source is a comma-separated table with no embedded commas:
//!
//! ```text
//! label, item_id, condition, payload...
//! ```
//!
//! `label` is either the reserved `"Filler"` or a sub-experiment name;
//! `condition` is a stringified positive integer for non-filler rows.
//! There is no header row by default, but [`ItemStore::with_header`] can
//! skip one for sources that carry it.
//!
//! Parsing only groups: rows land in their label's bucket in input order.
//! Condition validity is the assigner's concern, not the parser's.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use stimlist_core::{FormatError, ItemCatalog, StimulusRecord};

/// Reads a tabular item source into an [`ItemCatalog`].
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    has_header: bool,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the first row as a header and skip it.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Load an item source from a file path.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ItemCatalog, FormatError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FormatError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = self.read(file)?;
        debug!(
            path = %path.display(),
            records = catalog.total_records(),
            "loaded item source"
        );
        Ok(catalog)
    }

    /// Parse an item source from any reader.
    pub fn read<R: Read>(&self, reader: R) -> Result<ItemCatalog, FormatError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = ItemCatalog::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row_number = index + 1;
            let row = row.map_err(|e| FormatError::Malformed {
                row: row_number,
                reason: e.to_string(),
            })?;
            if row.len() < 2 {
                return Err(FormatError::ShortRow { row: row_number });
            }

            let label = row[0].to_string();
            let item_id = row[1].to_string();
            let condition = row.get(2).unwrap_or("").to_string();
            let payload = row.iter().skip(3).map(str::to_string).collect();
            catalog.push(StimulusRecord::new(label, item_id, condition, payload));
        }

        if catalog.is_empty() {
            return Err(FormatError::Empty);
        }
        if !catalog.has_filler() {
            return Err(FormatError::MissingFiller);
        }
        Ok(catalog)
    }
}
