//! Error types for the stimlist domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Each pipeline stage
//! that can fail has its own error enum; the insufficient-filler condition
//! is deliberately *not* here — it is a non-fatal diagnostic carried on
//! [`crate::ExperimentList`] instead.

use thiserror::Error;

/// The top-level error type for all stimlist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty item source.
    #[error("Item source error: {0}")]
    Format(#[from] FormatError),

    /// Latin-square condition assignment failed.
    #[error("Assignment error: {0}")]
    Assignment(#[from] AssignmentError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing an item source into a catalog.
///
/// All of these are fatal and surface before any list is produced.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Failed to read item source at {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Item source row {row} is malformed: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("Item source row {row} has fewer than 2 fields (need label and item id)")]
    ShortRow { row: usize },

    #[error("Item source contains no rows")]
    Empty,

    #[error("Item source has no \"Filler\" rows; a filler pool is required")]
    MissingFiller,
}

/// Errors raised while computing the Latin-square subset for a list.
///
/// Surfaced per sub-experiment so the offending label is always named.
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Sub-experiment {label}: condition {value:?} is not a positive integer")]
    BadCondition { label: String, value: String },

    #[error(
        "Sub-experiment {label}: expected {expected} records for list {list}, found {found} (malformed item/condition pairs?)"
    )]
    TooFewRecords {
        label: String,
        list: u32,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_displays_row_number() {
        let err = Error::Format(FormatError::ShortRow { row: 7 });
        assert!(err.to_string().contains("row 7"));
        assert!(err.to_string().contains("fewer than 2 fields"));
    }

    #[test]
    fn missing_filler_names_the_reserved_label() {
        let err = Error::Format(FormatError::MissingFiller);
        assert!(err.to_string().contains("Filler"));
    }

    #[test]
    fn assignment_error_names_offending_label() {
        let err = Error::Assignment(AssignmentError::BadCondition {
            label: "Ambig".into(),
            value: "two".into(),
        });
        assert!(err.to_string().contains("Ambig"));
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn too_few_records_reports_counts() {
        let err = AssignmentError::TooFewRecords {
            label: "Ambig".into(),
            list: 3,
            expected: 24,
            found: 20,
        };
        assert!(err.to_string().contains("24"));
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("list 3"));
    }
}
