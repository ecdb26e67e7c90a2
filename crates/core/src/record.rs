//! A single stimulus item as read from the item source.

use serde::{Deserialize, Serialize};

/// One row of the item source: a stimulus with its sub-experiment label,
/// item id, raw condition field, and presentation payload.
///
/// Immutable once created. The payload arity depends on the label — a
/// sentence-reading item typically carries the sentence followed by a
/// comprehension question and its answer choices, while a filler may carry
/// only a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimulusRecord {
    /// Sub-experiment label ("Filler" is reserved for the filler pool).
    pub label: String,
    /// Item id within the sub-experiment. Expected to be "1".."N".
    pub item_id: String,
    /// Raw condition field. A stringified positive integer for
    /// experimental items; fillers may leave it empty or carry a
    /// placeholder.
    pub condition: String,
    /// Remaining fields in source order: sentence text, question text,
    /// answer choices, and so on.
    pub payload: Vec<String>,
}

impl StimulusRecord {
    pub fn new(
        label: impl Into<String>,
        item_id: impl Into<String>,
        condition: impl Into<String>,
        payload: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            item_id: item_id.into(),
            condition: condition.into(),
            payload,
        }
    }

    /// Whether this record belongs to the reserved filler pool.
    pub fn is_filler(&self) -> bool {
        self.label == crate::catalog::FILLER_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_detection_uses_reserved_label() {
        let filler = StimulusRecord::new("Filler", "12", "", vec!["The_cat_sat.".into()]);
        let expt = StimulusRecord::new("Ambig", "1", "2", vec!["The_horse_raced.".into()]);
        assert!(filler.is_filler());
        assert!(!expt.is_filler());
    }
}
