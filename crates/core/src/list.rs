//! The final experiment list: the sole output artifact of the pipeline.

use serde::{Deserialize, Serialize};

use crate::record::StimulusRecord;

/// The ordered presentation sequence for one run.
///
/// Length invariant: equals all filler items plus the list-selected
/// experimental subset. Consumed read-only, strictly once, by the
/// presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentList {
    /// Records in presentation order.
    pub trials: Vec<StimulusRecord>,
    /// Set when interleaving ran out of alternation partners while a
    /// non-filler sub-experiment still had items: the filler pool was too
    /// small to guarantee that no two same-label items are adjacent. The
    /// list is still complete.
    pub leftover_label: Option<String>,
}

impl ExperimentList {
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StimulusRecord> {
        self.trials.iter()
    }

    /// True when no pair of neighbors shares a label, fillers included.
    /// Leftover fillers are random-inserted at the end of interleaving and
    /// may touch each other, so this is a diagnostic, not an invariant;
    /// what interleaving does guarantee (given enough filler) is that no
    /// two *experimental* neighbors share a label.
    pub fn is_fully_alternating(&self) -> bool {
        self.trials
            .windows(2)
            .all(|pair| pair[0].label != pair[1].label)
    }
}

impl<'a> IntoIterator for &'a ExperimentList {
    type Item = &'a StimulusRecord;
    type IntoIter = std::slice::Iter<'a, StimulusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.iter()
    }
}
