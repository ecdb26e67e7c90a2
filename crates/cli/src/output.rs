//! Tab-separated trial output.
//!
//! One row per trial: trial index, label, item id, condition, then the
//! payload fields. Rows vary in width with the payload, so the writer is
//! flexible. The presentation layer appends its response columns to this
//! schema when logging.

use std::io::Write;

use stimlist_core::ExperimentList;

/// Write the experiment list as TSV with a header row.
pub fn write_tsv<W: Write>(list: &ExperimentList, writer: W) -> csv::Result<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(writer);

    tsv.write_record(["trial", "stimulustype", "item", "condition"])?;
    for (index, record) in list.iter().enumerate() {
        let mut row = vec![
            index.to_string(),
            record.label.clone(),
            record.item_id.clone(),
            record.condition.clone(),
        ];
        row.extend(record.payload.iter().cloned());
        tsv.write_record(&row)?;
    }
    tsv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stimlist_core::StimulusRecord;

    #[test]
    fn writes_header_and_one_row_per_trial() {
        let list = ExperimentList {
            trials: vec![
                StimulusRecord::new("Filler", "3", "", vec!["The_dog_barked.".into()]),
                StimulusRecord::new(
                    "Ambig",
                    "1",
                    "2",
                    vec!["A_sentence.".into(), "A_question?".into()],
                ),
            ],
            leftover_label: None,
        };

        let mut buffer = Vec::new();
        write_tsv(&list, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "trial\tstimulustype\titem\tcondition");
        assert_eq!(lines[1], "0\tFiller\t3\t\tThe_dog_barked.");
        assert_eq!(lines[2], "1\tAmbig\t1\t2\tA_sentence.\tA_question?");
    }

    #[test]
    fn empty_list_writes_only_the_header() {
        let list = ExperimentList {
            trials: vec![],
            leftover_label: None,
        };
        let mut buffer = Vec::new();
        write_tsv(&list, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "trial\tstimulustype\titem\tcondition\n"
        );
    }
}
