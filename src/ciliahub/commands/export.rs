//! CSV export of the gene table, full or filtered.
//!
//! Fixed column order, every cell quoted, internal quotes doubled
//! (RFC 4180). The text building is separate from the file write so the
//! format can be tested without touching the filesystem.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CiliaHubError, Result};
use crate::model::GeneRecord;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

pub const COLUMNS: [&str; 7] = [
    "Gene",
    "Ensembl ID",
    "Gene Description",
    "Synonym",
    "OMIM ID",
    "Reference",
    "Ciliary Localization",
];

pub fn run(records: &[GeneRecord], filtered: bool, output: Option<PathBuf>) -> Result<CmdResult> {
    if filtered && records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(
            "No filtered data to export. Apply a search first.",
        ));
        return Ok(result);
    }

    let path = output.unwrap_or_else(|| default_filename(filtered));
    fs::write(&path, csv_text(records)?).map_err(CiliaHubError::Io)?;

    let mut result = CmdResult::default().with_written_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported {} genes to {}",
        records.len(),
        path.display()
    )));
    Ok(result)
}

/// Build the CSV document for a record slice, header included.
pub fn csv_text(records: &[GeneRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for r in records {
        writer.write_record([
            &r.gene,
            &r.ensembl_id,
            &r.description,
            &r.synonym,
            &r.omim_id,
            &r.reference,
            &r.localization,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CiliaHubError::Store(format!("CSV buffer flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| CiliaHubError::Store(format!("non-UTF8 CSV: {}", e)))
}

fn default_filename(filtered: bool) -> PathBuf {
    if filtered {
        PathBuf::from(format!(
            "ciliahub_filtered_{}.csv",
            Utc::now().format("%Y-%m-%d")
        ))
    } else {
        PathBuf::from("ciliahub_data.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_table;

    #[test]
    fn header_row_has_the_fixed_column_order() {
        let text = csv_text(&[]).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "\"Gene\",\"Ensembl ID\",\"Gene Description\",\"Synonym\",\"OMIM ID\",\"Reference\",\"Ciliary Localization\""
        );
    }

    #[test]
    fn every_cell_is_quoted() {
        let table = sample_table();
        let text = csv_text(table.records()).unwrap();
        for line in text.lines() {
            assert!(line.starts_with('"') && line.ends_with('"'), "line: {}", line);
        }
        // One header plus one row per record.
        assert_eq!(text.lines().count(), table.len() + 1);
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let record = GeneRecord {
            gene: "XY\"Z".to_string(),
            ..GeneRecord::default()
        };
        let text = csv_text(&[record]).unwrap();
        assert!(text.contains("\"XY\"\"Z\""));
    }

    #[test]
    fn filtered_export_of_nothing_is_a_warning_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.csv");
        let result = run(&[], true, Some(out.clone())).unwrap();
        assert!(result.written_path.is_none());
        assert!(!out.exists());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn full_export_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ciliahub_data.csv");
        let table = sample_table();

        let result = run(table.records(), false, Some(out.clone())).unwrap();
        assert_eq!(result.written_path.as_deref(), Some(out.as_path()));

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("\"BBS1\""));
        assert_eq!(written.lines().count(), table.len() + 1);
    }
}
