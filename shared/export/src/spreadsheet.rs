use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use congruent_core::{Method, Sequence, SequenceRow};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export file {0}: {1}")]
    CreateFile(PathBuf, io::Error),

    #[error("Failed to write csv record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush export: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize sequence: {0}")]
    Json(#[from] serde_json::Error),
}

/// Column layout of an exported row; field order is the column order.
#[derive(Serialize)]
struct Record<'a> {
    n: u64,
    previous_value: u64,
    formula: &'a str,
    current_value: u64,
    normalized_value: &'a str,
}

impl<'a> From<&'a SequenceRow> for Record<'a> {
    fn from(row: &'a SequenceRow) -> Self {
        Record {
            n: row.n,
            previous_value: row.previous_value,
            formula: &row.formula_trace,
            current_value: row.current_value,
            normalized_value: &row.normalized_value,
        }
    }
}

/// `sequence_linear.csv` or `sequence_multiplicative.csv`.
pub fn export_file_name(method: Method) -> String {
    format!("sequence_{}.csv", method.family_name())
}

/// Writes one record per generated row. The verification row is not exported.
pub fn write_csv<W: Write>(sequence: &Sequence, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in &sequence.rows {
        writer.serialize(Record::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the sequence into `dir` under its conventional file name and returns
/// the path written.
///
/// The spreadsheet is plain CSV rather than an `.xlsx` workbook; any
/// spreadsheet application opens it with the same columns.
pub fn export_csv(sequence: &Sequence, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(export_file_name(sequence.params.method));
    let file = File::create(&path).map_err(|e| ExportError::CreateFile(path.clone(), e))?;
    write_csv(sequence, file)?;
    info!(
        "Exported {} rows to {}",
        sequence.rows.len(),
        path.display()
    );
    Ok(path)
}

pub fn write_json<W: Write>(sequence: &Sequence, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, sequence)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(export_file_name(Method::Lcg), "sequence_linear.csv");
        assert_eq!(export_file_name(Method::McgA3), "sequence_multiplicative.csv");
        assert_eq!(export_file_name(Method::McgA5), "sequence_multiplicative.csv");
    }
}
