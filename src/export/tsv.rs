//! Tab-delimited serialization of the task history.
//!
//! One line per completed record, fields in the fixed export order, no
//! header line: the string goes to the clipboard for spreadsheet paste.
//! In-progress (pending) records never appear in the output.

use crate::errors::{AppError, AppResult};
use crate::export::model::{TaskExport, get_headers, task_to_row};
use crate::models::TaskRecord;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

pub fn history_to_tsv(history: &[TaskRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(Vec::new());

    for rec in history.iter().filter(|r| r.status.is_completed()) {
        let row = task_to_row(&TaskExport::from(rec));
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Write the TSV export to a file. Unlike the clipboard string, the file
/// variant carries a header row.
pub fn write_tsv(path: &Path, history: &[TaskRecord]) -> AppResult<()> {
    let header = get_headers().join("\t");
    let body = history_to_tsv(history)?;
    fs::write(path, format!("{header}\n{body}"))?;
    Ok(())
}
