//! JSON export: same rows as the TSV export, plus the codec report for the
//! `probe --json` read-out.

use crate::errors::{AppError, AppResult};
use crate::export::model::TaskExport;
use crate::models::{CodecSupport, TaskRecord};
use std::fs;
use std::path::Path;

pub fn history_to_json(history: &[TaskRecord]) -> AppResult<String> {
    let rows: Vec<TaskExport> = history
        .iter()
        .filter(|r| r.status.is_completed())
        .map(TaskExport::from)
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|e| AppError::Export(e.to_string()))
}

pub fn write_json(path: &Path, history: &[TaskRecord]) -> AppResult<()> {
    let text = history_to_json(history)?;
    fs::write(path, text)?;
    Ok(())
}

pub fn codec_report_to_json(report: &CodecSupport) -> AppResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskRecord, TaskStatus};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn json_rows_match_completed_history() {
        let mut rec = TaskRecord::started(
            NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            "Alpha",
            "T-1",
        );
        rec.description = "Fixed bug".to_string();
        rec.end_date = NaiveDate::from_ymd_opt(2026, 8, 26);
        rec.end_time = NaiveTime::from_hms_opt(10, 0, 0);
        rec.status = TaskStatus::Completed;

        let json = history_to_json(&[rec]).unwrap();
        assert!(json.contains("\"project\": \"Alpha\""));
        assert!(json.contains("\"status\": \"completed\""));
    }
}
