// src/export/model.rs

use crate::models::TaskRecord;
use serde::Serialize;

/// Flat, string-only view of a task record for export.
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub start_date: String,
    pub start_time: String,
    pub project: String,
    pub ticket: String,
    pub description: String,
    pub end_date: String,
    pub end_time: String,
    pub status: String,
}

impl From<&TaskRecord> for TaskExport {
    fn from(rec: &TaskRecord) -> Self {
        Self {
            start_date: rec.start_date_str(),
            start_time: rec.start_time_str(),
            project: rec.project.clone(),
            ticket: rec.ticket.clone(),
            description: rec.description.clone(),
            end_date: rec.end_date_str(),
            end_time: rec.end_time_str(),
            status: rec.status.ts_as_str().to_string(),
        }
    }
}

/// Field order for the delimited export. Fixed; the clipboard format is
/// consumed by spreadsheet paste.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "start_date",
        "start_time",
        "project",
        "ticket",
        "description",
        "end_date",
        "end_time",
        "status",
    ]
}

pub(crate) fn task_to_row(e: &TaskExport) -> Vec<String> {
    vec![
        e.start_date.clone(),
        e.start_time.clone(),
        e.project.clone(),
        e.ticket.clone(),
        e.description.clone(),
        e.end_date.clone(),
        e.end_time.clone(),
        e.status.clone(),
    ]
}
