//! Work-time task tracker.
//!
//! Two-state machine: Idle (no in-progress task) and Active (exactly one).
//! Starting captures the wall-clock timestamp and the project/ticket
//! fields; completing stamps the end, appends the record to the append-only
//! history and clears the active slot. There is no cancellation path and no
//! persistence; the history lives for the session only.

use crate::errors::{AppError, AppResult};
use crate::export::tsv::history_to_tsv;
use crate::models::{TaskRecord, TaskStatus};
use crate::platform::clipboard::Clipboard;
use crate::utils::date::{now_time, today};
use chrono::{NaiveDate, NaiveTime};
use log::warn;

#[derive(Debug, Default)]
pub struct TaskTracker {
    history: Vec<TaskRecord>,
    active: Option<TaskRecord>,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → Active with the current wall-clock timestamp.
    pub fn start(&mut self, project: &str, ticket: &str) -> AppResult<()> {
        self.start_at(project, ticket, today(), now_time())
    }

    /// Idle → Active with an explicit timestamp.
    pub fn start_at(
        &mut self,
        project: &str,
        ticket: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<()> {
        if self.active.is_some() {
            return Err(AppError::TaskAlreadyActive);
        }
        self.active = Some(TaskRecord::started(date, time, project.trim(), ticket.trim()));
        Ok(())
    }

    /// Active → Idle with the current wall-clock timestamp.
    pub fn complete(&mut self, description: &str) -> AppResult<()> {
        self.complete_at(description, today(), now_time())
    }

    /// Active → Idle with an explicit timestamp. The finished record joins
    /// the history; it is not mutated again afterwards.
    pub fn complete_at(
        &mut self,
        description: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<()> {
        let mut record = self.active.take().ok_or(AppError::NoActiveTask)?;
        record.description = description.to_string();
        record.end_date = Some(date);
        record.end_time = Some(time);
        record.status = TaskStatus::Completed;
        self.history.push(record);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&TaskRecord> {
        self.active.as_ref()
    }

    pub fn history(&self) -> &[TaskRecord] {
        &self.history
    }

    /// Tab-delimited export of the history, one line per completed record,
    /// the in-progress task excluded.
    pub fn export_tsv(&self) -> AppResult<String> {
        history_to_tsv(&self.history)
    }

    /// Copy the export to the clipboard. A failed write is logged, never
    /// surfaced; the history itself is untouched either way.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) {
        match self.export_tsv() {
            Ok(text) => {
                if let Err(e) = clipboard.write_text(&text) {
                    warn!("Failed to copy task history to clipboard: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize task history: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::clipboard::{BrokenClipboard, MemoryClipboard};
    use chrono::{NaiveDate, NaiveTime};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn start_then_complete_appends_one_completed_record() {
        let mut tracker = TaskTracker::new();
        tracker
            .start_at("Alpha", "T-1", d("2026-08-26"), t("09:00"))
            .unwrap();
        assert!(tracker.is_active());
        tracker
            .complete_at("Fixed bug", d("2026-08-26"), t("10:30"))
            .unwrap();

        assert!(!tracker.is_active());
        assert_eq!(tracker.history().len(), 1);
        let rec = &tracker.history()[0];
        assert_eq!(rec.project, "Alpha");
        assert_eq!(rec.ticket, "T-1");
        assert_eq!(rec.description, "Fixed bug");
        assert_eq!(rec.status, TaskStatus::Completed);
        assert_eq!(rec.end_time_str(), "10:30");
    }

    #[test]
    fn double_start_is_rejected() {
        let mut tracker = TaskTracker::new();
        tracker
            .start_at("Alpha", "T-1", d("2026-08-26"), t("09:00"))
            .unwrap();
        assert!(matches!(
            tracker.start_at("Beta", "T-2", d("2026-08-26"), t("09:05")),
            Err(AppError::TaskAlreadyActive)
        ));
    }

    #[test]
    fn complete_without_start_is_rejected() {
        let mut tracker = TaskTracker::new();
        assert!(matches!(
            tracker.complete_at("x", d("2026-08-26"), t("09:00")),
            Err(AppError::NoActiveTask)
        ));
    }

    #[test]
    fn clipboard_receives_export() {
        let mut tracker = TaskTracker::new();
        tracker
            .start_at("Alpha", "T-1", d("2026-08-26"), t("09:00"))
            .unwrap();
        tracker
            .complete_at("Fixed bug", d("2026-08-26"), t("10:30"))
            .unwrap();

        let mut clip = MemoryClipboard::new();
        tracker.copy_to_clipboard(&mut clip);
        let copied = clip.contents().unwrap();
        assert!(copied.contains("Alpha\tT-1\tFixed bug"));
    }

    #[test]
    fn clipboard_failure_does_not_panic_or_surface() {
        let mut tracker = TaskTracker::new();
        tracker
            .start_at("Alpha", "T-1", d("2026-08-26"), t("09:00"))
            .unwrap();
        tracker
            .complete_at("done", d("2026-08-26"), t("10:00"))
            .unwrap();
        tracker.copy_to_clipboard(&mut BrokenClipboard);
        assert_eq!(tracker.history().len(), 1);
    }
}
