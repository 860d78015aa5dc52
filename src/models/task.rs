use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn ts_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn ts_as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// One row of the time-tracking history. Created on "start" with the end
/// fields empty, mutated exactly once on "complete", immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRecord {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub project: String,
    pub ticket: String,
    pub description: String,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub status: TaskStatus,
}

impl TaskRecord {
    /// Constructor for records created on the "start" transition.
    /// - `description` starts empty, filled in on completion
    /// - end fields stay `None` until completion
    pub fn started(
        start_date: NaiveDate,
        start_time: NaiveTime,
        project: &str,
        ticket: &str,
    ) -> Self {
        Self {
            start_date,
            start_time,
            project: project.to_string(),
            ticket: ticket.to_string(),
            description: String::new(),
            end_date: None,
            end_time: None,
            status: TaskStatus::Pending,
        }
    }

    pub fn start_date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_date_str(&self) -> String {
        self.end_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn end_time_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
