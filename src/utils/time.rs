//! Time utilities: clock formatting for the transport read-out.

/// Format seconds as `m:ss`, the transport display format.
pub fn format_clock(time_in_seconds: f64) -> String {
    let total = time_in_seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
