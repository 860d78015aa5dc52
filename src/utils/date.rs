use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current wall-clock time, truncated to the minute the way the record
/// formatter prints it.
pub fn now_time() -> NaiveTime {
    let now = Local::now().time();
    now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}
