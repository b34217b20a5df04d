//! Display formatting for the selected-slot labels and the grid chrome.
//!
//! The selection labels use a fixed Japanese format, "2020年1月1日 9:00〜":
//! minutes are always two digits, the hour is never padded.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Format a slot start for the two selected-slot label surfaces.
pub fn format_start_label(start: NaiveDateTime) -> String {
    format!(
        "{}年{}月{}日 {}:{:02}〜",
        start.year(),
        start.month(),
        start.day(),
        start.hour(),
        start.minute()
    )
}

/// Day header text for a grid column, e.g. "4/3 (水)".
pub fn format_day_header(date: chrono::NaiveDate) -> String {
    format!(
        "{}/{} ({})",
        date.month(),
        date.day(),
        weekday_short_jp(date.weekday())
    )
}

/// Time label for a grid row, e.g. "9:00" / "20:30".
pub fn format_time_label(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Single-character Japanese weekday name.
pub fn weekday_short_jp(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    }
}
