use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use chrono::Datelike;
use eframe::egui;

use shared::SLOT_DURATION_MINUTES;

/// The three colors that fully describe how an event is drawn.
///
/// Derived from availability state and selection status by
/// [`super::styling::slot_style`]; never stored on the slot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTriple {
    pub text: egui::Color32,
    pub background: egui::Color32,
    pub border: egui::Color32,
}

/// Static view-window configuration for the week grid.
///
/// Mirrors the options the calendar is initialized with once at startup:
/// a bounded date range starting today, the first visible weekday equal to
/// today's weekday, and fixed time-of-day bounds. Events whose times fall
/// outside the bounds are clipped by the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWindow {
    /// First bookable day (today)
    pub start_date: NaiveDate,
    /// Number of days shown from `start_date`
    pub period_days: i64,
    /// Earliest time-of-day drawn on the grid
    pub slot_min_time: NaiveTime,
    /// Latest time-of-day drawn on the grid (exclusive)
    pub slot_max_time: NaiveTime,
}

/// Days bookable from today.
pub const DISPLAY_PERIOD_DAYS: i64 = 20;

impl CalendarWindow {
    /// Window starting today with the default 9:00-21:00 day bounds.
    pub fn starting_today(today: NaiveDate) -> Self {
        CalendarWindow {
            start_date: today,
            period_days: DISPLAY_PERIOD_DAYS,
            slot_min_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            slot_max_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        }
    }

    /// First day past the bookable range.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(self.period_days)
    }

    /// Leftmost column weekday: always the start date's own weekday.
    pub fn first_weekday(&self) -> Weekday {
        self.start_date.weekday()
    }

    /// Whether a date falls inside the bookable range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date()
    }

    /// Number of week pages needed to cover the whole period.
    pub fn week_count(&self) -> u32 {
        ((self.period_days + 6) / 7) as u32
    }

    /// The seven dates of the given week page, leftmost first.
    pub fn visible_days(&self, week_offset: u32) -> Vec<NaiveDate> {
        let first = self.start_date + Duration::days(7 * week_offset as i64);
        (0..7).map(|d| first + Duration::days(d)).collect()
    }

    /// Number of 30-minute rows between the time-of-day bounds.
    pub fn slot_rows(&self) -> u32 {
        let minutes = (self.slot_max_time - self.slot_min_time).num_minutes();
        (minutes / SLOT_DURATION_MINUTES) as u32
    }

    /// Time-of-day at the top of the given row.
    pub fn row_time(&self, row: u32) -> NaiveTime {
        self.slot_min_time + Duration::minutes(row as i64 * SLOT_DURATION_MINUTES)
    }

    /// Whether an event starting at this time-of-day lands on the grid at
    /// all. Events starting outside the bounds are clipped entirely.
    pub fn shows_start_time(&self, start: NaiveTime) -> bool {
        start >= self.slot_min_time && start < self.slot_max_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> CalendarWindow {
        CalendarWindow::starting_today(NaiveDate::from_ymd_opt(2024, 4, 3).unwrap())
    }

    #[test]
    fn test_window_range() {
        let w = window();
        assert_eq!(w.end_date(), NaiveDate::from_ymd_opt(2024, 4, 23).unwrap());
        assert!(w.contains(NaiveDate::from_ymd_opt(2024, 4, 3).unwrap()));
        assert!(w.contains(NaiveDate::from_ymd_opt(2024, 4, 22).unwrap()));
        assert!(!w.contains(NaiveDate::from_ymd_opt(2024, 4, 23).unwrap()));
        assert!(!w.contains(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()));
    }

    #[test]
    fn test_first_weekday_is_start_weekday() {
        // 2024-04-03 is a Wednesday
        assert_eq!(window().first_weekday(), Weekday::Wed);
    }

    #[test]
    fn test_week_pages() {
        let w = window();
        assert_eq!(w.week_count(), 3);

        let days = w.visible_days(0);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], w.start_date);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());

        let last_week = w.visible_days(2);
        assert_eq!(last_week[0], NaiveDate::from_ymd_opt(2024, 4, 17).unwrap());
        // The tail of the last page runs past the bookable range
        assert!(!w.contains(last_week[6]));
    }

    #[test]
    fn test_slot_rows_and_times() {
        let w = window();
        assert_eq!(w.slot_rows(), 24); // 9:00-21:00 in 30-minute steps
        assert_eq!(w.row_time(0), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(w.row_time(1), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(w.row_time(23), NaiveTime::from_hms_opt(20, 30, 0).unwrap());
    }

    #[test]
    fn test_time_clipping() {
        let w = window();
        assert!(w.shows_start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(w.shows_start_time(NaiveTime::from_hms_opt(20, 30, 0).unwrap()));
        assert!(!w.shows_start_time(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
        assert!(!w.shows_start_time(NaiveTime::from_hms_opt(21, 0, 0).unwrap()));
    }
}
