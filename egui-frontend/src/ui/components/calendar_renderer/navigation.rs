//! Week paging over the bookable range.
//!
//! The grid always shows seven days; the cursor steps a week at a time and
//! is clamped so the visible page never leaves the configured window.

use log::info;

use super::types::CalendarWindow;

/// Which week page of the window is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    offset: u32,
    max_offset: u32,
}

impl WeekCursor {
    /// Cursor starting on the first week of the window.
    pub fn for_window(window: &CalendarWindow) -> Self {
        WeekCursor {
            offset: 0,
            max_offset: window.week_count().saturating_sub(1),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn can_go_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.offset < self.max_offset
    }

    /// Step back a week. Returns whether the page changed.
    pub fn navigate_to_previous_week(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.offset -= 1;
        info!("📅 Navigated to week page {}", self.offset);
        true
    }

    /// Step forward a week. Returns whether the page changed.
    pub fn navigate_to_next_week(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.offset += 1;
        info!("📅 Navigated to week page {}", self.offset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cursor() -> WeekCursor {
        let window = CalendarWindow::starting_today(NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
        WeekCursor::for_window(&window)
    }

    #[test]
    fn test_cursor_clamps_to_window() {
        let mut c = cursor();
        assert_eq!(c.offset(), 0);
        assert!(!c.can_go_previous());
        assert!(!c.navigate_to_previous_week());

        // 20 days = 3 week pages
        assert!(c.navigate_to_next_week());
        assert!(c.navigate_to_next_week());
        assert_eq!(c.offset(), 2);
        assert!(!c.can_go_next());
        assert!(!c.navigate_to_next_week());
        assert_eq!(c.offset(), 2);

        assert!(c.navigate_to_previous_week());
        assert_eq!(c.offset(), 1);
    }
}
