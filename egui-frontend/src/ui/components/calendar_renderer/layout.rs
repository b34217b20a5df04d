//! Week-grid geometry: where the time gutter, day headers, day columns and
//! event blocks land inside the allocated area. Pure math over `Rect`s so
//! the placement rules can be tested without drawing anything.

use chrono::NaiveTime;
use eframe::egui::{pos2, Rect};

use shared::SLOT_DURATION_MINUTES;

use super::styling::grid;
use super::types::CalendarWindow;

/// Geometry for one laid-out week page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekGridLayout {
    /// Full area including the header row and the time gutter
    pub area: Rect,
    /// Width of one day column
    pub col_width: f32,
    /// Number of 30-minute rows
    pub rows: u32,
}

impl WeekGridLayout {
    pub fn new(area: Rect, rows: u32) -> Self {
        let usable = area.width() - grid::TIME_LABEL_WIDTH - 7.0 * grid::COLUMN_SPACING;
        WeekGridLayout {
            area,
            col_width: (usable / 7.0).max(0.0),
            rows,
        }
    }

    /// Height needed for the header row plus all slot rows.
    pub fn required_height(rows: u32) -> f32 {
        grid::HEADER_HEIGHT + rows as f32 * grid::ROW_HEIGHT
    }

    /// Top edge of the slot rows, just under the day headers.
    pub fn grid_top(&self) -> f32 {
        self.area.top() + grid::HEADER_HEIGHT
    }

    /// Bottom edge of the slot rows.
    pub fn grid_bottom(&self) -> f32 {
        self.grid_top() + self.rows as f32 * grid::ROW_HEIGHT
    }

    /// Left edge of a day column (0-based, leftmost day first).
    pub fn column_left(&self, col: usize) -> f32 {
        self.area.left()
            + grid::TIME_LABEL_WIDTH
            + grid::COLUMN_SPACING
            + col as f32 * (self.col_width + grid::COLUMN_SPACING)
    }

    /// Header cell above a day column.
    pub fn header_rect(&self, col: usize) -> Rect {
        Rect::from_min_max(
            pos2(self.column_left(col), self.area.top()),
            pos2(
                self.column_left(col) + self.col_width,
                self.area.top() + grid::HEADER_HEIGHT,
            ),
        )
    }

    /// Full-height body of a day column, under its header.
    pub fn column_rect(&self, col: usize) -> Rect {
        Rect::from_min_max(
            pos2(self.column_left(col), self.grid_top()),
            pos2(self.column_left(col) + self.col_width, self.grid_bottom()),
        )
    }

    /// Y of the top of a slot row.
    pub fn row_y(&self, row: u32) -> f32 {
        self.grid_top() + row as f32 * grid::ROW_HEIGHT
    }

    /// Gutter cell for a row's time label.
    pub fn time_label_rect(&self, row: u32) -> Rect {
        Rect::from_min_max(
            pos2(self.area.left(), self.row_y(row)),
            pos2(
                self.area.left() + grid::TIME_LABEL_WIDTH,
                self.row_y(row) + grid::ROW_HEIGHT,
            ),
        )
    }

    /// Block for an event in a day column, placed by its times-of-day.
    ///
    /// The caller has already checked the start lands on the grid; an end
    /// past the bottom bound is clamped — that is the clipping contract.
    pub fn event_rect(
        &self,
        col: usize,
        window: &CalendarWindow,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Rect {
        let row_span = |time: NaiveTime| {
            (time - window.slot_min_time).num_minutes() as f32 / SLOT_DURATION_MINUTES as f32
        };
        let top = self.grid_top() + row_span(start) * grid::ROW_HEIGHT;
        let bottom = (self.grid_top() + row_span(end) * grid::ROW_HEIGHT).min(self.grid_bottom());

        Rect::from_min_max(
            pos2(self.column_left(col) + 1.0, top + 1.0),
            pos2(self.column_left(col) + self.col_width - 1.0, bottom - 1.0),
        )
    }
}
