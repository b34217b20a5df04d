//! # Week Grid Rendering Module
//!
//! Draws the booking calendar: day headers, the time gutter, weekend
//! tinting, and the event blocks, all painted from the retained event
//! store. Clicking an event block reports its id; the app routes that into
//! the selection state machine, which mutates the stored styles in place —
//! the next frame simply paints the updated store.
//!
//! ## Purpose:
//! This is the rendering-engine adapter. It owns no selection logic: it
//! paints `RenderEvent`s exactly as styled and reports clicks, nothing else.

use chrono::{Datelike, Timelike, Weekday};
use eframe::egui;

use crate::ui::app_state::BookingCalendarApp;

use super::formatting::{format_day_header, format_time_label};
use super::layout::WeekGridLayout;
use super::styling::{grid, weekend};

impl BookingCalendarApp {
    /// Draw the calendar grid and process any event click.
    pub fn draw_calendar_section(&mut self, ui: &mut egui::Ui) {
        let clicked = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| self.draw_week_grid(ui))
            .inner;

        if let Some(id) = clicked {
            self.handle_slot_click(&id);
        }
    }

    /// Paint one week page. Returns the id of a clicked event, if any.
    fn draw_week_grid(&self, ui: &mut egui::Ui) -> Option<String> {
        let rows = self.window.slot_rows();
        let height = WeekGridLayout::required_height(rows);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::hover(),
        );
        let layout = WeekGridLayout::new(rect, rows);
        let days = self.window.visible_days(self.week_cursor.offset());
        let painter = ui.painter();

        // Day columns: header, weekend tint, out-of-range overlay
        for (col, date) in days.iter().enumerate() {
            let header_rect = layout.header_rect(col);
            painter.rect_filled(
                header_rect,
                egui::Rounding::same(2.0),
                grid::header_background(),
            );
            painter.text(
                header_rect.center(),
                egui::Align2::CENTER_CENTER,
                format_day_header(*date),
                egui::FontId::proportional(grid::LABEL_FONT_SIZE),
                grid::label_color(),
            );

            let column_rect = layout.column_rect(col);
            match date.weekday() {
                Weekday::Sun => {
                    painter.rect_filled(column_rect, 0.0, weekend::sunday_tint());
                }
                Weekday::Sat => {
                    painter.rect_filled(column_rect, 0.0, weekend::saturday_tint());
                }
                _ => {}
            }
            if !self.window.contains(*date) {
                painter.rect_filled(column_rect, 0.0, grid::disabled_day_overlay());
            }
        }

        // Time gutter and hour lines
        for row in 0..rows {
            let time = self.window.row_time(row);
            let label_rect = layout.time_label_rect(row);
            painter.text(
                egui::pos2(label_rect.right() - 6.0, label_rect.top()),
                egui::Align2::RIGHT_TOP,
                format_time_label(time),
                egui::FontId::proportional(grid::LABEL_FONT_SIZE),
                grid::label_color(),
            );
            if time.minute() == 0 {
                painter.line_segment(
                    [
                        egui::pos2(layout.column_left(0), layout.row_y(row)),
                        egui::pos2(rect.right(), layout.row_y(row)),
                    ],
                    egui::Stroke::new(1.0, grid::line_color()),
                );
            }
        }

        // Event blocks from the store
        let mut clicked = None;
        for event in self.events.events() {
            let Some(col) = days.iter().position(|d| *d == event.start.date()) else {
                continue;
            };
            if !self.window.shows_start_time(event.start.time()) {
                // Outside the configured time-of-day bounds: clipped
                continue;
            }

            let event_rect =
                layout.event_rect(col, &self.window, event.start.time(), event.end.time());
            painter.rect_filled(event_rect, egui::Rounding::same(3.0), event.style.background);
            painter.rect_stroke(
                event_rect,
                egui::Rounding::same(3.0),
                egui::Stroke::new(1.5, event.style.border),
            );
            painter.text(
                event_rect.center(),
                egui::Align2::CENTER_CENTER,
                event.label,
                egui::FontId::proportional(grid::EVENT_FONT_SIZE),
                event.style.text,
            );

            let response = ui.interact(
                event_rect,
                egui::Id::new(("booking_slot", &event.id)),
                egui::Sense::click(),
            );
            let bookable = self
                .catalog
                .get(&event.id)
                .map(|slot| slot.state.is_bookable())
                .unwrap_or(false);
            let response = if bookable {
                response.on_hover_cursor(egui::CursorIcon::PointingHand)
            } else {
                response
            };
            if response.clicked() {
                clicked = Some(event.id.clone());
            }
        }

        clicked
    }
}
