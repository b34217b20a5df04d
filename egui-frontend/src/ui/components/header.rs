//! Header bar: title, week navigation, and the first of the two
//! selected-slot label surfaces.

use eframe::egui;

use crate::ui::app_state::BookingCalendarApp;
use crate::ui::components::calendar_renderer::formatting::format_day_header;

impl BookingCalendarApp {
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("予約カレンダー");

            ui.add_space(12.0);

            let prev = egui::Button::new("← 前の週");
            if ui
                .add_enabled(self.week_cursor.can_go_previous(), prev)
                .clicked()
            {
                self.week_cursor.navigate_to_previous_week();
            }
            let next = egui::Button::new("次の週 →");
            if ui.add_enabled(self.week_cursor.can_go_next(), next).clicked() {
                self.week_cursor.navigate_to_next_week();
            }

            ui.add_space(8.0);
            ui.label(self.visible_range_label());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Label surface #1: mirrors the booking panel label exactly
                if self.form.has_selection() {
                    ui.strong(self.form.header_label());
                    ui.label("選択中:");
                } else {
                    ui.weak("予約枠をクリックして選択してください");
                }
            });
        });
        ui.add_space(4.0);
    }

    /// "4/3 (水) 〜 4/9 (火)" for the currently visible week page.
    fn visible_range_label(&self) -> String {
        let days = self.window.visible_days(self.week_cursor.offset());
        format!(
            "{} 〜 {}",
            format_day_header(days[0]),
            format_day_header(days[6])
        )
    }
}
