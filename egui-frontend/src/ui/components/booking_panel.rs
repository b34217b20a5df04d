//! Booking side panel: the second selected-slot label surface, the hidden
//! field value, the availability legend, and the clear-selection action.

use eframe::egui;

use crate::ui::app_state::BookingCalendarApp;
use crate::ui::components::calendar_renderer::styling;

impl BookingCalendarApp {
    pub fn draw_booking_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("予約内容");
        ui.separator();

        ui.label("選択中の予約枠:");
        if self.form.has_selection() {
            ui.horizontal(|ui| {
                if let Some(event) = self.events.get_event_by_id(self.form.booking_limit()) {
                    ui.label(
                        egui::RichText::new(event.label)
                            .color(event.style.text)
                            .strong(),
                    );
                }
                // Label surface #2: same string as the header label
                ui.strong(self.form.panel_label());
            });
        } else {
            ui.weak("未選択");
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.weak("枠ID:");
            if self.form.has_selection() {
                ui.monospace(self.form.booking_limit());
            } else {
                ui.monospace("-");
            }
        });

        ui.add_space(8.0);
        let clear = egui::Button::new("選択を解除");
        if ui.add_enabled(self.form.has_selection(), clear).clicked() {
            self.clear_selection();
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label("空き状況");
        legend_row(ui, "●", styling::available_text_color(), "予約可能");
        legend_row(ui, "▲", styling::limited_text_color(), "残りわずか");
        legend_row(ui, "×", styling::full_text_color(), "満席");
    }
}

fn legend_row(ui: &mut egui::Ui, symbol: &str, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(symbol).color(color).strong());
        ui.label(text);
    });
}
