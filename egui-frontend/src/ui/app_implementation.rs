//! The eframe frame loop: header on top, booking panel on the right, the
//! week grid in the center. All click handling runs to completion inside
//! one `update` call, so a revert-then-highlight pair can never interleave
//! with another click.

use eframe::egui;

use crate::ui::app_state::BookingCalendarApp;

impl eframe::App for BookingCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            self.draw_header(ui);
        });

        egui::SidePanel::right("booking_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.draw_booking_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_calendar_section(ui);
        });
    }
}
