use std::path::PathBuf;

use eframe::egui;
use log::{error, info};

mod data;
mod ui;

use data::draft::DraftStore;
use ui::components::calendar_renderer::types::CalendarWindow;
use ui::BookingCalendarApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting booking calendar egui application");

    // Slots file path from the first argument, with a sensible default
    let slots_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/slots.json"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Good size for grid + booking panel
            .with_min_inner_size([900.0, 600.0])
            .with_title("予約カレンダー")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Booking Calendar",
        options,
        Box::new(move |cc| {
            let catalog = match data::slots::load_slots(&slots_path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("Failed to load booking slots: {:#}", e);
                    return Err(format!("Failed to load booking slots: {:#}", e).into());
                }
            };

            let window = CalendarWindow::starting_today(chrono::Local::now().date_naive());
            let draft_store = DraftStore::in_user_data_dir();

            match BookingCalendarApp::new(cc, catalog, window, draft_store) {
                Ok(app) => {
                    info!("Successfully initialized booking calendar app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
