pub mod booking_panel;
pub mod calendar_renderer;
pub mod header;
