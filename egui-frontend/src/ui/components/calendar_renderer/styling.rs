//! # Calendar Styling Module
//!
//! Centralizes every color and size used by the week grid, plus the one rule
//! that maps a slot's availability state and selection status to the colors
//! its event is drawn with.
//!
//! ## Purpose:
//! Both the initial event build and the click-driven style updates go through
//! [`slot_style`], so a restored selection and a clicked selection can never
//! look different.

use eframe::egui;

use shared::AvailabilityState;

use super::types::StyleTriple;

/// Text color for slots open for booking (●)
pub fn available_text_color() -> egui::Color32 {
    egui::Color32::from_rgb(0x3c, 0x8d, 0xbc) // Blue
}

/// Text color for slots with few seats left (▲)
pub fn limited_text_color() -> egui::Color32 {
    egui::Color32::from_rgb(0x00, 0xa6, 0x5a) // Green
}

/// Text color for fully booked slots (×)
pub fn full_text_color() -> egui::Color32 {
    egui::Color32::from_rgb(0x99, 0x99, 0x99) // Gray
}

/// Background of an unselected event
pub fn event_background() -> egui::Color32 {
    egui::Color32::WHITE
}

/// Background of the currently selected event
pub fn selected_background() -> egui::Color32 {
    egui::Color32::from_rgb(0xff, 0xea, 0x58) // Yellow
}

/// Border of the currently selected event
pub fn selected_border() -> egui::Color32 {
    egui::Color32::from_rgb(0xff, 0x5c, 0x88) // Pink
}

/// Map a slot's availability state and selection status to its event colors.
///
/// Unselected events use a white background with a border matching the text
/// color. The selected event keeps its text color but gets the yellow/pink
/// highlight pair. Callers guarantee a `Full` slot is never passed with
/// `is_selected` set; the selection state machine refuses to select one.
pub fn slot_style(state: AvailabilityState, is_selected: bool) -> StyleTriple {
    let text = match state {
        AvailabilityState::Available => available_text_color(),
        AvailabilityState::Limited => limited_text_color(),
        AvailabilityState::Full => full_text_color(),
    };

    if is_selected {
        StyleTriple {
            text,
            background: selected_background(),
            border: selected_border(),
        }
    } else {
        StyleTriple {
            text,
            background: event_background(),
            border: text,
        }
    }
}

/// Weekend column tinting, drawn as decorative background fills behind the
/// day columns. Never clickable and never part of the event store.
pub mod weekend {
    use eframe::egui;

    /// Background tint for Sunday columns
    pub fn sunday_tint() -> egui::Color32 {
        egui::Color32::from_rgb(0xf8, 0xe0, 0xe6)
    }

    /// Background tint for Saturday columns
    pub fn saturday_tint() -> egui::Color32 {
        egui::Color32::from_rgb(0xe0, 0xf2, 0xf7)
    }
}

/// Grid chrome styling constants
pub mod grid {
    use eframe::egui;

    /// Height of one 30-minute row
    pub const ROW_HEIGHT: f32 = 28.0;

    /// Width reserved on the left for the time labels
    pub const TIME_LABEL_WIDTH: f32 = 52.0;

    /// Height of the day header row
    pub const HEADER_HEIGHT: f32 = 30.0;

    /// Gap between day columns
    pub const COLUMN_SPACING: f32 = 2.0;

    /// Font size for day headers and time labels
    pub const LABEL_FONT_SIZE: f32 = 12.0;

    /// Font size for the availability symbol on an event block
    pub const EVENT_FONT_SIZE: f32 = 13.0;

    /// Hairline color for the hour lines
    pub fn line_color() -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(150, 150, 150, 120)
    }

    /// Background color for day headers
    pub fn header_background() -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 180)
    }

    /// Text color for day headers and time labels
    pub fn label_color() -> egui::Color32 {
        egui::Color32::from_rgb(60, 60, 60)
    }

    /// Overlay for day columns past the bookable range
    pub fn disabled_day_overlay() -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(180, 180, 180, 90)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_styles_per_state() {
        let available = slot_style(AvailabilityState::Available, false);
        assert_eq!(available.text, available_text_color());
        assert_eq!(available.background, event_background());
        assert_eq!(available.border, available_text_color());

        let limited = slot_style(AvailabilityState::Limited, false);
        assert_eq!(limited.text, limited_text_color());
        assert_eq!(limited.border, limited_text_color());

        let full = slot_style(AvailabilityState::Full, false);
        assert_eq!(full.text, full_text_color());
        assert_eq!(full.border, full_text_color());
        assert_eq!(full.background, event_background());
    }

    #[test]
    fn test_selected_overrides_background_and_border_only() {
        let selected = slot_style(AvailabilityState::Available, true);
        assert_eq!(selected.text, available_text_color());
        assert_eq!(selected.background, selected_background());
        assert_eq!(selected.border, selected_border());

        let selected_limited = slot_style(AvailabilityState::Limited, true);
        assert_eq!(selected_limited.text, limited_text_color());
        assert_eq!(selected_limited.background, selected_background());
        assert_eq!(selected_limited.border, selected_border());
    }

    #[test]
    fn test_mapper_is_deterministic() {
        assert_eq!(
            slot_style(AvailabilityState::Available, true),
            slot_style(AvailabilityState::Available, true)
        );
        assert_eq!(
            slot_style(AvailabilityState::Full, false),
            slot_style(AvailabilityState::Full, false)
        );
    }
}
