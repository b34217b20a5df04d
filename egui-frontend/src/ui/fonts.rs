//! Font setup for the Japanese labels.
//!
//! The selected-slot labels and the grid chrome use CJK text, so a
//! Japanese-capable system font is registered at startup when one can be
//! found. Falls back to egui's default fonts otherwise.

use eframe::egui;
use log::{info, warn};

const JAPANESE_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Regular.otf",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
];

/// Register the first Japanese font found on the system as a fallback for
/// both font families.
pub fn setup_japanese_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    for path in JAPANESE_FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        fonts
            .font_data
            .insert("japanese".to_owned(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push("japanese".to_owned());
        }
        ctx.set_fonts(fonts);
        info!("Loaded Japanese font from {}", path);
        return;
    }
    warn!("No Japanese font found; labels may render with missing glyphs");
}
