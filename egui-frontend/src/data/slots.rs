//! # Slot Loading Module
//!
//! Reads the slots file and validates it into a [`SlotCatalog`].
//!
//! ## Data Flow:
//! 1. Read the JSON file of raw slot records
//! 2. Deserialize into `RawSlot` records
//! 3. Validate into a `SlotCatalog` (fail fast on any bad record)
//!
//! Loading happens once at startup; any failure aborts with a descriptive
//! error rather than letting malformed slots reach the calendar.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use shared::{RawSlot, SlotCatalog};

/// Load and validate the slots file.
pub fn load_slots(path: &Path) -> Result<SlotCatalog> {
    info!("📊 Loading booking slots from {}", path.display());

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read slots file {}", path.display()))?;
    let catalog = parse_slots(&contents)
        .with_context(|| format!("invalid slot data in {}", path.display()))?;

    info!("📊 Loaded {} booking slots", catalog.len());
    Ok(catalog)
}

/// Parse a JSON array of raw slot records into a validated catalog.
pub fn parse_slots(json: &str) -> Result<SlotCatalog> {
    let raws: Vec<RawSlot> =
        serde_json::from_str(json).context("slots file is not a JSON array of slot records")?;
    Ok(SlotCatalog::from_raw(&raws)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use shared::AvailabilityState;

    #[test]
    fn test_parse_slots() {
        let json = r#"[
            {"id": "slot-1", "start": "2024-04-01T09:00", "state": "●"},
            {"id": "slot-2", "start": "2024-04-01T09:30", "state": "×"}
        ]"#;
        let catalog = parse_slots(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("slot-2").unwrap().state,
            AvailabilityState::Full
        );
    }

    #[test]
    fn test_parse_slots_rejects_bad_record() {
        let json = r#"[{"id": "slot-1", "start": "2024-04-01T09:00", "state": "?"}]"#;
        let err = parse_slots(json).unwrap_err();
        assert!(err.to_string().contains("unknown availability symbol"));
    }

    #[test]
    fn test_parse_slots_rejects_non_array() {
        assert!(parse_slots("{}").is_err());
    }

    #[test]
    fn test_load_slots_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "slot-1", "start": "2024-04-01T09:00", "state": "▲"}}]"#
        )
        .unwrap();

        let catalog = load_slots(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_slots_missing_file_names_path() {
        let err = load_slots(Path::new("/nonexistent/slots.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/slots.json"));
    }
}
