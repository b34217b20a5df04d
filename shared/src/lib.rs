use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every booking slot is exactly this long; the end time is always derived
/// from the start and never read from input data.
pub const SLOT_DURATION_MINUTES: i64 = 30;

/// Availability of a booking slot, source-encoded as a one-character symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityState {
    /// Open for booking (●)
    Available,
    /// Only a few seats left (▲)
    Limited,
    /// Fully booked, cannot be selected (×)
    Full,
}

impl AvailabilityState {
    /// Parse the source symbol. Anything outside ● / ▲ / × is rejected.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "●" => Some(AvailabilityState::Available),
            "▲" => Some(AvailabilityState::Limited),
            "×" => Some(AvailabilityState::Full),
            _ => None,
        }
    }

    /// The display symbol shown on the calendar event itself.
    pub fn symbol(&self) -> &'static str {
        match self {
            AvailabilityState::Available => "●",
            AvailabilityState::Limited => "▲",
            AvailabilityState::Full => "×",
        }
    }

    /// Whether a slot in this state can become the current selection.
    pub fn is_bookable(&self) -> bool {
        !matches!(self, AvailabilityState::Full)
    }
}

/// A slot record as it arrives from the data source, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSlot {
    /// Unique slot identifier
    pub id: String,
    /// Start datetime string, "YYYY-MM-DDTHH:MM" (seconds optional)
    pub start: String,
    /// Availability symbol: ● / ▲ / ×
    pub state: String,
}

/// Construction-time validation failures for slot data.
///
/// Malformed input is a precondition violation: loading fails with a
/// descriptive error instead of letting bad records reach the calendar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotDataError {
    #[error("slot record has an empty id")]
    EmptyId,
    #[error("slot {id}: unparseable start datetime {value:?}")]
    UnparseableStart { id: String, value: String },
    #[error("slot {id}: unknown availability symbol {symbol:?}")]
    UnknownSymbol { id: String, symbol: String },
    #[error("duplicate slot id {id:?}")]
    DuplicateId { id: String },
}

/// A validated, immutable booking slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: String,
    pub start: NaiveDateTime,
    pub state: AvailabilityState,
}

impl Slot {
    /// Validate a raw record into a slot.
    pub fn from_raw(raw: &RawSlot) -> Result<Self, SlotDataError> {
        if raw.id.is_empty() {
            return Err(SlotDataError::EmptyId);
        }

        let start = parse_start_datetime(&raw.start).ok_or_else(|| {
            SlotDataError::UnparseableStart {
                id: raw.id.clone(),
                value: raw.start.clone(),
            }
        })?;

        let state = AvailabilityState::from_symbol(raw.state.trim()).ok_or_else(|| {
            SlotDataError::UnknownSymbol {
                id: raw.id.clone(),
                symbol: raw.state.clone(),
            }
        })?;

        Ok(Slot {
            id: raw.id.clone(),
            start,
            state,
        })
    }

    /// End of the slot: start plus the fixed 30-minute duration.
    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::minutes(SLOT_DURATION_MINUTES)
    }
}

fn parse_start_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// The full set of slots for a page session, with id lookup.
///
/// Built once at load time and never mutated afterwards. Construction is
/// fail-fast: any invalid record or duplicate id aborts the whole load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// Validate a batch of raw records into a catalog.
    pub fn from_raw(raws: &[RawSlot]) -> Result<Self, SlotDataError> {
        let mut slots: Vec<Slot> = Vec::with_capacity(raws.len());
        for raw in raws {
            let slot = Slot::from_raw(raw)?;
            if slots.iter().any(|existing| existing.id == slot.id) {
                return Err(SlotDataError::DuplicateId { id: slot.id });
            }
            slots.push(slot);
        }
        Ok(SlotCatalog { slots })
    }

    /// Look up a slot by id.
    pub fn get(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// All slots, in load order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(id: &str, start: &str, state: &str) -> RawSlot {
        RawSlot {
            id: id.to_string(),
            start: start.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(
            AvailabilityState::from_symbol("●"),
            Some(AvailabilityState::Available)
        );
        assert_eq!(
            AvailabilityState::from_symbol("▲"),
            Some(AvailabilityState::Limited)
        );
        assert_eq!(
            AvailabilityState::from_symbol("×"),
            Some(AvailabilityState::Full)
        );
        assert_eq!(AvailabilityState::from_symbol("?"), None);
        assert_eq!(AvailabilityState::from_symbol(""), None);
    }

    #[test]
    fn test_slot_from_raw_derives_end() {
        let slot = Slot::from_raw(&raw("slot-1", "2024-04-01T09:00", "●")).unwrap();

        let expected_start = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(slot.start, expected_start);
        assert_eq!(slot.end(), expected_start + Duration::minutes(30));
        assert_eq!(slot.state, AvailabilityState::Available);
    }

    #[test]
    fn test_slot_from_raw_accepts_seconds() {
        let slot = Slot::from_raw(&raw("slot-1", "2024-04-01T09:00:00", "▲")).unwrap();
        assert_eq!(slot.state, AvailabilityState::Limited);
    }

    #[test]
    fn test_slot_from_raw_rejects_bad_datetime() {
        let err = Slot::from_raw(&raw("slot-1", "April 1st", "●")).unwrap_err();
        assert_eq!(
            err,
            SlotDataError::UnparseableStart {
                id: "slot-1".to_string(),
                value: "April 1st".to_string(),
            }
        );
    }

    #[test]
    fn test_slot_from_raw_rejects_unknown_symbol() {
        let err = Slot::from_raw(&raw("slot-1", "2024-04-01T09:00", "◎")).unwrap_err();
        assert_eq!(
            err,
            SlotDataError::UnknownSymbol {
                id: "slot-1".to_string(),
                symbol: "◎".to_string(),
            }
        );
    }

    #[test]
    fn test_slot_from_raw_rejects_empty_id() {
        let err = Slot::from_raw(&raw("", "2024-04-01T09:00", "●")).unwrap_err();
        assert_eq!(err, SlotDataError::EmptyId);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let raws = vec![
            raw("slot-1", "2024-04-01T09:00", "●"),
            raw("slot-1", "2024-04-01T09:30", "▲"),
        ];
        let err = SlotCatalog::from_raw(&raws).unwrap_err();
        assert_eq!(
            err,
            SlotDataError::DuplicateId {
                id: "slot-1".to_string(),
            }
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let raws = vec![
            raw("slot-1", "2024-04-01T09:00", "●"),
            raw("slot-2", "2024-04-01T09:30", "×"),
        ];
        let catalog = SlotCatalog::from_raw(&raws).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("slot-2").unwrap().state,
            AvailabilityState::Full
        );
        assert!(catalog.get("slot-3").is_none());
    }

    #[test]
    fn test_raw_slot_deserializes_from_json() {
        let json = r#"[{"id": "slot-1", "start": "2024-04-01T09:00", "state": "●"}]"#;
        let raws: Vec<RawSlot> = serde_json::from_str(json).unwrap();
        assert_eq!(raws, vec![raw("slot-1", "2024-04-01T09:00", "●")]);
    }
}
