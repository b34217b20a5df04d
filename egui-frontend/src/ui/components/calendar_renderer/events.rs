//! # Event Store Module
//!
//! The renderer-facing projection of the slot data. Slots are turned into
//! [`RenderEvent`] records once at startup; afterwards the grid draws from
//! the store every frame and the selection state machine mutates individual
//! event styles in place through the [`StyleSink`] capability. There is no
//! full rebuild on click.

use chrono::NaiveDateTime;
use log::warn;

use shared::Slot;

use crate::ui::state::selection_state::{SelectionState, StyleSink};

use super::styling::slot_style;
use super::types::StyleTriple;

/// One drawable calendar event: a slot plus its current selection-derived
/// style. The label is the availability symbol, not a time; the formatted
/// time only ever appears on the two selected-slot labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEvent {
    pub id: String,
    pub label: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub style: StyleTriple,
}

impl RenderEvent {
    /// Project a slot into its event record.
    pub fn from_slot(slot: &Slot, is_selected: bool) -> Self {
        debug_assert!(
            !is_selected || slot.state.is_bookable(),
            "a full slot must never be built as selected"
        );
        RenderEvent {
            id: slot.id.clone(),
            label: slot.state.symbol(),
            start: slot.start,
            end: slot.end(),
            style: slot_style(slot.state, is_selected),
        }
    }
}

/// Retained collection of the rendered events, with lookup by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<RenderEvent>,
}

impl EventStore {
    /// Build the store from the slot catalog and the current selection.
    ///
    /// A restored selection gets its highlight here, from the same style
    /// rule the click path uses — no click is replayed.
    pub fn from_slots(slots: &[Slot], selection: &SelectionState) -> Self {
        let mut store = EventStore::default();
        for slot in slots {
            store.add_event(RenderEvent::from_slot(slot, selection.is_selected(&slot.id)));
        }
        store
    }

    pub fn add_event(&mut self, event: RenderEvent) {
        self.events.push(event);
    }

    pub fn get_event_by_id(&self, id: &str) -> Option<&RenderEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// All events, in slot load order. The grid re-sorts by time as it
    /// places them, so order here is irrelevant.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }
}

impl StyleSink for EventStore {
    fn set_style(&mut self, id: &str, style: StyleTriple) {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => event.style = style,
            None => warn!("set_style for unknown event id: {}", id),
        }
    }
}
