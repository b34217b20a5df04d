//! # Selection State Module
//!
//! The stateful core of the booking calendar: which single slot is currently
//! chosen for the booking form, and how that choice reacts to clicks.
//!
//! ## Responsibilities:
//! - Hold the at-most-one selected slot id
//! - Process event clicks (guarding fully booked slots)
//! - Revert/apply event highlight styles through the [`StyleSink`] capability
//! - Keep the hidden form field and both labels in sync with the selection
//! - Restore a previously submitted selection at startup
//!
//! ## Purpose:
//! Style mutation is abstracted behind [`StyleSink`] so this machine never
//! touches egui directly and is fully testable with a recording fake.

use log::{error, info, warn};

use shared::SlotCatalog;

use crate::ui::components::calendar_renderer::formatting::format_start_label;
use crate::ui::components::calendar_renderer::styling::slot_style;
use crate::ui::components::calendar_renderer::types::StyleTriple;
use crate::ui::state::form_state::BookingFormState;

/// Capability for mutating the style of an already-rendered event in place.
///
/// Implemented by the event store; the selection machine depends only on
/// this interface, never on the renderer itself.
pub trait StyleSink {
    fn set_style(&mut self, id: &str, style: StyleTriple);
}

/// The single selected slot, if any.
///
/// Invariants: at most one id is held, and a fully booked slot's id is never
/// stored — both enforced by [`BookingSelection`], the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: Option<String>,
}

impl SelectionState {
    /// State with the given slot already selected. The caller asserts the
    /// slot exists and is bookable; the restore path validates before
    /// constructing one of these.
    pub fn selecting(id: impl Into<String>) -> Self {
        SelectionState {
            selected_id: Some(id.into()),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// The booking-slot selection state machine.
#[derive(Debug, Default)]
pub struct BookingSelection {
    state: SelectionState,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Handle a click on a rendered event.
    ///
    /// Clicking a fully booked slot is inert. Otherwise the previous
    /// selection (if different) reverts to its base style, the clicked slot
    /// becomes the selection and gets the highlight, and the form field and
    /// both labels follow. Re-clicking the selected slot just re-applies the
    /// same values.
    pub fn on_slot_clicked(
        &mut self,
        clicked_id: &str,
        catalog: &SlotCatalog,
        styles: &mut dyn StyleSink,
        form: &mut BookingFormState,
    ) {
        let Some(slot) = catalog.get(clicked_id) else {
            // The grid only emits clicks for events it rendered, so this is
            // a programming-logic condition, not a user-facing error.
            debug_assert!(false, "click for unknown slot id {clicked_id}");
            error!("📅 Ignoring click for unknown slot id: {}", clicked_id);
            return;
        };

        if !slot.state.is_bookable() {
            info!("📅 Ignoring click on fully booked slot: {}", clicked_id);
            return;
        }

        if let Some(old_id) = self.state.selected_id.clone() {
            if old_id != clicked_id {
                if let Some(old_slot) = catalog.get(&old_id) {
                    styles.set_style(&old_id, slot_style(old_slot.state, false));
                }
            }
        }

        self.state.selected_id = Some(clicked_id.to_string());
        styles.set_style(clicked_id, slot_style(slot.state, true));
        form.set_selection(clicked_id, &format_start_label(slot.start));
        info!("📅 Selected slot {} ({})", clicked_id, form.panel_label());
    }

    /// Restore a previously submitted selection once at initialization.
    ///
    /// Runs against the form value supplied by the restore mechanism. The
    /// event highlight for this case comes from the event build, not from
    /// replaying a click; this only sets the machine state and the labels.
    /// A stale id (no longer in the slot data) or a fully booked id clears
    /// the field instead — restore never violates the selection invariants.
    pub fn restore_on_load(&mut self, catalog: &SlotCatalog, form: &mut BookingFormState) {
        let restored = form.booking_limit().to_string();
        if restored.is_empty() {
            return;
        }

        match catalog.get(&restored) {
            Some(slot) if slot.state.is_bookable() => {
                self.state = SelectionState::selecting(restored.clone());
                let label = format_start_label(slot.start);
                form.set_selection(&restored, &label);
                info!("📅 Restored selection {} ({})", restored, label);
            }
            Some(_) => {
                warn!("📅 Restored selection {} is fully booked, clearing", restored);
                form.clear_selection();
            }
            None => {
                warn!("📅 Restored selection {} no longer exists, clearing", restored);
                form.clear_selection();
            }
        }
    }

    /// Drop the current selection: revert its event style and empty the
    /// form field and labels.
    pub fn clear(
        &mut self,
        catalog: &SlotCatalog,
        styles: &mut dyn StyleSink,
        form: &mut BookingFormState,
    ) {
        if let Some(old_id) = self.state.selected_id.take() {
            if let Some(old_slot) = catalog.get(&old_id) {
                styles.set_style(&old_id, slot_style(old_slot.state, false));
            }
            form.clear_selection();
            info!("📅 Cleared selection {}", old_id);
        }
    }
}
