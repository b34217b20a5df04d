//! Click routing between the rendered grid and the selection state machine,
//! plus draft persistence so a selection survives a restart.

use log::warn;

use crate::data::draft::BookingDraft;
use crate::ui::app_state::BookingCalendarApp;

impl BookingCalendarApp {
    /// Handle a click on a calendar event.
    ///
    /// The machine enforces the business rules (full slots are inert,
    /// re-clicks are idempotent); the draft is only rewritten when the
    /// field value actually changed.
    pub fn handle_slot_click(&mut self, clicked_id: &str) {
        let before = self.form.booking_limit().to_string();
        self.selection
            .on_slot_clicked(clicked_id, &self.catalog, &mut self.events, &mut self.form);
        if self.form.booking_limit() != before {
            self.persist_draft();
        }
    }

    /// Drop the current selection from the booking panel.
    pub fn clear_selection(&mut self) {
        let before = self.form.booking_limit().to_string();
        self.selection
            .clear(&self.catalog, &mut self.events, &mut self.form);
        if self.form.booking_limit() != before {
            self.persist_draft();
        }
    }

    /// Write the current field value to the draft store, or remove the
    /// draft when nothing is selected. A failed write only loses
    /// restore-after-restart, so it degrades to a warning.
    pub(crate) fn persist_draft(&self) {
        let Some(store) = &self.draft_store else {
            return;
        };
        let result = if self.form.has_selection() {
            store.save(&BookingDraft {
                booking_limit: self.form.booking_limit().to_string(),
            })
        } else {
            store.clear()
        };
        if let Err(e) = result {
            warn!("Failed to persist booking draft: {:#}", e);
        }
    }
}
