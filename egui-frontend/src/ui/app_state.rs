//! # App State Module
//!
//! The central application state for the booking calendar.
//!
//! ## Key Types:
//! - `BookingCalendarApp` - Main application state struct
//!
//! ## State Management:
//! All state lives in one place: the validated slot catalog, the static
//! calendar window, the week cursor, the selection state machine, the
//! booking form bridge, and the retained event store the grid paints from.
//! The selection machine is the only writer of the selection and of event
//! styles; everything else reads.

use log::info;

use shared::SlotCatalog;

use crate::data::draft::DraftStore;
use crate::ui::components::calendar_renderer::events::EventStore;
use crate::ui::components::calendar_renderer::navigation::WeekCursor;
use crate::ui::components::calendar_renderer::types::CalendarWindow;
use crate::ui::state::form_state::BookingFormState;
use crate::ui::state::selection_state::BookingSelection;

/// Main application struct for the egui booking calendar
pub struct BookingCalendarApp {
    /// Validated slot data, immutable for the session
    pub catalog: SlotCatalog,
    /// Static view-window configuration
    pub window: CalendarWindow,
    /// Currently visible week page
    pub week_cursor: WeekCursor,
    /// The selection state machine
    pub selection: BookingSelection,
    /// Hidden form field + the two label surfaces
    pub form: BookingFormState,
    /// Renderer-facing event records, styles mutated in place on selection
    pub events: EventStore,
    /// Draft persistence; `None` when no user data directory exists
    pub draft_store: Option<DraftStore>,
}

impl BookingCalendarApp {
    /// Initialize the app: restore any previous selection from the draft,
    /// then build the event store so the restored slot is already
    /// highlighted when the first frame renders — no click is replayed.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: SlotCatalog,
        window: CalendarWindow,
        draft_store: Option<DraftStore>,
    ) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing booking calendar with {} slots", catalog.len());
        info!(
            "📅 Calendar window: {} days from {}, leftmost weekday {:?}",
            window.period_days,
            window.start_date,
            window.first_weekday()
        );

        crate::ui::fonts::setup_japanese_fonts(&cc.egui_ctx);

        let restored = draft_store
            .as_ref()
            .and_then(|store| store.load())
            .map(|draft| draft.booking_limit)
            .unwrap_or_default();
        let had_restored_value = !restored.is_empty();

        let mut form = if had_restored_value {
            BookingFormState::with_restored(restored)
        } else {
            BookingFormState::new()
        };
        let mut selection = BookingSelection::new();
        selection.restore_on_load(&catalog, &mut form);

        let events = EventStore::from_slots(catalog.slots(), selection.state());
        let week_cursor = WeekCursor::for_window(&window);

        let app = BookingCalendarApp {
            catalog,
            window,
            week_cursor,
            selection,
            form,
            events,
            draft_store,
        };

        // A restored id that no longer validates was cleared from the form;
        // drop the stale draft file as well.
        if had_restored_value && !app.form.has_selection() {
            app.persist_draft();
        }

        Ok(app)
    }
}
