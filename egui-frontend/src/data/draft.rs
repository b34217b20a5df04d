//! # Booking Draft Module
//!
//! Persists the pending selection so a half-finished booking survives a
//! restart. The draft is a tiny JSON file under the user data directory;
//! losing it only loses restore, so read/write problems never abort the app.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

pub const DRAFT_FILE_NAME: &str = "draft.json";

/// The persisted pending selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// The hidden form field value: the selected slot id
    pub booking_limit: String,
}

/// File-backed store for the booking draft.
#[derive(Debug, Clone)]
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn new(dir: PathBuf) -> Self {
        DraftStore { dir }
    }

    /// Store under the platform user data directory, when one exists.
    pub fn in_user_data_dir() -> Option<Self> {
        dirs::data_dir().map(|base| DraftStore::new(base.join("booking-calendar")))
    }

    fn draft_path(&self) -> PathBuf {
        self.dir.join(DRAFT_FILE_NAME)
    }

    /// Read the draft, if a readable one exists. An unparseable file is
    /// logged and treated as absent.
    pub fn load(&self) -> Option<BookingDraft> {
        let path = self.draft_path();
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(draft) => Some(draft),
            Err(e) => {
                warn!("Ignoring unreadable booking draft {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, draft: &BookingDraft) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create draft directory {}", self.dir.display()))?;
        let contents = serde_json::to_string_pretty(draft)?;
        fs::write(self.draft_path(), contents)
            .with_context(|| format!("failed to write draft {}", self.draft_path().display()))?;
        Ok(())
    }

    /// Remove the draft. A missing file counts as cleared.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.draft_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("failed to remove draft {}", self.draft_path().display())
            }),
        }
    }
}
