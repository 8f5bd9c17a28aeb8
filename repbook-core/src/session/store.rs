use crate::clock::{Clock, SystemClock};
use crate::ledger::Ledger;
use crate::models::{Unit, WorkoutForm};
use crate::store::{FileStore, KeyValueStore};
use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;
use std::path::Path;

pub struct SessionStore {
    pub(super) ledger: Ledger,
    pub(super) form: WorkoutForm,
    backing: Box<dyn KeyValueStore>,
    pub(super) clock: Box<dyn Clock>,
    last_id: i64,
}

impl SessionStore {
    pub fn open(backing: Box<dyn KeyValueStore>) -> Self {
        Self::with_clock(backing, Box::new(SystemClock))
    }

    /// Open a directory-backed store at `path`.
    pub fn open_path(path: &Path) -> Result<Self> {
        Ok(Self::open(Box::new(FileStore::open(path)?)))
    }

    pub fn with_clock(backing: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let ledger = Ledger::load(backing.as_ref());
        let last_id = ledger.sessions.iter().map(|s| s.id).max().unwrap_or(0);
        debug!(
            "Loaded ledger with {} sessions, {} routines, unit {}",
            ledger.sessions.len(),
            ledger.routine_templates.len(),
            ledger.unit
        );

        Self {
            ledger,
            form: WorkoutForm::default(),
            backing,
            clock,
            last_id,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    pub fn unit(&self) -> Unit {
        self.ledger.unit
    }

    pub(super) fn save(&mut self) -> Result<()> {
        self.ledger.save(self.backing.as_mut())
    }

    /// Millisecond timestamp, bumped past the previous id when the clock has
    /// not moved on.
    pub(super) fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}
