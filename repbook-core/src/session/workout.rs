//! Working form edits and session commits.

use crate::models::{FormField, Session, SetField, WorkoutForm};
use crate::session::SessionStore;
use anyhow::Result;
use log::info;

impl SessionStore {
    /// Replace one scalar field of the working form.
    pub fn update_field(&mut self, field: FormField, value: &str) -> &WorkoutForm {
        self.form = self.form.with_field(field, value);
        &self.form
    }

    /// Replace the weight or reps of the set at `index` in the working form.
    pub fn update_set(
        &mut self,
        index: usize,
        field: SetField,
        value: &str,
    ) -> Result<&WorkoutForm> {
        self.form = self.form.with_set(index, field, value)?;
        Ok(&self.form)
    }

    /// Commit the working form as a new session in the current unit, then
    /// reset the form.
    pub fn commit_session(&mut self) -> Result<Session> {
        let now = self.clock.now();
        let id = self.next_id(now);
        let form = std::mem::take(&mut self.form);
        let session = Session::commit(form, self.ledger.unit, id, now.date_naive());

        self.ledger.sessions.push(session.clone());
        self.save()?;
        info!(
            "Committed session {} for {:?} with best 1RM {}{}",
            session.id, session.form.exercise, session.best_1rm, session.unit
        );
        Ok(session)
    }
}
