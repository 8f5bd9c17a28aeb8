//! Routine templates.

use crate::models::{RoutineTemplate, WorkoutForm};
use crate::session::SessionStore;
use anyhow::Result;
use log::info;

impl SessionStore {
    /// Append the working form, as-is, to the saved routines.
    pub fn save_routine(&mut self) -> Result<()> {
        self.ledger.routine_templates.push(self.form.clone());
        self.save()?;
        info!(
            "Saved routine #{} ({})",
            self.ledger.routine_templates.len() - 1,
            self.form.routine_label()
        );
        Ok(())
    }

    pub fn routines(&self) -> &[RoutineTemplate] {
        &self.ledger.routine_templates
    }

    pub fn routine(&self, index: usize) -> Option<&RoutineTemplate> {
        self.ledger.routine_templates.get(index)
    }

    /// Replace the working form with `template`, discarding unsaved edits.
    pub fn load_routine(&mut self, template: RoutineTemplate) -> &WorkoutForm {
        self.form = template;
        &self.form
    }

    /// Load the saved routine at `index` into the working form.
    pub fn load_routine_at(&mut self, index: usize) -> Result<&WorkoutForm> {
        let template = self.routine(index).cloned().ok_or_else(|| {
            anyhow::anyhow!(
                "No routine #{} ({} saved)",
                index,
                self.ledger.routine_templates.len()
            )
        })?;
        Ok(self.load_routine(template))
    }
}
