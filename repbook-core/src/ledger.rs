//! The persisted aggregate: committed sessions, routine templates and the unit
//! preference.

use anyhow::Result;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::models::{RoutineTemplate, Session, Unit};
use crate::store::KeyValueStore;

pub const SESSIONS_KEY: &str = "sessions";
pub const ROUTINE_TEMPLATES_KEY: &str = "routineTemplates";
pub const UNIT_KEY: &str = "unit";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    /// In commit order.
    pub sessions: Vec<Session>,
    pub routine_templates: Vec<RoutineTemplate>,
    pub unit: Unit,
}

impl Ledger {
    /// Read the ledger from `store`. Absent, unreadable or malformed entries
    /// fall back to their defaults; this never fails.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let sessions = read_json(store, SESSIONS_KEY).unwrap_or_default();
        let routine_templates = read_json(store, ROUTINE_TEMPLATES_KEY).unwrap_or_default();
        let unit = read_raw(store, UNIT_KEY)
            .and_then(|raw| match raw.parse::<Unit>() {
                Ok(unit) => Some(unit),
                Err(e) => {
                    warn!("Discarding stored {}: {}", UNIT_KEY, e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            sessions,
            routine_templates,
            unit,
        }
    }

    /// Write every field back to `store`.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(SESSIONS_KEY, &serde_json::to_string(&self.sessions)?)?;
        store.set(
            ROUTINE_TEMPLATES_KEY,
            &serde_json::to_string(&self.routine_templates)?,
        )?;
        store.set(UNIT_KEY, self.unit.as_str())?;
        debug!(
            "Saved ledger: {} sessions, {} routines, unit {}",
            self.sessions.len(),
            self.routine_templates.len(),
            self.unit
        );
        Ok(())
    }
}

fn read_raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read {} from store: {:#}", key, e);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding stored {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SetEntry, WorkoutForm};
    use crate::store::MemoryStore;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("disk on fire"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    fn sample_ledger() -> Ledger {
        let mut form = WorkoutForm::default();
        form.exercise = "Deadlift".into();
        form.sets[0] = SetEntry::new(Some(180.0), Some(3.0));
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Ledger {
            sessions: vec![Session::commit(form.clone(), Unit::Lb, 7, date)],
            routine_templates: vec![form],
            unit: Unit::Lb,
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let ledger = Ledger::load(&MemoryStore::new());
        assert!(ledger.sessions.is_empty());
        assert!(ledger.routine_templates.is_empty());
        assert_eq!(ledger.unit, Unit::Kg);
    }

    #[test]
    fn corrupt_entries_load_defaults() {
        let store = MemoryStore::new()
            .with_entry(SESSIONS_KEY, "{not json")
            .with_entry(ROUTINE_TEMPLATES_KEY, "null")
            .with_entry(UNIT_KEY, "stone");
        let ledger = Ledger::load(&store);
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn one_bad_session_discards_the_whole_sequence() {
        let good = serde_json::to_value(&sample_ledger().sessions[0]).unwrap();
        let raw = serde_json::json!([good, {"exercise": "half a session"}]).to_string();
        let store = MemoryStore::new().with_entry(SESSIONS_KEY, &raw);
        assert!(Ledger::load(&store).sessions.is_empty());
    }

    #[test]
    fn read_errors_load_defaults() {
        assert_eq!(Ledger::load(&FailingStore), Ledger::default());
    }

    #[test]
    fn save_then_load_restores_everything() {
        let ledger = sample_ledger();
        let mut store = MemoryStore::new();
        ledger.save(&mut store).unwrap();
        assert_eq!(store.get(UNIT_KEY).unwrap().as_deref(), Some("lb"));
        assert_eq!(Ledger::load(&store), ledger);
    }

    #[test]
    fn save_surfaces_write_errors() {
        assert!(sample_ledger().save(&mut FailingStore).is_err());
    }

    #[test]
    fn sets_missing_a_field_still_load() {
        let raw = serde_json::json!([{
            "day": "", "group": "Back", "exercise": "Row",
            "sets": [{"reps": "8"}, {"weight": 60}, {}],
            "notes": ""
        }])
        .to_string();
        let store = MemoryStore::new().with_entry(ROUTINE_TEMPLATES_KEY, &raw);
        let ledger = Ledger::load(&store);

        assert_eq!(ledger.routine_templates.len(), 1);
        let template = &ledger.routine_templates[0];
        assert_eq!(template.warmup_weight, None);
        assert_eq!(
            template.sets,
            vec![
                SetEntry::new(None, Some(8.0)),
                SetEntry::new(Some(60.0), None),
                SetEntry::default(),
            ]
        );
        assert_eq!(template.best_one_rep_max(), 0);
    }
}
