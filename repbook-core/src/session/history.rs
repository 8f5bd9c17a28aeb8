//! Querying committed sessions and the unit preference.

use crate::models::{Session, Unit};
use crate::session::SessionStore;
use anyhow::Result;
use log::info;
use serde::Serialize;

/// One point of the progress chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub exercise: String,
    #[serde(rename = "best1RM")]
    pub best_1rm: i64,
}

/// Sessions whose `date` equals `date` exactly, in their original order. An
/// absent or empty date selects everything.
pub fn filter_by_date<'a>(sessions: &'a [Session], date: Option<&str>) -> Vec<&'a Session> {
    match date.filter(|d| !d.is_empty()) {
        None => sessions.iter().collect(),
        Some(date) => sessions.iter().filter(|s| s.date == date).collect(),
    }
}

impl SessionStore {
    pub fn sessions(&self, date: Option<&str>) -> Vec<&Session> {
        filter_by_date(&self.ledger.sessions, date)
    }

    /// `(exercise, best 1RM)` pairs for the sessions on `date`, in commit order.
    pub fn progress(&self, date: Option<&str>) -> Vec<ProgressPoint> {
        self.sessions(date)
            .into_iter()
            .map(|s| ProgressPoint {
                exercise: s.form.exercise.clone(),
                best_1rm: s.best_1rm,
            })
            .collect()
    }

    /// Change the unit for future sessions. Recorded sessions keep theirs.
    pub fn set_unit(&mut self, unit: Unit) -> Result<()> {
        self.ledger.unit = unit;
        self.save()?;
        info!("Unit set to {}", unit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{FormField, SetField, WorkoutForm};
    use crate::store::{FileStore, MemoryStore};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn session_on(exercise: &str, date: &str, id: i64) -> Session {
        let mut form = WorkoutForm::default();
        form.exercise = exercise.into();
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Session::commit(form, Unit::Kg, id, date)
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let sessions = vec![
            session_on("Squat", "2024-03-02", 3),
            session_on("Bench", "2024-03-01", 1),
            session_on("Row", "2024-03-01", 2),
        ];
        let all = filter_by_date(&sessions, Some(""));
        assert_eq!(all, sessions.iter().collect::<Vec<_>>());
        assert_eq!(filter_by_date(&sessions, None).len(), 3);
    }

    #[test]
    fn date_filter_is_exact_and_order_preserving() {
        let sessions = vec![
            session_on("Squat", "2024-03-01", 3),
            session_on("Bench", "2024-03-02", 1),
            session_on("Row", "2024-03-01", 2),
        ];
        let names: Vec<_> = filter_by_date(&sessions, Some("2024-03-01"))
            .into_iter()
            .map(|s| s.form.exercise.as_str())
            .collect();
        assert_eq!(names, ["Squat", "Row"]);
        assert!(filter_by_date(&sessions, Some("2024-3-1")).is_empty());
        assert!(filter_by_date(&sessions, Some("2024-03")).is_empty());
    }

    #[test]
    fn progress_pairs_follow_commit_order() {
        let mut store = SessionStore::open(Box::new(MemoryStore::new()));
        for (exercise, weight) in [("Squat", "140"), ("Bench", "100")] {
            store.update_field(FormField::Exercise, exercise);
            store.update_set(0, SetField::Weight, weight).unwrap();
            store.update_set(0, SetField::Reps, "5").unwrap();
            store.commit_session().unwrap();
        }
        let points = store.progress(None);
        assert_eq!(
            points,
            vec![
                ProgressPoint { exercise: "Squat".into(), best_1rm: 163 },
                ProgressPoint { exercise: "Bench".into(), best_1rm: 117 },
            ]
        );
        let json = serde_json::to_value(&points[0]).unwrap();
        assert_eq!(json["best1RM"], 163);
    }

    #[test]
    fn set_unit_leaves_recorded_sessions_alone() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut store =
            SessionStore::with_clock(Box::new(MemoryStore::new()), Box::new(FixedClock(now)));
        store.update_set(0, SetField::Weight, "100").unwrap();
        store.update_set(0, SetField::Reps, "5").unwrap();
        let before = store.commit_session().unwrap();

        store.set_unit(Unit::Lb).unwrap();
        assert_eq!(store.unit(), Unit::Lb);
        assert_eq!(store.ledger().sessions, vec![before.clone()]);
        assert_eq!(store.ledger().sessions[0].unit, Unit::Kg);

        let after = store.commit_session().unwrap();
        assert_eq!(after.unit, Unit::Lb);
        assert_eq!(store.ledger().sessions[0], before);
    }

    #[test]
    fn unit_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(Box::new(FileStore::open(dir.path()).unwrap()));
        assert_eq!(store.unit(), Unit::Kg);
        store.set_unit(Unit::Lb).unwrap();

        let reopened = SessionStore::open(Box::new(FileStore::open(dir.path()).unwrap()));
        assert_eq!(reopened.unit(), Unit::Lb);
    }
}
