use crate::models::{self, Unit};
use crate::session::ProgressPoint;

#[derive(Debug, Clone, uniffi::Record)]
pub struct SetEntryRecord {
    pub weight: Option<f64>,
    pub reps: Option<f64>,
}

impl From<&models::SetEntry> for SetEntryRecord {
    fn from(s: &models::SetEntry) -> Self {
        SetEntryRecord {
            weight: s.weight,
            reps: s.reps,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutFormRecord {
    pub day: String,
    pub group: String,
    pub exercise: String,
    pub warmup_weight: Option<f64>,
    pub warmup_reps: Option<f64>,
    pub sets: Vec<SetEntryRecord>,
    pub notes: String,
    pub label: String,
}

impl From<&models::WorkoutForm> for WorkoutFormRecord {
    fn from(f: &models::WorkoutForm) -> Self {
        WorkoutFormRecord {
            day: f.day.clone(),
            group: f.group.clone(),
            exercise: f.exercise.clone(),
            warmup_weight: f.warmup_weight,
            warmup_reps: f.warmup_reps,
            sets: f.sets.iter().map(SetEntryRecord::from).collect(),
            notes: f.notes.clone(),
            label: f.routine_label(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct SessionRecord {
    pub form: WorkoutFormRecord,
    pub unit: Unit,
    pub id: i64,
    pub date: String,
    pub best_1rm: i64,
}

impl From<&models::Session> for SessionRecord {
    fn from(s: &models::Session) -> Self {
        SessionRecord {
            form: WorkoutFormRecord::from(&s.form),
            unit: s.unit,
            id: s.id,
            date: s.date.clone(),
            best_1rm: s.best_1rm,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct ProgressPointRecord {
    pub exercise: String,
    pub best_1rm: i64,
}

impl From<ProgressPoint> for ProgressPointRecord {
    fn from(p: ProgressPoint) -> Self {
        ProgressPointRecord {
            exercise: p.exercise,
            best_1rm: p.best_1rm,
        }
    }
}
