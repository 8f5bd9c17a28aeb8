//! Workout log data model: the working form, committed sessions and routine
//! templates, as persisted in the ledger.

mod numeric;

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics;

pub use numeric::parse_number;

/// Number of set slots on a fresh form.
pub const SETS_PER_FORM: usize = 4;

/// Display unit for weights. Weights are never converted between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Lb,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Lb => "lb",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "lb" => Ok(Unit::Lb),
            other => Err(anyhow!("Unknown unit: {:?}", other)),
        }
    }
}

/// One performed set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    #[serde(default, deserialize_with = "numeric::deserialize_lenient")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "numeric::deserialize_lenient")]
    pub reps: Option<f64>,
}

impl SetEntry {
    pub fn new(weight: Option<f64>, reps: Option<f64>) -> Self {
        Self { weight, reps }
    }

    /// Epley estimate for this set, `0` when the set holds no valid lift.
    pub fn one_rep_max(&self) -> i64 {
        metrics::estimate_one_rep_max(self.weight, self.reps)
    }

    fn with(&self, field: SetField, value: Option<f64>) -> Self {
        let mut next = self.clone();
        match field {
            SetField::Weight => next.weight = value,
            SetField::Reps => next.reps = value,
        }
        next
    }
}

fn fmt_amount(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for SetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", fmt_amount(self.weight), fmt_amount(self.reps))
    }
}

/// Scalar fields of a [`WorkoutForm`], named as they are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FormField {
    Day,
    Group,
    Exercise,
    WarmupWeight,
    WarmupReps,
    Notes,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Day => "day",
            FormField::Group => "group",
            FormField::Exercise => "exercise",
            FormField::WarmupWeight => "warmupWeight",
            FormField::WarmupReps => "warmupReps",
            FormField::Notes => "notes",
        }
    }
}

impl FromStr for FormField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(FormField::Day),
            "group" => Ok(FormField::Group),
            "exercise" => Ok(FormField::Exercise),
            "warmupWeight" => Ok(FormField::WarmupWeight),
            "warmupReps" => Ok(FormField::WarmupReps),
            "notes" => Ok(FormField::Notes),
            other => Err(anyhow!("Unknown form field: {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SetField {
    Weight,
    Reps,
}

impl FromStr for SetField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weight" => Ok(SetField::Weight),
            "reps" => Ok(SetField::Reps),
            other => Err(anyhow!("Unknown set field: {:?}", other)),
        }
    }
}

/// The working draft a session or routine is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutForm {
    pub day: String,
    pub group: String,
    pub exercise: String,
    #[serde(default, deserialize_with = "numeric::deserialize_lenient")]
    pub warmup_weight: Option<f64>,
    #[serde(default, deserialize_with = "numeric::deserialize_lenient")]
    pub warmup_reps: Option<f64>,
    pub sets: Vec<SetEntry>,
    pub notes: String,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            day: String::new(),
            group: String::new(),
            exercise: String::new(),
            warmup_weight: None,
            warmup_reps: None,
            sets: vec![SetEntry::default(); SETS_PER_FORM],
            notes: String::new(),
        }
    }
}

impl WorkoutForm {
    /// Returns a copy with one scalar field replaced. Numeric fields are parsed
    /// with [`parse_number`]; nothing else is validated.
    pub fn with_field(&self, field: FormField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Day => next.day = value.to_string(),
            FormField::Group => next.group = value.to_string(),
            FormField::Exercise => next.exercise = value.to_string(),
            FormField::WarmupWeight => next.warmup_weight = parse_number(value),
            FormField::WarmupReps => next.warmup_reps = parse_number(value),
            FormField::Notes => next.notes = value.to_string(),
        }
        next
    }

    /// Returns a copy with one field of the set at `index` replaced.
    pub fn with_set(&self, index: usize, field: SetField, value: &str) -> Result<Self> {
        let entry = self.sets.get(index).ok_or_else(|| {
            anyhow!(
                "Set index {} out of range for a form with {} sets",
                index,
                self.sets.len()
            )
        })?;
        let updated = entry.with(field, parse_number(value));
        let mut next = self.clone();
        next.sets[index] = updated;
        Ok(next)
    }

    /// Highest Epley estimate across the sets, never below zero.
    pub fn best_one_rep_max(&self) -> i64 {
        metrics::best_one_rep_max(&self.sets)
    }

    /// Label shown in a list of saved routines.
    pub fn routine_label(&self) -> String {
        let exercise = if self.exercise.is_empty() {
            "Routine"
        } else {
            self.exercise.as_str()
        };
        format!("{} - {}", exercise, self.group)
    }
}

/// A saved form used as a starting point for new entries.
pub type RoutineTemplate = WorkoutForm;

/// A committed workout entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub form: WorkoutForm,
    pub unit: Unit,
    pub id: i64,
    pub date: String,
    #[serde(rename = "best1RM")]
    pub best_1rm: i64,
}

impl Session {
    /// Snapshot `form` as a session recorded in `unit`.
    pub fn commit(form: WorkoutForm, unit: Unit, id: i64, date: NaiveDate) -> Self {
        let best_1rm = form.best_one_rep_max();
        Self {
            form,
            unit,
            id,
            date: date.format("%Y-%m-%d").to_string(),
            best_1rm,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self
            .form
            .sets
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} {} [{}]: {} {} (best 1RM {}{})",
            self.date,
            self.form.exercise,
            self.form.group,
            sets,
            self.unit,
            self.best_1rm,
            self.unit
        )
    }
}
