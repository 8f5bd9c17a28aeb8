//! One-rep-max estimation.

use crate::models::SetEntry;

fn is_valid_input(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Epley estimate `weight * (1 + reps / 30)`, rounded half away from zero.
///
/// Returns `0` when either input is absent, zero, negative or non-finite; `0`
/// means "no valid lift" rather than an error. The result carries whatever unit
/// the weight was entered in.
pub fn estimate_one_rep_max(weight: Option<f64>, reps: Option<f64>) -> i64 {
    match (weight, reps) {
        (Some(w), Some(r)) if is_valid_input(w) && is_valid_input(r) => {
            (w * (1.0 + r / 30.0)).round() as i64
        }
        _ => 0,
    }
}

/// Highest estimate across `sets`, folded from `0`.
pub fn best_one_rep_max(sets: &[SetEntry]) -> i64 {
    sets.iter().map(SetEntry::one_rep_max).fold(0, i64::max)
}
