pub mod errors;
pub mod logging;
pub mod objects;
pub mod store;

#[uniffi::export]
fn estimate_one_rep_max(weight: Option<f64>, reps: Option<f64>) -> i64 {
    crate::metrics::estimate_one_rep_max(weight, reps)
}
