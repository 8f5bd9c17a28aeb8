//! Session module for logging workouts.
//!
//! This module provides the `SessionStore` struct that owns the ledger and the
//! working form, and mediates every change back to the backing store.

mod history;
mod routines;
mod store;
mod workout;

pub use history::{ProgressPoint, filter_by_date};
pub use store::SessionStore;
