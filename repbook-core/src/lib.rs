pub mod clock;
pub mod ledger;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod session;
pub mod store;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
#[cfg(feature = "uniffi")]
pub mod uniffi_interface;
