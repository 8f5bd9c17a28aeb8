//! Synchronous key-value backing stores for the ledger.

pub mod file;
pub mod memory;

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Environment variable naming the store directory.
pub const STORE_PATH_ENV: &str = "REPBOOK_STORE";
pub const DEFAULT_STORE_DIR: &str = "repbook-data";

static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();

pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[inline(always)]
pub fn get_store_path() -> &'static Path {
    STORE_PATH.get_or_init(|| {
        env::var_os(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
    })
}

pub fn set_store_path(path: impl Into<PathBuf>) -> Result<()> {
    STORE_PATH
        .set(path.into())
        .map_err(|e| anyhow::anyhow!(format!("Failed to set STORE_PATH: {:?}", e)))
}
