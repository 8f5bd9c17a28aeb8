use anyhow::Result;
use std::collections::HashMap;

use super::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut store = MemoryStore::new().with_entry("unit", "kg");
        assert_eq!(store.get("unit").unwrap().as_deref(), Some("kg"));
        store.set("unit", "lb").unwrap();
        assert_eq!(store.get("unit").unwrap().as_deref(), Some("lb"));
        assert_eq!(store.get("sessions").unwrap(), None);
    }
}
