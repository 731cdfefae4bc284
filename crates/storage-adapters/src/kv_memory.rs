//! In-memory implementation of `KvStore`. Used by tests and by kiosk
//! sessions that should forget everything on restart.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;
use domains::traits::KvStore;

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("store mutex poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("store mutex poisoned"))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("submissions").unwrap(), None);

        store.set("submissions", "[]").unwrap();
        assert_eq!(store.get("submissions").unwrap().as_deref(), Some("[]"));

        store.set("submissions", "[1]").unwrap();
        assert_eq!(store.get("submissions").unwrap().as_deref(), Some("[1]"));
    }
}
