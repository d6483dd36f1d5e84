//! Key-value persistence behind a trait so page state can be tested without a
//! browser. The web frontend backs it with `localStorage`.

use fnv::FnvHashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key-value storage is unavailable")]
    Unavailable,
    #[error("write to `{key}` rejected: {reason}")]
    Rejected { key: String, reason: String },
}

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Write `value`, logging a failed write instead of returning it.
pub fn persist(store: &mut impl KvStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("[store] {}", e);
    }
}
