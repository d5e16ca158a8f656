use std::{cell::RefCell, collections::HashMap, rc::Rc};

use anyhow::Result;

// durable client-side key-value storage
//
// values are stored as raw strings so that whatever else reads the same key (a
// bootstrapping script in index.html, devtools) sees exactly "light" or "dark"
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> Result<()>;
}

// in-memory store; clones share the same map
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // seed a raw value, bypassing any validation
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

// a host with no usable storage (private browsing quotas, sandboxed iframes)
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Err(anyhow::Error::msg(format!("storage unavailable, cannot read {key}")))
    }

    fn save(&self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow::Error::msg(format!("storage unavailable, cannot write {key}")))
    }
}
