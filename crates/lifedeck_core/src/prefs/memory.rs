//! In-process preference area for tests and ephemeral sessions.

use super::{PreferenceArea, PrefsResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Non-persistent preference area. Single-threaded by construction.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    slots: RefCell<BTreeMap<(String, String), String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceArea for MemoryPreferences {
    fn get_string(&self, namespace: &str, slot_key: &str) -> PrefsResult<String> {
        let key = (namespace.to_string(), slot_key.to_string());
        Ok(self.slots.borrow().get(&key).cloned().unwrap_or_default())
    }

    fn set_string(&self, namespace: &str, slot_key: &str, value: &str) -> PrefsResult<()> {
        self.slots.borrow_mut().insert(
            (namespace.to_string(), slot_key.to_string()),
            value.to_string(),
        );
        Ok(())
    }
}
