// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-process `ConfigStore`, for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::config::{is_valid_key, ConfigError, ConfigStore};

/// Keeps blobs in memory; nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.blobs.borrow().keys().cloned().collect()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        if !is_valid_key(key) {
            return Err(ConfigError::InvalidKey(key.to_owned()));
        }
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        if !is_valid_key(key) {
            return Err(ConfigError::InvalidKey(key.to_owned()));
        }
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
