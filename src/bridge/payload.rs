//! Command payloads: string keys to string values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Arguments for a bridge command, e.g. `{ "name": "World" }`.
///
/// Values are carried verbatim. Empty strings and control characters are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payload with exactly one entry.
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut payload = Self::new();
        payload.insert(key, value);
        payload
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
