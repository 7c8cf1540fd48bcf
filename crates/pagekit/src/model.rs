// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Key/value models handed to page and client template renderers.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// An ordered-by-key map of model entries.
///
/// Keys are unique; [`Model::insert`] returns the value it replaced so
/// callers can detect collisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Model {
    entries: Map<String, JsonValue>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value under `key`.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Returns the string value under `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(JsonValue::as_str)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes and returns the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.entries.remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.entries.iter()
    }

    /// Converts the model into a JSON object.
    pub fn into_json(self) -> JsonValue {
        JsonValue::Object(self.entries)
    }
}

impl From<Map<String, JsonValue>> for Model {
    fn from(entries: Map<String, JsonValue>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, JsonValue)> for Model {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_returns_previous() {
        let mut model = Model::new();
        assert_eq!(model.insert("name", "a"), None);
        assert_eq!(model.insert("name", "b"), Some(json!("a")));
        assert_eq!(model.get_str("name"), Some("b"));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut model = Model::new();
        model.insert("error", "filename not defined");
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({"error": "filename not defined"})
        );
        assert_eq!(model.into_json(), json!({"error": "filename not defined"}));
    }
}
