//! Key-value side-table attached to every graph entity.

use indexmap::IndexMap;
use serde::Serialize;

use super::key::Key;
use super::Value;
use crate::types::error::{GraphError, GraphResult};

/// Arbitrary metadata attached to a graph, vertex, edge, link, component,
/// subgraph or view. Entries keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeStore {
    entries: IndexMap<Key, Value>,
}

impl AttributeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> GraphResult<&Value> {
        let key = key.into();
        self.entries
            .get(&key)
            .ok_or(GraphError::AttributeNotFound(key))
    }

    /// Get a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> GraphResult<&mut Value> {
        let key = key.into();
        match self.entries.get_mut(&key) {
            Some(value) => Ok(value),
            None => Err(GraphError::AttributeNotFound(key)),
        }
    }

    /// Create or overwrite the value under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove and return the value under `key`.
    pub fn remove(&mut self, key: impl Into<Key>) -> GraphResult<Value> {
        let key = key.into();
        self.entries
            .shift_remove(&key)
            .ok_or(GraphError::AttributeNotFound(key))
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all key-value pairs in insertion order. Overwriting a
    /// key keeps its original position.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Remove every attribute.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for AttributeStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
