//! Identity registries: ID-less entities in insertion order plus ID-keyed
//! entities in insertion order with a key index.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{Key, SubgraphId};

/// Key of the graph-wide index: an ID is unique only within its owning
/// scope (`None` for the graph's top level).
pub(crate) type ScopedKey = (Option<SubgraphId>, Key);

/// Registry of arena slot indices for one entity kind.
#[derive(Debug, Clone)]
pub(crate) struct Registry<K = Key> {
    anonymous: Vec<usize>,
    keyed: Vec<usize>,
    by_key: HashMap<K, usize>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            anonymous: Vec::new(),
            keyed: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Registry<K> {
    /// Whether `key` is taken.
    pub fn contains_key(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    /// Slot registered under `key`.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Register a slot. The caller has already checked `key` is free.
    pub fn insert(&mut self, key: Option<&K>, index: usize) {
        match key {
            Some(key) => {
                self.by_key.insert(key.clone(), index);
                self.keyed.push(index);
            }
            None => self.anonymous.push(index),
        }
    }

    /// Unregister a slot. Returns whether it was present.
    pub fn remove(&mut self, key: Option<&K>, index: usize) -> bool {
        let list = match key {
            Some(key) => {
                if self.by_key.get(key) != Some(&index) {
                    return false;
                }
                self.by_key.remove(key);
                &mut self.keyed
            }
            None => &mut self.anonymous,
        };
        match list.iter().position(|&i| i == index) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Whether the slot is registered.
    pub fn contains(&self, index: usize) -> bool {
        self.anonymous.contains(&index) || self.keyed.contains(&index)
    }

    /// All slots: ID-less first, then ID-keyed, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.anonymous.iter().chain(self.keyed.iter()).copied()
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.anonymous.len() + self.keyed.len()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.anonymous.clear();
        self.keyed.clear();
        self.by_key.clear();
    }
}

/// The vertex, edge and link registries of one scope.
///
/// The graph holds one keyed by [`ScopedKey`] covering every entity; each
/// subgraph holds one keyed by plain [`Key`] covering the entities it owns.
#[derive(Debug, Clone)]
pub(crate) struct ScopeRegistry<K = Key> {
    pub vertices: Registry<K>,
    pub edges: Registry<K>,
    pub links: Registry<K>,
}

impl<K> Default for ScopeRegistry<K> {
    fn default() -> Self {
        Self {
            vertices: Registry::default(),
            edges: Registry::default(),
            links: Registry::default(),
        }
    }
}
