//! Persistent string-keyed map for appearance payloads.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A persistent map from string keys to values, sorted by key.
///
/// Backs shape appearance. Keys are sorted so serialized documents are
/// byte-stable regardless of the order properties were set in.
#[derive(Clone)]
pub struct ImmutableMap<V> {
    entries: Arc<BTreeMap<String, V>>,
}

impl<V> ImmutableMap<V> {
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True when both handles share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<V: Clone + PartialEq> ImmutableMap<V> {
    pub fn of<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self {
            entries: Arc::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Sets a key. Writing the value already present is a no-op.
    pub fn set(&self, key: &str, value: V) -> Self {
        if self.entries.get(key) == Some(&value) {
            return self.clone();
        }
        let mut next = (*self.entries).clone();
        next.insert(key.to_string(), value);
        Self {
            entries: Arc::new(next),
        }
    }

    /// Removes a key. Absent keys are a no-op.
    pub fn remove(&self, key: &str) -> Self {
        if !self.contains_key(key) {
            return self.clone();
        }
        let mut next = (*self.entries).clone();
        next.remove(key);
        Self {
            entries: Arc::new(next),
        }
    }

    /// Overlays `other` on top of this map. Keys in `other` win. A merge
    /// that changes nothing is a no-op.
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }

        let mut changed = false;
        let mut next = (*self.entries).clone();

        for (key, value) in other.entries.iter() {
            if next.get(key) != Some(value) {
                next.insert(key.clone(), value.clone());
                changed = true;
            }
        }

        if !changed {
            return self.clone();
        }
        Self {
            entries: Arc::new(next),
        }
    }
}

impl<V> Default for ImmutableMap<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: PartialEq> PartialEq for ImmutableMap<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl<V: fmt::Debug> fmt::Debug for ImmutableMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<V: Serialize> Serialize for ImmutableMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ImmutableMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, V>::deserialize(deserializer)?;
        Ok(Self {
            entries: Arc::new(entries),
        })
    }
}
