//! Persistent set of item ids.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An insertion-ordered, persistent set of string ids.
///
/// Holds selections. Iteration follows insertion order so repeated walks
/// over a selection are deterministic.
#[derive(Clone)]
pub struct ImmutableSet {
    ids: Arc<IndexSet<String>>,
}

impl ImmutableSet {
    pub fn empty() -> Self {
        Self {
            ids: Arc::new(IndexSet::new()),
        }
    }

    pub fn of<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Arc::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// True when both handles share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ids, &other.ids)
    }

    /// Adds an id. Present ids are a no-op.
    pub fn add(&self, id: &str) -> Self {
        if self.contains(id) {
            return self.clone();
        }
        let mut next = (*self.ids).clone();
        next.insert(id.to_string());
        Self {
            ids: Arc::new(next),
        }
    }

    /// Removes an id. Absent ids are a no-op.
    pub fn remove(&self, id: &str) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let mut next = (*self.ids).clone();
        next.shift_remove(id);
        Self {
            ids: Arc::new(next),
        }
    }

    /// Adds the id when absent, removes it when present.
    pub fn toggle(&self, id: &str) -> Self {
        if self.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    /// Replaces the whole content. Identical content is a no-op.
    pub fn set_to<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: IndexSet<String> = ids.into_iter().map(Into::into).collect();
        if next == *self.ids {
            return self.clone();
        }
        Self {
            ids: Arc::new(next),
        }
    }
}

impl Default for ImmutableSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ImmutableSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ids, &other.ids) || self.ids == other.ids
    }
}

impl fmt::Debug for ImmutableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ids.iter()).finish()
    }
}

impl Serialize for ImmutableSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids.iter())
    }
}

impl<'de> Deserialize<'de> for ImmutableSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::of(ids))
    }
}
