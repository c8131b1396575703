//! Persistent map keyed by each item's own id.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Implemented by anything that carries its own id.
pub trait WithId {
    fn id(&self) -> &str;
}

/// An insertion-ordered, persistent map from an item's id to the item.
///
/// The key is always taken from the item itself, so a stored item and its
/// key cannot drift apart. Insertion order is preserved and survives
/// serialization, which keeps documents and their walks deterministic.
#[derive(Clone)]
pub struct ImmutableIdMap<T> {
    items: Arc<IndexMap<String, T>>,
}

impl<T> ImmutableIdMap<T> {
    pub fn empty() -> Self {
        Self {
            items: Arc::new(IndexMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// True when both handles share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: WithId + Clone + PartialEq> ImmutableIdMap<T> {
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: Arc::new(
                items
                    .into_iter()
                    .map(|item| (item.id().to_string(), item))
                    .collect(),
            ),
        }
    }

    /// Adds an item under its own id. An existing id is a no-op; updates
    /// go through [`update`](Self::update).
    pub fn add(&self, item: T) -> Self {
        if self.contains_key(item.id()) {
            return self.clone();
        }
        let mut next = (*self.items).clone();
        next.insert(item.id().to_string(), item);
        Self {
            items: Arc::new(next),
        }
    }

    /// Removes an item. Absent ids are a no-op.
    pub fn remove(&self, id: &str) -> Self {
        if !self.contains_key(id) {
            return self.clone();
        }
        let mut next = (*self.items).clone();
        next.shift_remove(id);
        Self {
            items: Arc::new(next),
        }
    }

    /// Applies `f` to the stored item. Unknown ids, or an `f` that hands
    /// back an equal value, are a no-op and keep the allocation. `f` must
    /// not change the item's id.
    pub fn update<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let current = match self.items.get(id) {
            None => return self.clone(),
            Some(current) => current,
        };

        let updated = f(current);
        debug_assert_eq!(updated.id(), id);

        if updated == *current {
            return self.clone();
        }

        let mut next = (*self.items).clone();
        next.insert(id.to_string(), updated);
        Self {
            items: Arc::new(next),
        }
    }

    /// Applies `f` to every stored item. Keeps the allocation when
    /// nothing changed.
    pub fn update_all<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut changed = false;
        let mut next = IndexMap::with_capacity(self.items.len());

        for (id, current) in self.items.iter() {
            let updated = f(current);
            debug_assert_eq!(updated.id(), id);

            if updated != *current {
                changed = true;
            }
            next.insert(id.clone(), updated);
        }

        if !changed {
            return self.clone();
        }
        Self {
            items: Arc::new(next),
        }
    }

    /// Reorders the items so the first member lands at `index`, analogous
    /// to [`ImmutableList::move_to`](super::ImmutableList::move_to).
    pub fn move_to(&self, ids: &[&str], index: usize) -> Self {
        if ids.is_empty() || !ids.iter().all(|id| self.contains_key(id)) {
            return self.clone();
        }

        let mut moved = Vec::with_capacity(ids.len());
        let mut remaining = Vec::with_capacity(self.items.len());

        for key in self.items.keys() {
            if ids.contains(&key.as_str()) {
                moved.push(key.clone());
            } else {
                remaining.push(key.clone());
            }
        }

        let index = index.min(remaining.len());
        let mut order = remaining;
        order.splice(index..index, moved);

        if order.iter().eq(self.items.keys()) {
            return self.clone();
        }

        let next: IndexMap<String, T> = order
            .into_iter()
            .map(|key| {
                let item = self.items[&key].clone();
                (key, item)
            })
            .collect();

        Self {
            items: Arc::new(next),
        }
    }
}

impl<T> Default for ImmutableIdMap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for ImmutableIdMap<T> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.items, &other.items) {
            return true;
        }
        // IndexMap equality ignores order; documents care about it.
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableIdMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

impl<T: Serialize> Serialize for ImmutableIdMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.items.iter())
    }
}

impl<'de, T: Deserialize<'de> + WithId + Clone + PartialEq> Deserialize<'de>
    for ImmutableIdMap<T>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = IndexMap::<String, T>::deserialize(deserializer)?;
        Ok(Self {
            items: Arc::new(items),
        })
    }
}
