//! Ordered persistent list with z-order reordering.

use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An ordered, persistent list.
///
/// Index 0 is the bottom of the z-order, the last index is the top. The
/// reorder operations (`bring_to_front` and friends) treat their argument
/// as a coherent block: members keep their relative order and move past
/// the nearest non-member, exactly like layers in a drawing tool.
#[derive(Clone)]
pub struct ImmutableList<T> {
    items: Arc<Vec<T>>,
}

impl<T> ImmutableList<T> {
    pub fn empty() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// True when both handles share the same allocation. Sharing implies
    /// equality; the reverse does not hold.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone + PartialEq> ImmutableList<T> {
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: Arc::new(items.into_iter().collect()),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// Appends an item at the top.
    pub fn push(&self, item: T) -> Self {
        let mut next = (*self.items).clone();
        next.push(item);
        Self {
            items: Arc::new(next),
        }
    }

    /// Removes the first occurrence. Absent items are a no-op.
    pub fn remove(&self, item: &T) -> Self {
        match self.index_of(item) {
            None => self.clone(),
            Some(index) => {
                let mut next = (*self.items).clone();
                next.remove(index);
                Self {
                    items: Arc::new(next),
                }
            }
        }
    }

    /// Inserts at `index`, clamped to the list length.
    pub fn insert_at(&self, index: usize, item: T) -> Self {
        let mut next = (*self.items).clone();
        let index = index.min(next.len());
        next.insert(index, item);
        Self {
            items: Arc::new(next),
        }
    }

    /// Replaces the item at `index`. Out of range or equal values are a
    /// no-op.
    pub fn set_at(&self, index: usize, item: T) -> Self {
        match self.items.get(index) {
            None => self.clone(),
            Some(current) if *current == item => self.clone(),
            Some(_) => {
                let mut next = (*self.items).clone();
                next[index] = item;
                Self {
                    items: Arc::new(next),
                }
            }
        }
    }

    /// Moves the members to the top, keeping their relative order.
    pub fn bring_to_front(&self, members: &[T]) -> Self {
        self.reorder(members, |_, remaining| Some(remaining.len()))
    }

    /// Moves the members one layer up: just past the closest non-member
    /// above the topmost member.
    pub fn bring_forwards(&self, members: &[T]) -> Self {
        self.reorder(members, |original, remaining| {
            let topmost = original.iter().rposition(|i| members.contains(i))?;
            let above = original[topmost + 1..].iter().find(|i| !members.contains(i))?;
            let slot = remaining.iter().position(|i| i == above)?;
            Some(slot + 1)
        })
    }

    /// Moves the members one layer down: just below the closest non-member
    /// beneath the bottommost member.
    pub fn send_backwards(&self, members: &[T]) -> Self {
        self.reorder(members, |original, remaining| {
            let bottommost = original.iter().position(|i| members.contains(i))?;
            let below = original[..bottommost].iter().rfind(|i| !members.contains(i))?;
            let slot = remaining.iter().position(|i| i == below)?;
            Some(slot)
        })
    }

    /// Moves the members to the bottom, keeping their relative order.
    pub fn send_to_back(&self, members: &[T]) -> Self {
        self.reorder(members, |_, _| Some(0))
    }

    /// Moves the members so the first of them lands at `index` in the
    /// resulting list.
    pub fn move_to(&self, members: &[T], index: usize) -> Self {
        self.reorder(members, |_, remaining| Some(index.min(remaining.len())))
    }

    /// Shared reorder kernel: split off the members (keeping their order),
    /// ask `slot` where to splice them back in, and only allocate when the
    /// outcome differs. `slot` returning `None` means nowhere to go.
    fn reorder<F>(&self, members: &[T], slot: F) -> Self
    where
        F: FnOnce(&[T], &[T]) -> Option<usize>,
    {
        if members.is_empty() || !members.iter().all(|m| self.contains(m)) {
            return self.clone();
        }

        let mut moved = Vec::with_capacity(members.len());
        let mut remaining = Vec::with_capacity(self.items.len());

        for item in self.items.iter() {
            if members.contains(item) {
                moved.push(item.clone());
            } else {
                remaining.push(item.clone());
            }
        }

        let index = match slot(&self.items, &remaining) {
            None => return self.clone(),
            Some(index) => index.min(remaining.len()),
        };

        let mut next = remaining;
        next.splice(index..index, moved);

        if next == *self.items {
            return self.clone();
        }
        Self {
            items: Arc::new(next),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone + PartialEq> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Serialize> Serialize for ImmutableList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            items: Arc::new(Vec::deserialize(deserializer)?),
        })
    }
}
