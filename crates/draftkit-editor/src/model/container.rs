use draftkit_core::ImmutableList;
use serde::{Deserialize, Serialize};

/// An ordered list of child item ids.
///
/// Both the diagram root and every group keep their children in one of
/// these. The order is the z-order, index 0 is the backmost item. Ids are
/// unique within a container, adding an id twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramContainer {
    ids: ImmutableList<String>,
}

impl DiagramContainer {
    pub fn empty() -> Self {
        Self {
            ids: ImmutableList::empty(),
        }
    }

    pub fn of<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut container = Self::empty();

        for id in ids {
            container = container.add(&id.into());
        }

        container
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        self.ids.as_slice()
    }

    /// True when both containers share the same backing allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.ids.ptr_eq(&other.ids)
    }

    pub fn add(&self, id: &str) -> Self {
        if self.contains(id) {
            return self.clone();
        }

        Self {
            ids: self.ids.push(id.to_string()),
        }
    }

    pub fn add_many<'a, I>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut container = self.clone();

        for id in ids {
            container = container.add(id);
        }

        container
    }

    pub fn remove(&self, id: &str) -> Self {
        Self {
            ids: self.ids.remove(&id.to_string()),
        }
    }

    pub fn remove_many<'a, I>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut container = self.clone();

        for id in ids {
            container = container.remove(id);
        }

        container
    }

    pub fn insert_at(&self, index: usize, id: &str) -> Self {
        if self.contains(id) {
            return self.clone();
        }

        Self {
            ids: self.ids.insert_at(index, id.to_string()),
        }
    }

    pub fn bring_to_front(&self, ids: &[String]) -> Self {
        Self {
            ids: self.ids.bring_to_front(ids),
        }
    }

    pub fn bring_forwards(&self, ids: &[String]) -> Self {
        Self {
            ids: self.ids.bring_forwards(ids),
        }
    }

    pub fn send_backwards(&self, ids: &[String]) -> Self {
        Self {
            ids: self.ids.send_backwards(ids),
        }
    }

    pub fn send_to_back(&self, ids: &[String]) -> Self {
        Self {
            ids: self.ids.send_to_back(ids),
        }
    }

    pub fn move_to(&self, ids: &[String], index: usize) -> Self {
        Self {
            ids: self.ids.move_to(ids, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let container = DiagramContainer::of(["a", "b"]);
        let same = container.add("a");

        assert!(same.ptr_eq(&container));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn keeps_insertion_order() {
        let container = DiagramContainer::of(["c", "a", "b"]);

        let ids: Vec<&String> = container.iter().collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(container.index_of("a"), Some(1));
    }

    #[test]
    fn reorder_returns_same_allocation_at_boundary() {
        let container = DiagramContainer::of(["a", "b", "c"]);
        let front = container.bring_to_front(&["c".to_string()]);

        assert!(front.ptr_eq(&container));
    }
}
