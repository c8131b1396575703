use std::collections::HashSet;

use draftkit_core::{ImmutableIdMap, ImmutableSet, Rotation, WithId};

use super::container::DiagramContainer;
use super::item::{DiagramGroup, DiagramItem, DiagramShape};
use super::set::DiagramItemSet;

/// A single page of the document.
///
/// Items live in one flat id keyed map; structure comes from the root
/// container and the child lists of groups. Every item id appears either
/// in the root or in exactly one group, never both, and all operations
/// below preserve that.
///
/// Operations that change nothing return the diagram unchanged, sharing
/// all allocations, so store code can detect no-ops with [`Diagram::ptr_eq`].
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    id: String,
    items: ImmutableIdMap<DiagramItem>,
    root: DiagramContainer,
    selected_ids: ImmutableSet,
}

impl Diagram {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: ImmutableIdMap::empty(),
            root: DiagramContainer::empty(),
            selected_ids: ImmutableSet::empty(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &ImmutableIdMap<DiagramItem> {
        &self.items
    }

    /// Top level items in z-order, backmost first.
    pub fn root_ids(&self) -> &DiagramContainer {
        &self.root
    }

    pub fn selected_ids(&self) -> &ImmutableSet {
        &self.selected_ids
    }

    /// True when both diagrams share all backing allocations. Used to
    /// detect that an operation was a no-op.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.items.ptr_eq(&other.items)
            && self.root.ptr_eq(&other.root)
            && self.selected_ids.ptr_eq(&other.selected_ids)
    }

    /// The group an item belongs to, if any.
    pub fn parent_of(&self, id: &str) -> Option<&DiagramGroup> {
        self.items
            .iter()
            .filter_map(DiagramItem::as_group)
            .find(|group| group.children().contains(id))
    }

    /// Adds a shape at the top of the root. Duplicate ids are a no-op.
    pub fn add_shape(&self, shape: DiagramShape) -> Self {
        if self.items.contains_key(shape.id()) {
            return self.clone();
        }

        let root = self.root.add(shape.id());
        let items = self.items.add(DiagramItem::Shape(shape));

        Self {
            items,
            root,
            ..self.clone()
        }
    }

    /// Replaces the selection. Unknown ids invalidate the whole request.
    pub fn select_items(&self, ids: &[String]) -> Self {
        if !ids.iter().all(|id| self.items.contains_key(id)) {
            return self.clone();
        }

        let selected_ids = self.selected_ids.set_to(ids.iter().cloned());
        if selected_ids.ptr_eq(&self.selected_ids) {
            return self.clone();
        }

        Self {
            selected_ids,
            ..self.clone()
        }
    }

    /// Applies `f` to one item. Unknown ids, or an `f` that returns an
    /// equal item, leave the diagram untouched.
    pub fn update_item<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(&DiagramItem) -> DiagramItem,
    {
        let items = self.items.update(id, f);
        if items.ptr_eq(&self.items) {
            return self.clone();
        }

        Self {
            items,
            ..self.clone()
        }
    }

    /// Applies `f` to the given items and all their descendants. Invalid
    /// id lists (unknown ids, overlapping subtrees) are a no-op.
    pub fn update_items<F>(&self, ids: &[String], mut f: F) -> Self
    where
        F: FnMut(&DiagramItem) -> DiagramItem,
    {
        let set = match DiagramItemSet::from_diagram(self, ids) {
            None => return self.clone(),
            Some(set) => set,
        };

        let mut diagram = self.clone();
        for id in set.all_ids() {
            diagram = diagram.update_item(id, &mut f);
        }

        diagram
    }

    /// Adds a whole set of items, roots at the top of the root container.
    /// Colliding ids make this a no-op.
    pub fn add_items(&self, set: &DiagramItemSet) -> Self {
        if set.is_empty() || !set.can_add_to(self) {
            return self.clone();
        }

        let mut items = self.items.clone();
        for item in set.all_items() {
            items = items.add(item);
        }

        let root = self.root.add_many(set.root_ids().iter().map(String::as_str));

        Self {
            items,
            root,
            ..self.clone()
        }
    }

    /// Removes a whole set of items. Surviving groups lose the removed
    /// ids from their child lists and the selection is pruned.
    pub fn remove_items(&self, set: &DiagramItemSet) -> Self {
        if set.is_empty() || !set.can_remove_from(self) {
            return self.clone();
        }

        let removed: HashSet<&str> = set.all_ids().collect();

        let mut items = self.items.clone();
        for id in set.all_ids() {
            items = items.remove(id);
        }

        let items = items.update_all(|item| match item {
            DiagramItem::Group(group) => {
                let children = group.children();
                if children.iter().any(|child| removed.contains(child.as_str())) {
                    let kept = children.remove_many(
                        children
                            .iter()
                            .filter(|child| removed.contains(child.as_str()))
                            .map(String::as_str)
                            .collect::<Vec<_>>(),
                    );
                    DiagramItem::Group(group.with_children(kept))
                } else {
                    item.clone()
                }
            }
            DiagramItem::Shape(_) => item.clone(),
        });

        let root = self.root.remove_many(set.all_ids());

        let selected_ids = self.selected_ids.set_to(
            self.selected_ids
                .iter()
                .filter(|id| !removed.contains(id))
                .map(str::to_string),
        );

        Self {
            id: self.id.clone(),
            items,
            root,
            selected_ids,
        }
    }

    /// Groups root items under a new group, inserted where the topmost
    /// member sat. Children keep the given order. The request is a no-op
    /// unless all ids are distinct root items and the group id is free.
    pub fn group(&self, group_id: &str, ids: &[String]) -> Self {
        if ids.is_empty() || self.items.contains_key(group_id) {
            return self.clone();
        }

        let mut members: Vec<&str> = Vec::new();
        for id in ids {
            if !members.contains(&id.as_str()) {
                members.push(id);
            }
        }

        let mut topmost = 0;
        for member in &members {
            match self.root.index_of(member) {
                None => return self.clone(),
                Some(index) => topmost = topmost.max(index),
            }
        }

        let insert_at = topmost - (members.len() - 1);

        let root = self
            .root
            .remove_many(members.iter().copied())
            .insert_at(insert_at, group_id);

        let group = DiagramGroup::new(group_id, members.iter().copied(), Rotation::ZERO);
        let items = self.items.add(DiagramItem::Group(group));

        Self {
            items,
            root,
            ..self.clone()
        }
    }

    /// Dissolves a group, splicing its children into the spot the group
    /// occupied, in the same container. Unknown ids and non-groups are a
    /// no-op.
    pub fn ungroup(&self, group_id: &str) -> Self {
        let group = match self.items.get(group_id) {
            Some(DiagramItem::Group(group)) => group.clone(),
            _ => return self.clone(),
        };

        let children: Vec<String> = group.children().iter().cloned().collect();
        let parent_id = self.parent_of(group_id).map(|parent| parent.id().to_string());

        let items = self.items.remove(group_id);
        let next = Self {
            items,
            ..self.clone()
        };

        match parent_id {
            None => {
                let root = splice(&next.root, group_id, &children);
                Self { root, ..next }
            }
            Some(parent_id) => next.update_item(&parent_id, |item| match item {
                DiagramItem::Group(parent) => {
                    DiagramItem::Group(parent.with_children(splice(parent.children(), group_id, &children)))
                }
                DiagramItem::Shape(_) => item.clone(),
            }),
        }
    }

    pub fn bring_to_front(&self, ids: &[String]) -> Self {
        self.order_in_parent(ids, |container| container.bring_to_front(ids))
    }

    pub fn bring_forwards(&self, ids: &[String]) -> Self {
        self.order_in_parent(ids, |container| container.bring_forwards(ids))
    }

    pub fn send_backwards(&self, ids: &[String]) -> Self {
        self.order_in_parent(ids, |container| container.send_backwards(ids))
    }

    pub fn send_to_back(&self, ids: &[String]) -> Self {
        self.order_in_parent(ids, |container| container.send_to_back(ids))
    }

    pub fn move_items_to(&self, ids: &[String], index: usize) -> Self {
        self.order_in_parent(ids, |container| container.move_to(ids, index))
    }

    /// Z-order kernel: all ids must exist and share one parent container,
    /// then the reorder runs inside that container.
    fn order_in_parent<F>(&self, ids: &[String], f: F) -> Self
    where
        F: FnOnce(&DiagramContainer) -> DiagramContainer,
    {
        if ids.is_empty() || !ids.iter().all(|id| self.items.contains_key(id)) {
            return self.clone();
        }

        let parent_id = self.parent_of(&ids[0]).map(|group| group.id().to_string());
        for id in &ids[1..] {
            if self.parent_of(id).map(|group| group.id().to_string()) != parent_id {
                return self.clone();
            }
        }

        match parent_id {
            None => {
                let root = f(&self.root);
                if root.ptr_eq(&self.root) {
                    return self.clone();
                }
                Self {
                    root,
                    ..self.clone()
                }
            }
            Some(parent_id) => self.update_item(&parent_id, |item| match item {
                DiagramItem::Group(parent) => {
                    DiagramItem::Group(parent.with_children(f(parent.children())))
                }
                DiagramItem::Shape(_) => item.clone(),
            }),
        }
    }
}

fn splice(container: &DiagramContainer, id: &str, replacement: &[String]) -> DiagramContainer {
    match container.index_of(id) {
        None => container.remove(id),
        Some(index) => {
            let mut next = container.remove(id);
            for (offset, child) in replacement.iter().enumerate() {
                next = next.insert_at(index + offset, child);
            }
            next
        }
    }
}

impl WithId for Diagram {
    fn id(&self) -> &str {
        &self.id
    }
}
