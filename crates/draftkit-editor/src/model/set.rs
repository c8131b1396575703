use std::collections::HashSet;

use super::diagram::Diagram;
use super::item::{DiagramGroup, DiagramItem, DiagramShape};

/// A closed set of items: some root items plus all their descendants.
///
/// Sets are how items travel, both between diagrams (copy and paste) and
/// in and out of a single diagram (add, remove). A set is only ever
/// constructed in a valid state: ids are unique, every group child is
/// claimed by exactly one group and no group contains itself through any
/// chain.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramItemSet {
    root_ids: Vec<String>,
    groups: Vec<DiagramGroup>,
    shapes: Vec<DiagramShape>,
}

impl DiagramItemSet {
    /// Collects the given items and their descendants from a diagram.
    ///
    /// Returns `None` when an id is unknown or when the subtrees overlap,
    /// for example when a group and one of its children are both listed.
    pub fn from_diagram(diagram: &Diagram, ids: &[String]) -> Option<Self> {
        let mut groups = Vec::new();
        let mut shapes = Vec::new();
        let mut seen = HashSet::new();

        for id in ids {
            if !collect(diagram, id, &mut groups, &mut shapes, &mut seen) {
                return None;
            }
        }

        Some(Self {
            root_ids: ids.to_vec(),
            groups,
            shapes,
        })
    }

    /// Builds a set from loose parts, as the serializer produces them.
    ///
    /// Returns `None` for payloads no diagram could hold: duplicate ids,
    /// a child claimed by two groups, or a group cycle. Child ids that
    /// point outside the set are tolerated and simply never resolve.
    pub fn from_parts(groups: Vec<DiagramGroup>, shapes: Vec<DiagramShape>) -> Option<Self> {
        let mut ids = HashSet::new();

        for group in &groups {
            if !ids.insert(group.id().to_string()) {
                return None;
            }
        }
        for shape in &shapes {
            if !ids.insert(shape.id().to_string()) {
                return None;
            }
        }

        let mut parented = HashSet::new();

        for group in &groups {
            for child in group.children().iter() {
                if ids.contains(child) && !parented.insert(child.clone()) {
                    return None;
                }
            }
        }

        let root_ids: Vec<String> = groups
            .iter()
            .map(|g| g.id())
            .chain(shapes.iter().map(|s| s.id()))
            .filter(|id| !parented.contains(*id))
            .map(str::to_string)
            .collect();

        // Cycles leave their members unreachable from any root.
        let mut reachable = HashSet::new();
        let mut stack: Vec<&str> = root_ids.iter().map(String::as_str).collect();

        while let Some(id) = stack.pop() {
            if !reachable.insert(id.to_string()) {
                continue;
            }
            if let Some(group) = groups.iter().find(|g| g.id() == id) {
                for child in group.children().iter() {
                    if ids.contains(child) {
                        stack.push(child);
                    }
                }
            }
        }

        if reachable.len() != ids.len() {
            return None;
        }

        Some(Self {
            root_ids,
            groups,
            shapes,
        })
    }

    /// The items that had no parent within the set.
    pub fn root_ids(&self) -> &[String] {
        &self.root_ids
    }

    pub fn groups(&self) -> &[DiagramGroup] {
        &self.groups
    }

    pub fn shapes(&self) -> &[DiagramShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.groups.len() + self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.shapes.is_empty()
    }

    /// All ids, groups before shapes.
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .map(|g| g.id())
            .chain(self.shapes.iter().map(|s| s.id()))
    }

    /// All items as [`DiagramItem`] values, groups before shapes.
    pub fn all_items(&self) -> impl Iterator<Item = DiagramItem> + '_ {
        self.groups
            .iter()
            .cloned()
            .map(DiagramItem::Group)
            .chain(self.shapes.iter().cloned().map(DiagramItem::Shape))
    }

    /// True when no id collides with an item already in the diagram.
    pub fn can_add_to(&self, diagram: &Diagram) -> bool {
        self.all_ids().all(|id| !diagram.items().contains_key(id))
    }

    /// True when every member still exists in the diagram.
    pub fn can_remove_from(&self, diagram: &Diagram) -> bool {
        self.all_ids().all(|id| diagram.items().contains_key(id))
    }
}

fn collect(
    diagram: &Diagram,
    id: &str,
    groups: &mut Vec<DiagramGroup>,
    shapes: &mut Vec<DiagramShape>,
    seen: &mut HashSet<String>,
) -> bool {
    if !seen.insert(id.to_string()) {
        return false;
    }

    match diagram.items().get(id) {
        None => false,
        Some(DiagramItem::Shape(shape)) => {
            shapes.push(shape.clone());
            true
        }
        Some(DiagramItem::Group(group)) => {
            groups.push(group.clone());

            let children: Vec<String> = group.children().iter().cloned().collect();
            children
                .iter()
                .all(|child| collect(diagram, child, groups, shapes, seen))
        }
    }
}
