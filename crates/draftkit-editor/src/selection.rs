//! Click and marquee selection rules.

use crate::model::Diagram;

/// Resolves raw hit test ids to the ids that should end up selected.
///
/// `is_single` distinguishes a click (one hit, possibly none) from a
/// marquee; `is_toggle` is a click with ctrl or shift held.
///
/// A click lands on the outermost group of the hit item, unless that
/// item's own parent is already selected, in which case the click drills
/// in one level. Toggle clicks add or remove from the current selection
/// and refuse to touch locked items. A marquee dedupes by resolved
/// ancestor; when more than one item survives, locked items are dropped.
pub fn calculate_selection(
    diagram: &Diagram,
    ids: &[String],
    is_single: bool,
    is_toggle: bool,
) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();

    if is_single {
        if let [id] = ids {
            let item = match diagram.items().get(id) {
                Some(item) => item,
                None => return selected,
            };

            if is_toggle {
                if item.is_locked() {
                    return to_vec(diagram.selected_ids().iter());
                }
                if diagram.selected_ids().contains(id) {
                    return to_vec(diagram.selected_ids().remove(id).iter());
                }
                return to_vec(
                    diagram
                        .selected_ids()
                        .add(outermost(diagram, id, None))
                        .iter(),
                );
            }

            let resolved = match diagram.parent_of(id) {
                Some(parent) if diagram.selected_ids().contains(parent.id()) => {
                    outermost(diagram, id, Some(parent.id()))
                }
                _ => outermost(diagram, id, None),
            };

            selected.push(resolved.to_string());
        }
    } else {
        for id in ids {
            if !diagram.items().contains_key(id) {
                continue;
            }

            let resolved = outermost(diagram, id, None);
            if !selected.iter().any(|s| s == resolved) {
                selected.push(resolved.to_string());
            }
        }
    }

    if selected.len() > 1 {
        selected.retain(|id| {
            diagram
                .items()
                .get(id)
                .is_some_and(|item| !item.is_locked())
        });
    }

    selected
}

/// Walks to the outermost ancestor group, not crossing `stop`.
fn outermost<'a>(diagram: &'a Diagram, id: &'a str, stop: Option<&str>) -> &'a str {
    let mut current = id;

    loop {
        match diagram.parent_of(current) {
            Some(parent) if Some(parent.id()) != stop => current = parent.id(),
            _ => return current,
        }
    }
}

fn to_vec<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    ids.map(str::to_string).collect()
}
