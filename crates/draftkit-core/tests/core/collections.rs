use draftkit_core::{ImmutableIdMap, ImmutableList, ImmutableMap, ImmutableSet, WithId};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Card {
    id: String,
    label: String,
}

impl Card {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

impl WithId for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

#[test]
fn list_survives_serde() {
    let list = ImmutableList::of(["a".to_string(), "b".to_string(), "c".to_string()]);

    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["a","b","c"]"#);

    let back: ImmutableList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}

#[test]
fn id_map_preserves_order_through_serde() {
    let map = ImmutableIdMap::of([
        Card::new("z", "last added first"),
        Card::new("a", "second"),
    ]);

    let json = serde_json::to_string(&map).unwrap();
    let back: ImmutableIdMap<Card> = serde_json::from_str(&json).unwrap();

    let order: Vec<_> = back.keys().collect();
    assert_eq!(order, ["z", "a"]);
    assert_eq!(back, map);
}

#[test]
fn id_map_update_chain_shares_until_first_change() {
    let map = ImmutableIdMap::of([Card::new("a", "one"), Card::new("b", "two")]);

    let unchanged = map.update("a", |c| c.clone()).update("missing", |c| c.clone());
    assert!(unchanged.ptr_eq(&map));

    let changed = unchanged.update("a", |c| Card::new(&c.id, "renamed"));
    assert!(!changed.ptr_eq(&map));
    assert_eq!(changed.get("a").map(|c| c.label.as_str()), Some("renamed"));
    // The original snapshot still sees the old value.
    assert_eq!(map.get("a").map(|c| c.label.as_str()), Some("one"));
}

#[test]
fn set_round_trips_as_array() {
    let set = ImmutableSet::of(["s1", "s2"]);

    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["s1","s2"]"#);

    let back: ImmutableSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn map_serializes_with_sorted_keys() {
    let map = ImmutableMap::of([("TEXT", 1), ("COLOR", 2)]);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"COLOR":2,"TEXT":1}"#);
}

#[test]
fn snapshots_are_independent() {
    let before = ImmutableList::of([1, 2, 3]);
    let after = before.push(4).remove(&1);

    assert_eq!(before.as_slice(), [1, 2, 3]);
    assert_eq!(after.as_slice(), [2, 3, 4]);
}
