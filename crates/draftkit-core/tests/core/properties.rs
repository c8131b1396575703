use draftkit_core::{ImmutableList, Rotation, Transform, Vec2};
use proptest::prelude::*;

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_size() -> impl Strategy<Value = Vec2> {
    (0.0..500.0f64, 0.0..500.0f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_transform() -> impl Strategy<Value = Transform> {
    (arb_vec2(), arb_size(), -720.0..720.0f64)
        .prop_map(|(p, s, r)| Transform::new(p, s, Rotation::from_degrees(r)))
}

proptest! {
    #[test]
    fn rotation_always_normalized(degrees in -10_000.0..10_000.0f64) {
        let r = Rotation::from_degrees(degrees);

        prop_assert!(r.degrees() >= 0.0);
        prop_assert!(r.degrees() < 360.0);
    }

    #[test]
    fn move_by_composes((t, a, b) in (arb_transform(), arb_vec2(), arb_vec2())) {
        let stepped = t.move_by(a).move_by(b);
        let direct = t.move_by(a + b);

        prop_assert!(stepped.position().approx_eq(direct.position(), 1e-6));
        prop_assert_eq!(stepped.size(), direct.size());
    }

    #[test]
    fn transform_by_equal_bounds_is_identity((t, bounds) in (arb_transform(), arb_transform())) {
        prop_assert_eq!(t.transform_by_bounds(&bounds, &bounds), t);
    }

    #[test]
    fn round_is_idempotent(t in arb_transform()) {
        let once = t.round();

        prop_assert_eq!(once.round(), once);
    }

    #[test]
    fn aabb_contains_center(t in arb_transform()) {
        prop_assert!(t.aabb().inflate(1e-9).contains_point(t.position()));
    }

    #[test]
    fn reorder_preserves_membership(
        items in proptest::collection::vec(0u8..20, 1..12),
        picks in proptest::collection::vec(0u8..20, 0..4),
    ) {
        let list = ImmutableList::of(items.clone());

        for reordered in [
            list.bring_to_front(&picks),
            list.bring_forwards(&picks),
            list.send_backwards(&picks),
            list.send_to_back(&picks),
        ] {
            let mut before: Vec<u8> = list.iter().copied().collect();
            let mut after: Vec<u8> = reordered.iter().copied().collect();
            before.sort_unstable();
            after.sort_unstable();

            prop_assert_eq!(before, after);
        }
    }
}
