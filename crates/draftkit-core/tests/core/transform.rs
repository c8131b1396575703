use draftkit_core::{Rect2, Rotation, Transform, Vec2};

#[test]
fn move_by_composes() {
    let t = Transform::new(Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0), Rotation::ZERO);

    let stepped = t.move_by(Vec2::new(3.0, 4.0)).move_by(Vec2::new(-1.0, 6.0));
    let direct = t.move_by(Vec2::new(2.0, 10.0));

    assert_eq!(stepped, direct);
}

#[test]
fn aabb_of_rotated_transform() {
    let t = Transform::new(
        Vec2::new(100.0, 100.0),
        Vec2::new(40.0, 20.0),
        Rotation::from_degrees(90.0),
    );

    let aabb = t.aabb();
    assert!(aabb.size.approx_eq(Vec2::new(20.0, 40.0), 1e-9));
    assert!(aabb.center().approx_eq(Vec2::new(100.0, 100.0), 1e-9));
}

#[test]
fn from_rect_round_trips_through_aabb() {
    let rect = Rect2::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
    let t = Transform::from_rect(rect);

    assert_eq!(t.aabb(), rect);
    assert_eq!(t.rotation(), Rotation::ZERO);
}

#[test]
fn aggregate_bounds_under_shared_rotation() {
    // Two boxes rotated 90° as a pair: the aggregate is their unrotated
    // union, spun around the mean of the centers.
    let a = Transform::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Rotation::ZERO);
    let b = Transform::new(Vec2::new(40.0, 0.0), Vec2::new(10.0, 10.0), Rotation::ZERO);

    let rotation = Rotation::from_degrees(90.0);
    let rotated = [
        a.rotate_around(Vec2::new(20.0, 0.0), rotation),
        b.rotate_around(Vec2::new(20.0, 0.0), rotation),
    ];

    let bounds = Transform::from_transforms_and_rotation(&rotated, rotation);

    assert_eq!(bounds.rotation(), rotation);
    assert!(bounds.size().approx_eq(Vec2::new(50.0, 10.0), 1e-9));
    assert!(bounds.position().approx_eq(Vec2::new(20.0, 0.0), 1e-9));
}

#[test]
fn transform_by_bounds_respects_group_rotation_frame() {
    // Item sitting in the left half of a group; doubling the group's
    // width in its rotated frame keeps the item in the left half.
    let old_bounds = Transform::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 40.0),
        Rotation::from_degrees(90.0),
    );
    let new_bounds = Transform::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(200.0, 40.0),
        Rotation::from_degrees(90.0),
    );

    // Local offset (-25, 0) in the group frame shows up rotated in world
    // space as (0, -25).
    let item = Transform::new(
        Vec2::new(0.0, -25.0),
        Vec2::new(10.0, 10.0),
        Rotation::from_degrees(90.0),
    );

    let moved = item.transform_by_bounds(&old_bounds, &new_bounds);

    assert!(moved.position().approx_eq(Vec2::new(0.0, -50.0), 1e-9));
    assert!(moved.size().approx_eq(Vec2::new(20.0, 10.0), 1e-9));
    assert_eq!(moved.rotation(), Rotation::from_degrees(90.0));
}

#[test]
fn round_is_idempotent() {
    let t = Transform::new(
        Vec2::new(10.3, -4.8),
        Vec2::new(33.4, 21.6),
        Rotation::from_degrees(30.0),
    );

    let once = t.round();
    assert_eq!(once.round(), once);
}

#[test]
fn resize_top_left_under_rotation_keeps_rotated_corner() {
    let rotation = Rotation::from_degrees(90.0);
    let t = Transform::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, 20.0), rotation);

    let corner_before = t.position() + t.half_size().negate().rotated_around(Vec2::ZERO, rotation);

    let resized = t.resize_top_left(Vec2::new(60.0, 20.0));
    let corner_after =
        resized.position() + resized.half_size().negate().rotated_around(Vec2::ZERO, rotation);

    assert!(corner_before.approx_eq(corner_after, 1e-9));
    assert_eq!(resized.size(), Vec2::new(60.0, 20.0));
}
