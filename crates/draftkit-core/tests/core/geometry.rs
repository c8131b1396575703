use draftkit_core::{Rect2, Rotation, Vec2};

#[test]
fn vec2_serializes_as_object() {
    let json = serde_json::to_value(Vec2::new(1.5, -2.0)).unwrap();

    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
}

#[test]
fn rotation_serializes_as_degrees() {
    let json = serde_json::to_value(Rotation::from_degrees(-45.0)).unwrap();

    assert_eq!(json, serde_json::json!(315.0));

    let back: Rotation = serde_json::from_value(json).unwrap();
    assert_eq!(back, Rotation::from_degrees(315.0));
}

#[test]
fn rotation_trig_matches_angle() {
    let r = Rotation::from_degrees(60.0);

    assert!((r.cos() - 0.5).abs() < 1e-12);
    assert!((r.sin() - 3.0f64.sqrt() / 2.0).abs() < 1e-12);
}

#[test]
fn rect_contains_and_intersects() {
    let outer = Rect2::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
    let inner = Rect2::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
    let crossing = Rect2::new(Vec2::new(90.0, 90.0), Vec2::new(40.0, 40.0));
    let outside = Rect2::new(Vec2::new(200.0, 0.0), Vec2::new(10.0, 10.0));

    assert!(outer.contains_rect(&inner));
    assert!(!outer.contains_rect(&crossing));
    assert!(outer.intersects(&crossing));
    assert!(!outer.intersects(&outside));
    assert!(outer.contains_point(Vec2::new(100.0, 100.0)));
}

#[test]
fn inflate_grows_every_side() {
    let r = Rect2::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)).inflate(5.0);

    assert_eq!(r, Rect2::new(Vec2::new(5.0, 5.0), Vec2::new(30.0, 30.0)));
}

#[test]
fn rotated_aabb_of_180_degrees_matches_original() {
    let aabb = Rect2::rotated(
        Vec2::new(50.0, 40.0),
        Vec2::new(30.0, 10.0),
        Rotation::from_degrees(180.0),
    );

    assert!(aabb.position.approx_eq(Vec2::new(35.0, 35.0), 1e-9));
    assert!(aabb.size.approx_eq(Vec2::new(30.0, 10.0), 1e-9));
}
