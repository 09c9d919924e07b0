#![cfg(feature = "serde")]

use vecmath::{Vec2, Vec3, Vector};

#[test]
fn test_vector_is_a_plain_json_array() {
    let v = Vector::from([1.0, -2.5, 3.0]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.0,-2.5,3.0]");
    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_fixed_vectors_use_named_fields() {
    let json = serde_json::to_string(&Vec2::new(1.0, 2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
    let v: Vec3 = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).unwrap();
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}
