// tests/vector_tests.rs

use vecmath::{Rounded, Vector, VectorError};

const EPS: f64 = 1e-12;

#[test]
fn test_constructors() {
    assert_eq!(Vector::zero(3).as_slice(), &[0.0, 0.0, 0.0]);
    assert_eq!(Vector::one(2).as_slice(), &[1.0, 1.0]);
    assert_eq!(Vector::filled(4, 2.5).as_slice(), &[2.5; 4]);
    assert!(Vector::zero(0).is_empty());
    assert_eq!(Vector::new(vec![1.0, 2.0]), Vector::from([1.0, 2.0]));
    let collected: Vector = (1..=3).map(f64::from).collect();
    assert_eq!(collected, Vector::from([1.0, 2.0, 3.0]));
}

#[cfg(feature = "random")]
#[test]
fn test_random_range() {
    let v = Vector::random(256);
    assert_eq!(v.len(), 256);
    assert!(v.iter().all(|&e| (0.0..1.0).contains(&e)));
}

#[test]
fn test_norm() {
    assert!((Vector::from([3.0, 4.0]).norm() - 5.0).abs() < EPS);
    assert_eq!(Vector::zero(5).norm(), 0.0);
}

#[test]
fn test_equals_is_exact() {
    let a = Vector::from([1.0, 2.0, 3.0]);
    assert!(a.equals(&Vector::from([1.0, 2.0, 3.0])));
    assert!(!a.equals(&Vector::from([1.0, 2.0, 3.0 + 1e-15])));
    assert!(!a.equals(&Vector::from([1.0, 2.0])));
    assert!(!a.equals(&Vector::from([3.0, 2.0, 1.0])));
}

#[test]
fn test_approx_eq() {
    let a = Vector::from([0.1 + 0.2, 1.0]);
    let b = Vector::from([0.3, 1.0]);
    assert!(!a.equals(&b));
    assert!(a.approx_eq(&b, EPS));
    assert!(!a.approx_eq(&Vector::from([0.3]), EPS));
}

#[test]
fn test_unit() {
    let u = Vector::from([3.0, 4.0]).unit();
    assert!(u.approx_eq(&Vector::from([0.6, 0.8]), EPS));
    assert!((u.norm() - 1.0).abs() < EPS);
    assert_eq!(Vector::zero(3).unit(), Vector::zero(3));
}

#[test]
fn test_unit_extreme_magnitudes() {
    let big = Vector::from([1e200, 1e200]);
    assert!(big.norm().is_finite());
    assert!((big.norm() / 1e200 - 2f64.sqrt()).abs() < EPS);
    let u = big.unit();
    assert!((u.norm() - 1.0).abs() < EPS);
    assert!(u.approx_eq(&Vector::filled(2, 0.5f64.sqrt()), EPS));

    let tiny = Vector::from([1e-200, 0.0]);
    assert!(tiny.norm() > 0.0);
    assert_eq!(tiny.unit(), Vector::from([1.0, 0.0]));
}

#[test]
fn test_add_sub() {
    assert_eq!(Vector::zero(3).add_vector(&Vector::one(3)), Vector::from([1.0, 1.0, 1.0]));
    assert_eq!(Vector::from([1.0, 2.0]).add_scalar(0.5), Vector::from([1.5, 2.5]));
    assert_eq!(
        Vector::from([4.0, 5.0, 6.0]).sub_vector(&Vector::one(3)),
        Vector::from([3.0, 4.0, 5.0])
    );
    assert_eq!(Vector::from([1.0, 2.0]).sub_scalar(1.0), Vector::from([0.0, 1.0]));
}

#[test]
fn test_scale_and_dot() {
    let v = Vector::from([1.5, -2.0, 0.5]);
    assert_eq!(v.scale(2.0), Vector::from([3.0, -4.0, 1.0]));
    let a = Vector::from([1.0, 2.0, 3.0]);
    let b = Vector::from([4.0, -5.0, 6.0]);
    // 1*4 + 2*(-5) + 3*6 = 12
    assert!((a.dot(&b) - 12.0).abs() < EPS);
}

#[test]
fn test_distance() {
    let a = Vector::from([1.0, 1.0]);
    let b = Vector::from([4.0, 5.0]);
    assert!((a.distance_to(&b) - 5.0).abs() < EPS);
    assert_eq!(a.distance_to(&a), 0.0);
}

#[test]
fn test_fill_mutates_in_place() {
    let mut v = Vector::from([1.0, 2.0, 3.0]);
    v.fill(7.0);
    assert_eq!(v, Vector::filled(3, 7.0));
    assert_eq!(v.len(), 3);
}

#[test]
fn test_inverse_resize_concat() {
    let v = Vector::from([1.0, 2.0, 3.0]);
    assert_eq!(v.inverse(), Vector::from([3.0, 2.0, 1.0]));
    assert_eq!(Vector::from([1.0, 2.0]).resize(4), Vector::from([1.0, 2.0, 0.0, 0.0]));
    assert_eq!(Vector::from([1.0, 2.0, 3.0, 4.0]).resize(2), Vector::from([1.0, 2.0]));

    let joined = v.concat(&Vector::from([4.0]));
    assert_eq!(joined, Vector::from([1.0, 2.0, 3.0, 4.0]));
    // receiver untouched
    assert_eq!(v.len(), 3);
}

#[test]
fn test_map() {
    let v = Vector::from([1.0, 4.0, 9.0]);
    assert_eq!(v.map(f64::sqrt), Vector::from([1.0, 2.0, 3.0]));
    assert_eq!(v, Vector::from([1.0, 4.0, 9.0]));
}

#[test]
#[should_panic(expected = "dimension mismatch: expected 2, got 3")]
fn test_dot_mismatch_panics() {
    Vector::from([1.0, 2.0]).dot(&Vector::from([1.0, 2.0, 3.0]));
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn test_add_mismatch_panics() {
    Vector::one(2).add_vector(&Vector::one(4));
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn test_distance_mismatch_panics() {
    Vector::one(2).distance_to(&Vector::one(1));
}

#[test]
fn test_checked_mismatch() {
    let a = Vector::one(2);
    let b = Vector::one(3);
    let expected = VectorError::DimensionMismatch { expected: 2, got: 3 };
    assert_eq!(a.try_dot(&b), Err(expected));
    assert_eq!(a.try_add_vector(&b), Err(expected));
    assert_eq!(a.try_sub_vector(&b), Err(expected));
    assert_eq!(a.try_distance_to(&b), Err(expected));
    assert_eq!(a.try_dot(&a), Ok(2.0));
}

#[test]
fn test_index() {
    let mut v = Vector::from([1.0, 2.0]);
    v[1] = 5.0;
    assert_eq!(v[0], 1.0);
    assert_eq!(v[1], 5.0);
}

#[test]
fn test_display_rounded() {
    let v = Vector::from([1.23456789, -2.3456789, 3.456789]);
    let s = format!("{}", Rounded::new(&v, 3));
    assert_eq!(s, "Vector [1.235, -2.346, 3.457]");
}
