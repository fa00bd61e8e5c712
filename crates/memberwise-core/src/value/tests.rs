//! Tests for the erased value seam.

use super::*;

#[test]
fn test_native_eq_same_type() {
    let a = 42i64;
    let b = 42i64;
    let c = 7i64;
    assert!(a.native_eq(&b));
    assert!(!a.native_eq(&c));
}

#[test]
fn test_native_eq_across_types_is_false() {
    let a = 42i64;
    let b = 42u64;
    assert!(!a.native_eq(&b));
}

#[test]
fn test_string_hash_is_deterministic() {
    let a = "John".to_string();
    let b = "John".to_string();
    assert_eq!(a.native_hash(), b.native_hash());
    assert_eq!(a.native_hash(), fnv1a(b"John"));
}

#[test]
fn test_negative_int_hash_sign_extends() {
    assert_eq!((-1i32).native_hash(), u64::MAX);
    assert_eq!((-1i8).native_hash(), (-1i64).native_hash());
}

#[test]
fn test_option_behaves_as_nullable_element() {
    let present: Option<String> = Some("x".to_string());
    let absent: Option<String> = None;
    assert!(!present.is_null());
    assert!(absent.is_null());
    assert_eq!(absent.native_hash(), 0);
    assert_eq!(absent.render(), "null");
    assert!(absent.native_eq(&None::<String>));
    assert!(!absent.native_eq(&present));
}

#[test]
fn test_vec_is_a_sequence() {
    let values = vec!["a".to_string(), "b".to_string()];
    let elements = values.as_sequence().unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].render(), "a");
    assert_eq!(values.render(), "a, b");
}

#[test]
fn test_vec_native_eq_is_pairwise_in_order() {
    let a = vec![1i32, 2];
    let b = vec![1i32, 2];
    let c = vec![2i32, 1];
    assert!(a.native_eq(&b));
    assert!(!a.native_eq(&c));
}

#[test]
fn test_type_key_specificity_ordering() {
    assert!(TypeKey::of::<i32>().specificity() > TypeKey::AnySequence.specificity());
    assert!(TypeKey::AnySequence.specificity() > TypeKey::AnyValue.specificity());
}
