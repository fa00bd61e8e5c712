//! Builder-level tests over the hand-written fixtures.

use memberwise_compose::Enclosure;
use memberwise_core::{fnv1a, MemberValue, MemberwiseError};
use memberwise_test::{Account, Contact};

use super::*;

#[test]
fn test_member_override_wins_over_type_override() {
    // First-element comparison pinned to the member, length comparison to
    // the type; the member-level behavior must win.
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .compare_type_with(|a: &Vec<String>, b: &Vec<String>| a.len() == b.len())
        .compare_member_with("phones", |a: &Vec<String>, b: &Vec<String>| {
            a.first() == b.first()
        })
        .unwrap()
        .build();
    let a = Contact::with_phones(&["x", "y"]);
    let b = Contact::with_phones(&["x"]);
    let c = Contact::with_phones(&["z"]);
    assert!(eq.eq(&a, &b));
    assert!(!eq.eq(&a, &c));
}

#[test]
fn test_most_specific_type_override_wins() {
    let hash = HashCodeBuilder::<Contact>::new()
        .append_public_members()
        .hash_any_with(|_| 7)
        .hash_type_with(|value: &i64| *value as u64 + 1)
        .build();
    let contact = Contact::john();
    // id uses the i64-specific step, email and phones the catch-all.
    let expected = 20u64.wrapping_mul(397) ^ 7u64.wrapping_mul(397) ^ 7u64.wrapping_mul(397);
    assert_eq!(hash.hash(&contact), expected);
}

#[test]
fn test_append_twice_is_idempotent() {
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .append_public_members()
        .build();
    assert_eq!(eq.operations().len(), 3);
}

#[test]
fn test_tagged_append_is_a_subset() {
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_members_tagged("pii")
        .build();
    let names: Vec<&str> = eq.operations().iter().map(|op| op.member().name()).collect();
    assert_eq!(names, ["email", "phones"]);
}

#[test]
fn test_null_object_handling() {
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .build();
    let contact = Contact::john();
    assert!(eq.eq_opt(None, None));
    assert!(!eq.eq_opt(Some(&contact), None));
    assert!(eq.eq(&contact, &contact));
}

#[test]
fn test_equal_objects_hash_equal() {
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .build();
    let hash = HashCodeBuilder::<Contact>::new()
        .append_public_members()
        .build();
    let a = Contact::john();
    let b = Contact::john();
    assert!(eq.eq(&a, &b));
    assert_eq!(hash.hash(&a), hash.hash(&b));
}

#[test]
fn test_ignore_collection_order() {
    let eq = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .ignore_collection_order()
        .build();
    assert!(eq.eq(
        &Contact::with_phones(&["a", "f"]),
        &Contact::with_phones(&["f", "a"])
    ));
    assert!(!eq.eq(
        &Contact::with_phones(&["a", "f"]),
        &Contact::with_phones(&["f", "a", "b"])
    ));
    assert!(!eq.eq(
        &Contact::with_phones(&["a", "f"]),
        &Contact::with_phones(&[])
    ));
}

#[test]
fn test_seed_and_step_flow_into_sequence_hashing() {
    // Step configured after the append must still govern the element-wise
    // combination inside the sequence member.
    let hash = HashCodeBuilder::<Contact>::new()
        .append_members_tagged("phone")
        .with_step(3)
        .build();
    let contact = Contact::with_phones(&["a", "f"]);
    let member = fnv1a(b"a").wrapping_mul(3) ^ fnv1a(b"f").wrapping_mul(3);
    assert_eq!(hash.hash(&contact), member.wrapping_mul(3));
}

#[test]
fn test_unknown_member_fails_fast() {
    let result = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .compare_member_with("nope", |a: &i64, b: &i64| a == b);
    assert!(matches!(
        result,
        Err(MemberwiseError::UnknownMember { owner: "Contact", .. })
    ));
}

#[test]
fn test_mismatched_member_type_fails_fast() {
    let result = HashCodeBuilder::<Contact>::new()
        .append_public_members()
        .hash_member_with("id", |value: &String| value.len() as u64);
    assert!(matches!(
        result,
        Err(MemberwiseError::MemberTypeMismatch { name: "id", .. })
    ));
}

#[test]
fn test_round_trip_formatting() {
    let format = FormatBuilder::<Account>::new()
        .append_public_members()
        .with_member_separator(",")
        .with_name_value_separator(":")
        .with_name_enclosure(Enclosure::quotes("'"))
        .with_value_enclosure(Enclosure::quotes("\""))
        .with_body_enclosure(Enclosure::of("<", ">"))
        .with_class_name(true)
        .build();
    assert_eq!(
        format.format(&Account::john()),
        "Account<'id':\"19\",'name':\"John\",'phones':\"12-33-19, 66-18-23\">"
    );
}

#[test]
fn test_format_member_override() {
    let format = FormatBuilder::<Account>::new()
        .append_public_members()
        .format_member_with("phones", |phones: &Vec<String>| {
            format!("{} numbers", phones.len())
        })
        .unwrap()
        .build();
    assert_eq!(
        format.format(&Account::john()),
        "id: 19, name: John, phones: 2 numbers"
    );
}

#[test]
fn test_builder_accumulates_across_builds() {
    let builder = EquivalenceBuilder::<Contact>::new().append_public_members();
    let plain = builder.build();
    let builder = builder.compare_any_with(|_: &dyn MemberValue, _: &dyn MemberValue| true);
    let permissive = builder.build();
    let a = Contact::john();
    let mut b = Contact::john();
    b.id = 99;
    assert!(!plain.eq(&a, &b));
    assert!(permissive.eq(&a, &b));
    // The earlier snapshot is unaffected by later configuration.
    assert!(!plain.eq(&a, &b));
}

#[test]
fn test_built_comparators_compare_structurally() {
    let builder = EquivalenceBuilder::<Contact>::new().append_public_members();
    let first = builder.build();
    let second = builder.build();
    assert!(first == second);
    let other = EquivalenceBuilder::<Contact>::new()
        .append_public_members()
        .build();
    // Different builders resolve distinct function instances.
    assert!(first != other);
}
