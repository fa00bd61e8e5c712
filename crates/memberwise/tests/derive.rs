//! End-to-end tests for `#[derive(Members)]` through the builder facades.

use memberwise::prelude::*;

#[derive(Members)]
struct Account {
    id: i64,
    name: String,
    #[member(tag = "contact")]
    phones: Vec<String>,
    #[member(tag = "contact")]
    email: Option<String>,
    #[member(skip)]
    cached_display: String,
}

fn john() -> Account {
    Account {
        id: 19,
        name: "John".to_string(),
        phones: vec!["12-33-19".to_string(), "66-18-23".to_string()],
        email: Some("john@example.com".to_string()),
        cached_display: "unused".to_string(),
    }
}

#[test]
fn derived_members_enumerate_in_declaration_order() {
    let names: Vec<&str> = Account::members().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["id", "name", "phones", "email"]);
    assert_eq!(Account::type_name(), "Account");
}

#[test]
fn skipped_fields_are_not_collected() {
    assert!(Account::member("cached_display").is_none());
}

#[test]
fn vec_fields_are_sequences() {
    assert!(Account::member("phones").unwrap().is_sequence());
    assert!(!Account::member("name").unwrap().is_sequence());
}

#[test]
fn option_fields_flatten_to_nullable_accessors() {
    let mut account = john();
    let member = Account::member("email").unwrap();
    assert!(member.value(&account).is_some());
    account.email = None;
    assert!(member.value(&account).is_none());
}

#[test]
fn tagged_fields_are_filterable() {
    let names: Vec<&str> = Account::members_tagged("contact")
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(names, ["phones", "email"]);
}

#[test]
fn derived_equality_end_to_end() {
    let eq = EquivalenceBuilder::<Account>::new()
        .append_public_members()
        .build();
    let a = john();
    let mut b = john();
    b.cached_display = "different but skipped".to_string();
    assert!(eq.eq(&a, &b));
    b.name = "Jane".to_string();
    assert!(!eq.eq(&a, &b));
}

#[test]
fn derived_hash_end_to_end() {
    let hash = HashCodeBuilder::<Account>::new()
        .append_public_members()
        .build();
    assert_eq!(hash.hash(&john()), hash.hash(&john()));
    let mut other = john();
    other.phones.reverse();
    assert_ne!(hash.hash(&john()), hash.hash(&other));
}

#[test]
fn derived_format_end_to_end() {
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
        format.format(&john()),
        "Account<'id':\"19\",'name':\"John\",'phones':\"12-33-19, 66-18-23\",'email':\"john@example.com\">"
    );
}

#[test]
fn derived_format_drops_null_members() {
    let format = FormatBuilder::<Account>::new()
        .append_public_members()
        .build();
    let mut account = john();
    account.email = None;
    assert_eq!(
        format.format(&account),
        "id: 19, name: John, phones: 12-33-19, 66-18-23"
    );
}

#[derive(Members)]
struct Preferences {
    #[member(default = "system".to_string())]
    theme: Option<String>,
}

#[test]
fn default_values_fill_absent_members() {
    let format = FormatBuilder::<Preferences>::new()
        .append_public_members()
        .build();
    assert_eq!(format.format(&Preferences { theme: None }), "theme: system");
    assert_eq!(
        format.format(&Preferences {
            theme: Some("dark".to_string())
        }),
        "theme: dark"
    );
}
