//! A small fully-populated record fixture.

use memberwise_core::{MemberDescriptor, Members};

/// An account with an id, a name, and a list of phone numbers.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub phones: Vec<String>,
}

impl Account {
    /// The canonical sample used across the format and hash tests.
    pub fn john() -> Self {
        Account {
            id: 19,
            name: "John".to_string(),
            phones: vec!["12-33-19".to_string(), "66-18-23".to_string()],
        }
    }
}

impl Members for Account {
    fn members() -> Vec<MemberDescriptor> {
        vec![
            MemberDescriptor::required::<Self, i64, _>("id", |account| &account.id),
            MemberDescriptor::required::<Self, String, _>("name", |account| &account.name),
            MemberDescriptor::required::<Self, Vec<String>, _>("phones", |account| {
                &account.phones
            })
            .sequence(),
        ]
    }
}
