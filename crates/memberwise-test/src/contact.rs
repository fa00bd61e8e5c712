//! A record fixture with a nullable member and marker tags.

use memberwise_core::{MemberDescriptor, Members};

/// A contact with a nullable email address and a list of phone numbers.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: i64,
    pub email: Option<String>,
    pub phones: Vec<String>,
}

impl Contact {
    /// The canonical sample.
    pub fn john() -> Self {
        Contact {
            id: 19,
            email: Some("john@example.com".to_string()),
            phones: vec!["12-33-19".to_string(), "66-18-23".to_string()],
        }
    }

    /// A sample with the given phone numbers.
    pub fn with_phones(phones: &[&str]) -> Self {
        Contact {
            phones: phones.iter().map(|phone| phone.to_string()).collect(),
            ..Self::john()
        }
    }
}

impl Members for Contact {
    fn members() -> Vec<MemberDescriptor> {
        vec![
            MemberDescriptor::required::<Self, i64, _>("id", |contact| &contact.id),
            MemberDescriptor::optional::<Self, String, _>("email", |contact| {
                contact.email.as_ref()
            })
            .with_tags(&["pii"]),
            MemberDescriptor::required::<Self, Vec<String>, _>("phones", |contact| {
                &contact.phones
            })
            .sequence()
            .with_tags(&["pii", "phone"]),
        ]
    }
}
