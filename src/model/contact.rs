use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`contact_actor::entity`](crate::contact_actor::entity) for:
/// - Creation parameters ([`ContactCreate`])
/// - Update parameters ([`ContactUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for creating a new contact.
///
/// Every field may be omitted. Missing text fields are stored as empty
/// strings; a missing, `null` or blank `id` lets the store generate one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCreate {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for updating an existing contact.
///
/// Only the fields present with a non-empty value are written. The record id
/// is never part of an update; it always comes from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// Creates a new Contact instance.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl ContactCreate {
    /// The caller-chosen id as given, ignoring blank values.
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}
