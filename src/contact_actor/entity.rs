//! Entity trait implementation for the Contact record.
//!
//! Enables [`Contact`] to be managed by the generic [`crate::framework::ResourceActor`].

use crate::contact_actor::ContactError;
use crate::framework::ActorEntity;
use crate::model::{Contact, ContactCreate, ContactUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Contact {
    type Id = String;
    type Create = ContactCreate;
    type Update = ContactUpdate;
    type Error = ContactError;

    /// Honors a non-blank `id` in the create payload.
    fn requested_id(params: &ContactCreate) -> Option<String> {
        params.requested_id().map(str::to_owned)
    }

    fn from_create_params(id: String, params: ContactCreate) -> Result<Self, ContactError> {
        Ok(Self::new(id, params.name, params.email, params.phone))
    }

    /// Overwrites each field the update sets to a non-empty value.
    async fn on_update(&mut self, update: ContactUpdate) -> Result<(), ContactError> {
        let fields = [
            (&mut self.name, update.name),
            (&mut self.email, update.email),
            (&mut self.phone, update.phone),
        ];
        for (field, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
        Ok(())
    }
}
