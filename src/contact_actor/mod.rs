//! Contact-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ContactClient;
use crate::framework::ResourceActor;
use crate::model::Contact;
use uuid::Uuid;

/// Creates a new Contact actor and its client.
///
/// Contacts created without an id get a random UUID.
pub fn new(buffer_size: usize) -> (ResourceActor<Contact>, ContactClient) {
    let next_contact_id = || Uuid::new_v4().to_string();

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_contact_id);
    let client = ContactClient::new(generic_client);

    (actor, client)
}
