use crate::clients::actor_client::ActorClient;
use crate::contact_actor::ContactError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Contact, ContactCreate, ContactUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Contact actor.
#[derive(Clone)]
pub struct ContactClient {
    inner: ResourceClient<Contact>,
}

impl ContactClient {
    pub fn new(inner: ResourceClient<Contact>) -> Self {
        Self { inner }
    }

    /// Every stored contact, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ContactError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Fetches a contact, treating absence as [`ContactError::NotFound`].
    #[instrument(skip(self))]
    pub async fn find_contact(&self, id: String) -> Result<Contact, ContactError> {
        self.get(id.clone())
            .await?
            .ok_or(ContactError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn create_contact(&self, params: ContactCreate) -> Result<Contact, ContactError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_contact(
        &self,
        id: String,
        update: ContactUpdate,
    ) -> Result<Contact, ContactError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Contact> for ContactClient {
    type Error = ContactError;

    fn inner(&self) -> &ResourceClient<Contact> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ContactError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ContactError::AlreadyExists(id),
            other => ContactError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_update, MockClient};

    #[tokio::test]
    async fn test_find_contact_maps_absence_to_not_found() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_get("3".to_string()).return_ok(None);
        let client = ContactClient::new(mock.client());

        let err = client.find_contact("3".to_string()).await.unwrap_err();
        assert_eq!(err, ContactError::NotFound("3".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_errors_are_mapped() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_delete("9".to_string())
            .return_err(FrameworkError::NotFound("9".to_string()));
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("1".to_string()));
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let client = ContactClient::new(mock.client());

        assert_eq!(
            client.delete("9".to_string()).await,
            Err(ContactError::NotFound("9".to_string()))
        );
        assert_eq!(
            client.create_contact(ContactCreate::default()).await,
            Err(ContactError::AlreadyExists("1".to_string()))
        );
        assert_eq!(
            client.list_contacts().await,
            Err(ContactError::ActorCommunicationError("Actor closed".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_forwards_payload_unchanged() {
        let (inner, mut receiver) = create_mock_client::<Contact>(4);
        let client = ContactClient::new(inner);

        let update = ContactUpdate {
            email: Some("new@example.com".into()),
            ..Default::default()
        };
        let task = tokio::spawn(async move { client.update_contact("5".into(), update).await });

        let (id, received, respond_to) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, "5");
        assert_eq!(received.email.as_deref(), Some("new@example.com"));
        assert_eq!(received.name, None);

        let stored = Contact::new("5", "Eve", "new@example.com", "");
        respond_to.send(Ok(stored.clone())).unwrap();
        assert_eq!(task.await.unwrap(), Ok(stored));
    }
}
