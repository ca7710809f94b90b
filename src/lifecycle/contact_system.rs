use tracing::{error, info};
use crate::clients::ContactClient;

/// Owns the contact store for the lifetime of the process.
///
/// `ContactSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it on shutdown
/// - **Dependency Wiring**: handing out the [`ContactClient`] that the HTTP layer is built on
///
/// # Example
///
/// ```ignore
/// let system = ContactSystem::new(32);
/// let server = Server::new(config, system.contact_client.clone());
/// server.run().await?;
/// system.shutdown().await?;
/// ```
pub struct ContactSystem {
    /// Client for interacting with the Contact actor
    pub contact_client: ContactClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ContactSystem {
    /// Creates the contact actor and spawns it in its own Tokio task.
    ///
    /// `channel_capacity` bounds the number of queued store requests.
    pub fn new(channel_capacity: usize) -> Self {
        let (contact_actor, contact_client) = crate::contact_actor::new(channel_capacity);
        let handle = tokio::spawn(contact_actor.run());

        Self {
            contact_client,
            handle,
        }
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's client and waits for the actor to drain. The actor
    /// only exits once every other clone of the client is gone too, so callers
    /// drop the HTTP server first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down contact store...");

        drop(self.contact_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Contact store shutdown complete.");
        Ok(())
    }
}
