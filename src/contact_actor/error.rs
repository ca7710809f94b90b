//! Error types for the Contact actor.

use thiserror::Error;

/// Errors that can occur during contact operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    /// The requested contact was not found.
    ///
    /// The id is kept for logging; the message is the same for every id.
    #[error("Contact not found")]
    NotFound(String),

    /// A contact with the requested id is already stored.
    #[error("Contact already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

