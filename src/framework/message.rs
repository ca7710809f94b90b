//! # Generic Messages
//!
//! The request type exchanged between [`ResourceClient`](super::ResourceClient)
//! and [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request a store operation.
///
/// The variants map one to one onto the record store capabilities:
///
/// - **List**: every stored record, in id order.
/// - **Create**: builds a record from [`ActorEntity::Create`] and stores it.
/// - **Get**: fetches one record by id.
/// - **Update**: applies an [`ActorEntity::Update`] to a stored record.
/// - **Delete**: removes a record by id.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
