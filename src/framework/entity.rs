//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by the generic
//! [`ResourceActor`](super::ResourceActor). Associated types pin down the id,
//! the create and update payloads, and the entity's own error type, so a
//! `ContactCreate` can only ever be sent to the actor that stores `Contact`s.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::requested_id`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing, so most entities only implement
//! [`ActorEntity::from_create_params`] and [`ActorEntity::on_update`].

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// `Ord` gives the store its natural listing order.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id the caller asked for, if the create payload carries one.
    ///
    /// When this returns `None` the actor falls back to its id generator.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full entity from the assigned id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for a stored entity.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
