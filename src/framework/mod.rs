//! Generic actor-backed record store.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns the records
//! - [`ResourceClient`] - Cloneable handle for sending requests to the actor
//! - [`FrameworkError`] - Errors shared by every store
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that needs no running actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
