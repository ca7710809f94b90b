//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod contact_client;

pub use actor_client::*;
pub use contact_client::*;
