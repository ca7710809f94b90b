//! Process-level orchestration: the contact store's lifecycle and tracing setup.

pub mod contact_system;
pub mod tracing;

pub use contact_system::*;
pub use self::tracing::*;
