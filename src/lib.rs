//! # Contact Service
//!
//! A CRUD HTTP service for a single **Contact** resource (`id`, `name`,
//! `email`, `phone`).
//!
//! Requests are parsed by [`api`] handlers, which make one call each into the
//! contact store and turn its answer into a JSON response. The store is a
//! resource actor: a Tokio task that owns the contact table and processes
//! requests one at a time, reached through a cloneable client.
//!
//! ## Module Tour
//!
//! ### 1. The Store Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait it stores. Also home to the
//! [`MockClient`](framework::mock::MockClient) used by handler tests.
//!
//! ### 2. The Record ([`model`], [`contact_actor`])
//! [`Contact`](model::Contact) and its payloads, the entity implementation and
//! [`ContactError`](contact_actor::ContactError).
//!
//! ### 3. The Interface ([`clients`])
//! [`ContactClient`](clients::ContactClient) wraps the generic client and maps
//! store failures into typed errors, keeping "not found" distinct.
//!
//! ### 4. The HTTP Surface ([`api`], [`server`])
//! Routes, handlers, the `{"message": ...}` error body, and the server with
//! graceful shutdown.
//!
//! ### 5. The Process ([`config`], [`lifecycle`])
//! Layered configuration, the [`ContactSystem`](lifecycle::ContactSystem) that
//! owns the store task, and tracing setup.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info CONTACTS_PORT=8080 cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod contact_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod server;
