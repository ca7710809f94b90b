//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! Levels are taken from `RUST_LOG` and default to `info`. The compact format
//! hides module paths; the store's log lines carry an `entity_type` field
//! instead.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: actor start and shutdown, with the final table size
//! - **Store operations**: List, Create, Get, Update and Delete (debug), mutations (info), failures (warn)
//! - **Requests**: one span per HTTP request from `tower-http`, plus a span per handler and client call
//! - **Errors**: store failures behind a 500 are logged at error level with the full message
//!
//! ```bash
//! # Request and mutation logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the store
//! RUST_LOG=contact_service::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a create looks like:
//!
//! ```text
//! DEBUG request{method=POST uri=/contacts version=HTTP/1.1}:create_contact: Create entity_type="Contact" params=ContactCreate { id: None, name: "John Doe", .. }
//! INFO  request{method=POST uri=/contacts version=HTTP/1.1}:create_contact: Created entity_type="Contact" id=3c1d... size=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
