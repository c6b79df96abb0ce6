//! # Tracing Setup
//!
//! Structured logging for the whole shop. Every actor logs with an
//! `entity_type` field and ids, so module paths are left out.
//!
//! ```bash
//! RUST_LOG=info cargo run                      # lifecycle and commits
//! RUST_LOG=debug cargo run                     # every request with payloads
//! RUST_LOG=laundry_desk::builder=debug cargo run
//! ```

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
