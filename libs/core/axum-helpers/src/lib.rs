//! Shared HTTP server plumbing for the Axum-based processes.
//!
//! Domain crates build routers with their state applied internally; the
//! binaries hand those routers to [`serve`], which adds request tracing
//! and graceful shutdown on top.

pub mod server;
pub mod shutdown;

pub use server::serve;
pub use shutdown::shutdown_signal;
