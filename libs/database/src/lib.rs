//! Database connection management.
//!
//! The processes in this workspace share a single PostgreSQL database; this
//! crate owns the connection-pool configuration and setup so the apps only
//! wire the resulting handle into their repositories.

pub mod postgres;
