//! Users Domain
//!
//! The complete domain implementation for the `User` resource: the JSON
//! HTTP binding, the service layer, and the persistence boundary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (JSON)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← application logic, error context
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs
//! └─────────────┘
//! ```
//!
//! The repository boundary is a trait so storage stays substitutable: the
//! apps wire in [`PgUserRepository`], tests use [`InMemoryUserRepository`]
//! or a mock.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
