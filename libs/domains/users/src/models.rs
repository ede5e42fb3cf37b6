use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity
///
/// `id` is assigned exactly once, by the persistence layer, and is
/// immutable afterwards. The timestamps are maintained by storage and are
/// never part of API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier, storage-assigned
    pub id: u64,
    /// Display name; the only caller-mutable field
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// Request parameters for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

/// Request parameters for updating a user
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: String,
}
