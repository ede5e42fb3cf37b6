use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// The only layer aware of storage technology. A lookup that matches no
/// record is a successful `Ok(None)`/no-op outcome, distinct from a
/// storage failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a single user by id; `Ok(None)` when no record matches
    async fn get(&self, id: u64) -> UserResult<Option<User>>;

    /// Fetch all users; result order is persistence-defined
    async fn find(&self) -> UserResult<Vec<User>>;

    /// Persist a new user; storage assigns the id and both timestamps
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Persist the mutable fields of the matching record; no error when
    /// the id does not exist
    async fn update(&self, id: u64, input: UpdateUser) -> UserResult<()>;

    /// Remove the matching record; no error when the id does not exist
    async fn delete(&self, id: u64) -> UserResult<()>;
}

/// In-memory implementation of [`UserRepository`] (for development and
/// testing), assigning ids the way storage would: monotonically from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<u64, User>>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: u64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().cloned().collect();
        // sorted only so this implementation is deterministic
        result.sort_by_key(|u| u.id);
        Ok(result)
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let user = User {
            id,
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        users.insert(id, user.clone());

        tracing::debug!(user_id = id, "created user");
        Ok(user)
    }

    async fn update(&self, id: u64, input: UpdateUser) -> UserResult<()> {
        let mut users = self.users.write().await;

        if let Some(user) = users.get_mut(&id) {
            user.name = input.name;
            user.updated_at = Utc::now();
            tracing::debug!(user_id = id, "updated user");
        }
        Ok(())
    }

    async fn delete(&self, id: u64) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::debug!(user_id = id, "deleted user");
        }
        Ok(())
    }
}
