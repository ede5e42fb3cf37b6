use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for user operations.
///
/// A thin orchestration layer between transport and persistence, and the
/// designated seam for future business rules. Each operation forwards to
/// the repository and adds its own operation-level error context on
/// failure; success values pass through unchanged, including the
/// `Ok(None)` absent convention from `get`.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get(&self, id: u64) -> UserResult<Option<User>> {
        self.repository
            .get(id)
            .await
            .map_err(|e| UserError::wrap("failed get user", e))
    }

    pub async fn find(&self) -> UserResult<Vec<User>> {
        self.repository
            .find()
            .await
            .map_err(|e| UserError::wrap("failed find users", e))
    }

    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        self.repository
            .create(input)
            .await
            .map_err(|e| UserError::wrap("failed create user", e))
    }

    pub async fn update(&self, id: u64, input: UpdateUser) -> UserResult<()> {
        self.repository
            .update(id, input)
            .await
            .map_err(|e| UserError::wrap("failed update user", e))
    }

    pub async fn delete(&self, id: u64) -> UserResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| UserError::wrap("failed delete user", e))
    }
}
