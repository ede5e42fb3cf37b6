use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entity;
use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// PostgreSQL implementation of [`UserRepository`] on SeaORM.
///
/// Holds the process-wide connection pool handed in at construction; the
/// pool is safe for concurrent use across request tasks.
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get(&self, id: u64) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id as i64)
            .one(&self.db)
            .await
            .map_err(|e| UserError::wrap("failed get user", e))?;

        Ok(model.map(User::from))
    }

    async fn find(&self) -> UserResult<Vec<User>> {
        // unbounded on purpose; result order is whatever storage returns
        let models = entity::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| UserError::wrap("failed find users", e))?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active: entity::ActiveModel = input.into();

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| UserError::wrap("failed create user", e))?;

        tracing::debug!(user_id = model.id, "created user");
        Ok(model.into())
    }

    async fn update(&self, id: u64, input: UpdateUser) -> UserResult<()> {
        // zero rows affected is fine; a missing id is a no-op
        entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(input.name))
            .col_expr(entity::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id as i64))
            .exec(&self.db)
            .await
            .map_err(|e| UserError::wrap("failed update user", e))?;

        Ok(())
    }

    async fn delete(&self, id: u64) -> UserResult<()> {
        entity::Entity::delete_by_id(id as i64)
            .exec(&self.db)
            .await
            .map_err(|e| UserError::wrap("failed delete user", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn row(id: i64, name: &str) -> entity::Model {
        let now = Utc::now();
        entity::Model {
            id,
            name: name.to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_get_maps_row_to_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "alice")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.get(1).await.unwrap().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "alice");
    }

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(repo.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_wraps_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let err = repo.get(1).await.unwrap_err();
        assert!(err.to_string().starts_with("failed get user: "));
    }

    #[tokio::test]
    async fn test_find_returns_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(1, "a"),
                row(2, "b"),
                row(3, "c"),
                row(4, "d"),
                row(5, "e"),
                row(6, "f"),
            ]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let users = repo.find().await.unwrap();
        assert_eq!(users.len(), 6);
    }

    #[tokio::test]
    async fn test_find_wraps_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let err = repo.find().await.unwrap_err();
        assert!(err.to_string().starts_with("failed find users: "));
    }

    #[tokio::test]
    async fn test_create_returns_populated_entity() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(42, "alice")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo
            .create(CreateUser {
                name: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.name, "alice");
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        repo.update(
            99,
            UpdateUser {
                name: "ghost".to_string(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        repo.delete(99).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_wraps_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let err = repo.delete(1).await.unwrap_err();
        assert!(err.to_string().starts_with("failed delete user: "));
    }
}
