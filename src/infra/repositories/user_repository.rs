//! User record repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::NullOrdering, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{normalize_email, NewUserRecord, UserRecord};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Record store contract consumed by the directory service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records, newest first; records without `created_at` come last
    async fn find_all(&self) -> AppResult<Vec<UserRecord>>;

    /// Find a record by email (normalized before lookup)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Insert a validated record, assigning its id and default `created_at`.
    ///
    /// A duplicate normalized email fails with `AppError::Conflict`.
    async fn insert(&self, candidate: NewUserRecord) -> AppResult<UserRecord>;
}

/// SeaORM implementation of [`UserRepository`]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        let models = UserEntity::find()
            .order_by_with_nulls(user::Column::CreatedAt, Order::Desc, NullOrdering::Last)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserRecord::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserRecord::from))
    }

    async fn insert(&self, candidate: NewUserRecord) -> AppResult<UserRecord> {
        let created_at = candidate.requested_created_at().unwrap_or_else(Utc::now);
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(candidate.name().to_string()),
            email: Set(candidate.email().to_string()),
            phone: Set(candidate.phone().to_string()),
            created_at: Set(Some(created_at)),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(id = %model.id, "User record inserted");
        Ok(UserRecord::from(model))
    }
}
