//! Directory service - list, create and export user records.
//!
//! Stateless: every call goes straight to the record store.

use async_trait::async_trait;
use std::sync::Arc;

use super::export;
use crate::config::DUPLICATE_EMAIL_MESSAGE;
use crate::domain::{CreateUser, NewUserRecord, UserRecord};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// All records, newest first
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Validate, normalize and persist a new record.
    ///
    /// Fails with `Validation` for missing/malformed fields and `Conflict`
    /// when the normalized email is already taken.
    async fn create_user(&self, input: CreateUser) -> AppResult<UserRecord>;

    /// All records rendered as an `.xlsx` workbook
    async fn export_users(&self) -> AppResult<Vec<u8>>;
}

/// Concrete implementation of DirectoryService using a repository.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new directory service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DirectoryService for UserDirectory {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        self.repo.find_all().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<UserRecord> {
        let candidate = NewUserRecord::try_from(input)?;

        // Fast path only; the unique index still rejects a concurrent duplicate
        if self.repo.find_by_email(candidate.email()).await?.is_some() {
            return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let record = self.repo.insert(candidate).await?;
        tracing::info!(id = %record.id, "User record created");
        Ok(record)
    }

    async fn export_users(&self) -> AppResult<Vec<u8>> {
        let records = self.repo.find_all().await?;
        export::build_workbook(&records)
    }
}
