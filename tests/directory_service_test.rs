//! Directory service tests against an in-memory record store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use user_directory::config::DUPLICATE_EMAIL_MESSAGE;
use user_directory::domain::{normalize_email, CreateUser, NewUserRecord, UserRecord};
use user_directory::errors::{AppError, AppResult};
use user_directory::infra::UserRepository;
use user_directory::services::{export, DirectoryService, UserDirectory};

// =============================================================================
// In-memory Record Store
// =============================================================================

/// Record store that enforces the unique email index in memory.
///
/// With `stale_lookups` set, `find_by_email` never sees existing rows, which
/// reproduces two concurrent creates that both pass the pre-check.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<UserRecord>>,
    stale_lookups: bool,
}

impl MemoryStore {
    fn with_stale_lookups() -> Self {
        Self {
            stale_lookups: true,
            ..Self::default()
        }
    }

    fn seed(&self, record: UserRecord) {
        self.rows.lock().unwrap().push(record);
    }

    fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        let mut rows = self.rows.lock().unwrap().clone();
        // Newest first, missing timestamps last
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        if self.stale_lookups {
            return Ok(None);
        }
        let email = normalize_email(email);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn insert(&self, candidate: NewUserRecord) -> AppResult<UserRecord> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.email == candidate.email()) {
            return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: candidate.name().to_string(),
            email: candidate.email().to_string(),
            phone: candidate.phone().to_string(),
            created_at: Some(candidate.requested_created_at().unwrap_or_else(Utc::now)),
        };
        rows.push(record.clone());
        Ok(record)
    }
}

fn directory(store: Arc<MemoryStore>) -> UserDirectory {
    UserDirectory::new(store)
}

// =============================================================================
// Create / List
// =============================================================================

#[tokio::test]
async fn test_create_then_list_contains_one_normalized_record() {
    let store = Arc::new(MemoryStore::default());
    let service = directory(store.clone());

    for (name, email, phone) in [
        ("Ada", "Ada@Example.com", "123"),
        (" Grace ", " GRACE@navy.mil ", " 555 "),
        ("Linus", "linus@kernel.org", "0"),
    ] {
        let created = assert_ok!(service.create_user(CreateUser::new(name, email, phone)).await);

        let listed = assert_ok!(service.list_users().await);
        let matching: Vec<_> = listed
            .iter()
            .filter(|r| r.email == email.trim().to_lowercase())
            .collect();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0], &created);
        assert_eq!(matching[0].name, name.trim());
        assert_eq!(matching[0].phone, phone.trim());
    }

    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_concurrent_duplicate_is_caught_by_store_constraint() {
    let store = Arc::new(MemoryStore::with_stale_lookups());
    let service = directory(store.clone());

    assert_ok!(
        service
            .create_user(CreateUser::new("Ada", "ada@example.com", "123"))
            .await
    );

    let err = assert_err!(
        service
            .create_user(CreateUser::new("Ada2", " ADA@example.com", "999"))
            .await
    );

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.user_message(), DUPLICATE_EMAIL_MESSAGE);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_rejected_create_persists_nothing() {
    let store = Arc::new(MemoryStore::default());
    let service = directory(store.clone());

    let missing_name = CreateUser {
        name: None,
        ..CreateUser::new("", "ada@example.com", "123")
    };
    assert_err!(service.create_user(missing_name).await);
    assert_err!(
        service
            .create_user(CreateUser::new("Ada", "ada-at-example", "123"))
            .await
    );

    assert_eq!(store.len(), 0);
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn test_export_rows_match_list() {
    let store = Arc::new(MemoryStore::default());
    let older = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();

    store.seed(UserRecord {
        id: Uuid::new_v4(),
        name: "Legacy".to_string(),
        email: "legacy@example.com".to_string(),
        phone: "000".to_string(),
        created_at: None,
    });
    let service = directory(store.clone());
    assert_ok!(
        service
            .create_user(CreateUser::new("Old", "old@example.com", "1"))
            .await
    );
    store.seed(UserRecord {
        id: Uuid::new_v4(),
        name: "Dated".to_string(),
        email: "dated@example.com".to_string(),
        phone: "2".to_string(),
        created_at: Some(older - Duration::days(1)),
    });

    let listed = assert_ok!(service.list_users().await);
    let rows: Vec<[String; 4]> = listed.iter().map(export::export_row).collect();

    assert_eq!(rows.len(), listed.len());
    assert_eq!(export::header_row(), ["Name", "Email", "Phone", "Date Added"]);
    assert_eq!(rows[0][0], "Old");
    assert_eq!(rows[1][3], "1/1/2024, 9:30:00 AM");
    assert_eq!(rows[2], ["Legacy", "legacy@example.com", "000", "N/A"].map(String::from));

    let workbook = assert_ok!(service.export_users().await);
    assert!(workbook.starts_with(b"PK"));
}
