//! CRUD operations for the `user` table

use serde::Serialize;

use crate::database::SurrealClient;
use crate::models::UserRecord;

use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult};

/// Table holding user records
const USER_TABLE: &str = "user";

/// Write shape shared by create and update: everything except the id,
/// which only the store assigns.
#[derive(Debug, Serialize)]
struct UserContent {
    name: String,
}

/// Repository for user records
///
/// Holds a handle to the shared SurrealDB client; the client is
/// reference-counted internally, so constructing a repository per request
/// is cheap.
#[derive(Clone)]
pub struct UserRepository {
    db: SurrealClient,
}

impl UserRepository {
    /// Create a repository over the given client
    pub fn new(db: SurrealClient) -> Self {
        Self { db }
    }

    /// Fetch all user records in store-native order
    pub async fn find_all(&self) -> RepositoryResult<Vec<UserRecord>> {
        self.db
            .select(USER_TABLE)
            .await
            .map_err(|e| RepositoryError::from_surreal(RepositoryOperation::FindAll, e))
    }

    /// Fetch one user record by id
    ///
    /// Returns `Ok(None)` if no record exists under the given key.
    pub async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<UserRecord>> {
        self.db
            .select((USER_TABLE, id))
            .await
            .map_err(|e| RepositoryError::from_surreal(RepositoryOperation::FindById, e))
    }

    /// Insert a new user record; the store assigns the id
    pub async fn create(&self, name: String) -> RepositoryResult<UserRecord> {
        let created: Option<UserRecord> = self
            .db
            .create(USER_TABLE)
            .content(UserContent { name })
            .await
            .map_err(|e| RepositoryError::from_surreal(RepositoryOperation::Create, e))?;

        created.ok_or_else(|| {
            RepositoryError::new(
                RepositoryOperation::Create,
                RepositoryErrorKind::Other,
                "create returned no record",
            )
        })
    }

    /// Overwrite the name of an existing record
    ///
    /// A single atomic merge: the existence check and the write are one
    /// store call, so there is no window for a concurrent delete to slip
    /// between them. Returns `Ok(None)` if the record does not exist.
    pub async fn update_name(&self, id: &str, name: String) -> RepositoryResult<Option<UserRecord>> {
        self.db
            .update((USER_TABLE, id))
            .merge(UserContent { name })
            .await
            .map_err(|e| RepositoryError::from_surreal(RepositoryOperation::Update, e))
    }

    /// Remove a record by id
    ///
    /// Atomic find-and-delete: returns the deleted record, or `Ok(None)`
    /// if nothing existed under the key.
    pub async fn delete(&self, id: &str) -> RepositoryResult<Option<UserRecord>> {
        self.db
            .delete((USER_TABLE, id))
            .await
            .map_err(|e| RepositoryError::from_surreal(RepositoryOperation::Delete, e))
    }
}
