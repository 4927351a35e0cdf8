//! Service trait for record persistence

use crate::core::Record;
use crate::core::error::{ApiError, ConstraintViolation, StorageError};
use async_trait::async_trait;
use uuid::Uuid;

/// Failures reported by a [`DataService`]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with that id
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    /// Unique or foreign-key rule refused the write
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// The backend itself failed
    #[error("{backend} error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn not_found<T: Record>(id: Uuid) -> Self {
        StoreError::NotFound {
            entity_type: T::entity_type(),
            id,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity_type, id } => ApiError::not_found(entity_type, id),
            StoreError::Constraint(violation) => ApiError::Constraint(violation),
            StoreError::Backend { backend, message } => ApiError::Storage(StorageError::QueryError {
                backend: backend.to_string(),
                message,
            }),
        }
    }
}

/// Service trait for managing records of one type
///
/// Implementations own constraint enforcement: unique fields, foreign-key
/// existence and the cascade/nullify fan-out on delete. Every call is
/// all-or-nothing.
#[async_trait]
pub trait DataService<T: Record>: Send + Sync {
    /// Insert a new record
    async fn create(&self, record: T) -> Result<T, StoreError>;

    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>, StoreError>;

    /// List all records, in insertion order
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Replace an existing record
    async fn update(&self, id: &Uuid, record: T) -> Result<T, StoreError>;

    /// Delete a record and apply its dependents' on-delete rules
    async fn delete(&self, id: &Uuid) -> Result<(), StoreError>;
}
