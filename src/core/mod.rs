//! Core module containing the shared traits and types of the service

pub mod access;
pub mod auth;
pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod service;
pub mod validation;

pub use access::{AccessGuard, AccessPolicy, enforce_access};
pub use auth::{AuthContext, AuthPolicy, AuthProvider, NoAuthProvider, TokenAuthProvider};
pub use entity::{Choice, Listable, Record};
pub use error::{ApiError, ApiResult, FieldValidationError};
pub use field::FieldValue;
pub use query::{ListParams, ListSpec, PaginatedResponse, PaginationMeta};
pub use service::{DataService, StoreError};
pub use validation::{FieldErrors, Payload, RawPayload, WriteMode, WritePayload};
