//! # Maintenance management service
//!
//! A REST service that keeps track of client companies, their equipment,
//! the technicians who service it, preventive maintenance plans and work
//! orders.
//!
//! ## Features
//!
//! - **Six resources** under `/api`: `clientes`, `equipos`, `tecnicos`,
//!   `planes`, `ordenes` and the read-only `usuarios`
//! - **Validation**: field constraints, work order cross-field rules and
//!   store-level unique/foreign-key checks, all reported per field
//! - **Derived fields**: related names and codes computed at read time
//! - **Listing**: exact-match filters, free-text search, ordering and pagination
//! - **Access control**: open reads with authenticated writes, token based
//! - **Storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use maintenance::prelude::*;
//!
//! let store = InMemoryStore::new();
//! let admin = seed_users(&store, vec![User::new("admin", "admin@example.com", "Ada", "Admin")])
//!     .await?
//!     .remove(0);
//!
//! let app = ServerBuilder::new()
//!     .with_state(AppState::new(store, 10))
//!     .with_auth(TokenAuthProvider::new().with_token("secret", admin.id, &admin.username))
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        AccessPolicy, ApiError, ApiResult, AuthContext, AuthPolicy, AuthProvider, Choice,
        DataService, FieldValue, Listable, NoAuthProvider, Record, StoreError,
        TokenAuthProvider, WriteMode, WritePayload,
    };

    // === Entities ===
    pub use crate::entities::{
        Client, Equipment, EquipmentType, Frequency, MaintenancePlan, Priority, Specialty,
        Status, Technician, User, WorkOrder,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, seed_users};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
