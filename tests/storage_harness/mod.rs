//! Shared test harness for storage backend testing
//!
//! Provides record fixtures for every resource and generic helpers that
//! pin the record type when a store serves several of them.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_contract_tests;


use chrono::{NaiveDate, SubsecRound, Utc};
use maintenance::core::{DataService, Record, StoreError};
use maintenance::entities::{
    Client, Equipment, EquipmentType, Frequency, MaintenancePlan, Priority, Specialty, Status,
    Technician, User, WorkOrder,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A backend serving every record type, the way `AppState::new` wants it
pub trait TestStore:
    DataService<Client>
    + DataService<Equipment>
    + DataService<Technician>
    + DataService<MaintenancePlan>
    + DataService<WorkOrder>
    + DataService<User>
    + Clone
    + 'static
{
}

impl<S> TestStore for S where
    S: DataService<Client>
        + DataService<Equipment>
        + DataService<Technician>
        + DataService<MaintenancePlan>
        + DataService<WorkOrder>
        + DataService<User>
        + Clone
        + 'static
{
}

// ---------------------------------------------------------------------------
// Record fixtures
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Whole seconds, so timestamps survive any backend's precision
pub fn now() -> chrono::DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

pub fn user(username: &str) -> User {
    let mut user = User::new(username, &format!("{}@example.com", username), "Ana", "Rojas");
    user.date_joined = now();
    user
}

pub fn client(rut: &str) -> Client {
    Client {
        id: Uuid::new_v4(),
        tax_id: rut.to_string(),
        legal_name: format!("Cliente {}", rut),
        business_line: "Industria".to_string(),
        address: "Av. Providencia 1234".to_string(),
        phone: "+56 2 2345 6789".to_string(),
        email: "contacto@example.com".to_string(),
        registered_at: now(),
        active: true,
    }
}

pub fn equipment(client_id: Uuid, code: &str) -> Equipment {
    Equipment {
        id: Uuid::new_v4(),
        client_id,
        code: code.to_string(),
        name: format!("Compresor {}", code),
        kind: EquipmentType::Machine,
        brand: "Atlas".to_string(),
        model: "GA-30".to_string(),
        serial_number: format!("SN-{}", code),
        installed_on: date(2023, 3, 15),
        location: "Planta norte".to_string(),
        technical_sheet: String::new(),
        active: true,
    }
}

pub fn technician(user_id: Uuid, rut: &str) -> Technician {
    Technician {
        id: Uuid::new_v4(),
        user_id,
        tax_id: rut.to_string(),
        specialty: Specialty::Mechanical,
        phone: "+56 9 8765 4321".to_string(),
        hired_on: date(2021, 6, 1),
        active: true,
    }
}

pub fn plan(equipment_id: Uuid, name: &str) -> MaintenancePlan {
    MaintenancePlan {
        id: Uuid::new_v4(),
        equipment_id,
        name: name.to_string(),
        description: "Revisión general".to_string(),
        frequency: Frequency::Monthly,
        estimated_hours: 4,
        procedure: "1. Detener equipo\n2. Inspeccionar".to_string(),
        active: true,
    }
}

pub fn work_order(equipment_id: Uuid, code: &str) -> WorkOrder {
    WorkOrder {
        id: Uuid::new_v4(),
        equipment_id,
        technician_id: None,
        plan_id: None,
        code: code.to_string(),
        description: "Cambio de filtros".to_string(),
        requested_at: now(),
        scheduled_on: date(2024, 5, 10),
        started_at: None,
        finished_at: None,
        status: Status::Pending,
        priority: Priority::Medium,
        notes: String::new(),
        estimated_cost: Decimal::new(15000, 2),
        actual_cost: None,
    }
}

// ---------------------------------------------------------------------------
// Typed helpers
// ---------------------------------------------------------------------------

pub async fn fetch<T: Record, S: DataService<T>>(store: &S, id: Uuid) -> Option<T> {
    store.get(&id).await.unwrap()
}

pub async fn all<T: Record, S: DataService<T>>(store: &S) -> Vec<T> {
    store.list().await.unwrap()
}

pub async fn remove<T: Record, S: DataService<T>>(store: &S, id: Uuid) -> Result<(), StoreError> {
    store.delete(&id).await
}

/// Unwrap a constraint violation and return its `(field, message)` pairs
pub fn violations<T: std::fmt::Debug>(result: Result<T, StoreError>) -> Vec<(String, String)> {
    match result {
        Err(StoreError::Constraint(violation)) => violation
            .errors
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect(),
        other => panic!("expected a constraint violation, got {:?}", other),
    }
}
