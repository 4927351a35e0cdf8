//! In-memory relational store for testing and development
//!
//! All six tables live behind one `RwLock`, so a write and the constraint
//! checks and delete fan-out it triggers happen atomically.

use crate::core::error::{ConstraintViolation, FieldValidationError};
use crate::core::{DataService, Record, StoreError};
use crate::entities::{Client, Equipment, MaintenancePlan, Technician, User, WorkOrder};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const BACKEND: &str = "memory";

/// Every table of the store, keyed by id in insertion order
#[derive(Debug, Default)]
pub struct Tables {
    pub clients: IndexMap<Uuid, Client>,
    pub equipment: IndexMap<Uuid, Equipment>,
    pub technicians: IndexMap<Uuid, Technician>,
    pub plans: IndexMap<Uuid, MaintenancePlan>,
    pub work_orders: IndexMap<Uuid, WorkOrder>,
    pub users: IndexMap<Uuid, User>,
}

/// A record type the in-memory store knows how to keep
pub trait StoredRecord: Record {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self>;

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self>;

    /// Unique and foreign-key violations this record would cause.
    ///
    /// The record's own id is excluded from unique checks so updates pass.
    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError>;

    /// Apply dependents' on-delete rules; the record itself is already gone
    fn on_delete(_id: Uuid, _tables: &mut Tables) {}
}

fn already_exists(entity: &str, field: &str) -> FieldValidationError {
    FieldValidationError::new(field, format!("{} with this {} already exists.", entity, field))
}

fn missing_reference(field: &str, id: Uuid) -> FieldValidationError {
    FieldValidationError::new(field, format!("Invalid pk \"{}\" - object does not exist.", id))
}

/// Push an error when another row satisfies `clashes`
fn unique<T: Record>(
    errors: &mut Vec<FieldValidationError>,
    table: &IndexMap<Uuid, T>,
    own_id: Uuid,
    entity: &str,
    field: &str,
    clashes: impl Fn(&T) -> bool,
) {
    if table.values().any(|other| other.id() != own_id && clashes(other)) {
        errors.push(already_exists(entity, field));
    }
}

/// Push an error when `id` is not a key of `table`
fn reference<T>(
    errors: &mut Vec<FieldValidationError>,
    table: &IndexMap<Uuid, T>,
    field: &str,
    id: Uuid,
) {
    if !table.contains_key(&id) {
        errors.push(missing_reference(field, id));
    }
}

impl StoredRecord for Client {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.clients
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.clients
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        unique(&mut errors, &tables.clients, self.id, "Client", "rut", |c| {
            c.tax_id == self.tax_id
        });
        errors
    }

    fn on_delete(id: Uuid, tables: &mut Tables) {
        let owned: Vec<Uuid> = tables
            .equipment
            .values()
            .filter(|e| e.client_id == id)
            .map(|e| e.id)
            .collect();
        for equipment_id in owned {
            tables.equipment.shift_remove(&equipment_id);
            Equipment::on_delete(equipment_id, tables);
        }
    }
}

impl StoredRecord for Equipment {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.equipment
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.equipment
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        reference(&mut errors, &tables.clients, "cliente", self.client_id);
        unique(&mut errors, &tables.equipment, self.id, "Equipment", "codigo", |e| {
            e.code == self.code
        });
        unique(
            &mut errors,
            &tables.equipment,
            self.id,
            "Equipment",
            "numero_serie",
            |e| e.serial_number == self.serial_number,
        );
        errors
    }

    fn on_delete(id: Uuid, tables: &mut Tables) {
        tables.work_orders.retain(|_, o| o.equipment_id != id);
        let plans: Vec<Uuid> = tables
            .plans
            .values()
            .filter(|p| p.equipment_id == id)
            .map(|p| p.id)
            .collect();
        for plan_id in plans {
            tables.plans.shift_remove(&plan_id);
            // Orders on other equipment may still point at this plan
            MaintenancePlan::on_delete(plan_id, tables);
        }
    }
}

impl StoredRecord for Technician {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.technicians
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.technicians
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        reference(&mut errors, &tables.users, "usuario", self.user_id);
        unique(&mut errors, &tables.technicians, self.id, "Technician", "usuario", |t| {
            t.user_id == self.user_id
        });
        unique(&mut errors, &tables.technicians, self.id, "Technician", "rut", |t| {
            t.tax_id == self.tax_id
        });
        errors
    }

    fn on_delete(id: Uuid, tables: &mut Tables) {
        for order in tables.work_orders.values_mut() {
            if order.technician_id == Some(id) {
                order.technician_id = None;
            }
        }
    }
}

impl StoredRecord for MaintenancePlan {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.plans
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.plans
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        reference(&mut errors, &tables.equipment, "equipo", self.equipment_id);
        let duplicate = tables.plans.values().any(|p| {
            p.id != self.id && p.equipment_id == self.equipment_id && p.name == self.name
        });
        if duplicate {
            errors.push(FieldValidationError::new(
                "non_field_errors",
                "The fields equipo, nombre must make a unique set.",
            ));
        }
        errors
    }

    fn on_delete(id: Uuid, tables: &mut Tables) {
        for order in tables.work_orders.values_mut() {
            if order.plan_id == Some(id) {
                order.plan_id = None;
            }
        }
    }
}

impl StoredRecord for WorkOrder {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.work_orders
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.work_orders
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        reference(&mut errors, &tables.equipment, "equipo", self.equipment_id);
        if let Some(technician_id) = self.technician_id {
            reference(&mut errors, &tables.technicians, "tecnico", technician_id);
        }
        if let Some(plan_id) = self.plan_id {
            reference(&mut errors, &tables.plans, "plan_mantencion", plan_id);
        }
        unique(&mut errors, &tables.work_orders, self.id, "Work order", "codigo", |o| {
            o.code == self.code
        });
        errors
    }
}

impl StoredRecord for User {
    fn table(tables: &Tables) -> &IndexMap<Uuid, Self> {
        &tables.users
    }

    fn table_mut(tables: &mut Tables) -> &mut IndexMap<Uuid, Self> {
        &mut tables.users
    }

    fn check_constraints(&self, tables: &Tables) -> Vec<FieldValidationError> {
        let mut errors = Vec::new();
        unique(&mut errors, &tables.users, self.id, "User", "username", |u| {
            u.username == self.username
        });
        errors
    }

    fn on_delete(id: Uuid, tables: &mut Tables) {
        let linked: Vec<Uuid> = tables
            .technicians
            .values()
            .filter(|t| t.user_id == id)
            .map(|t| t.id)
            .collect();
        for technician_id in linked {
            tables.technicians.shift_remove(&technician_id);
            Technician::on_delete(technician_id, tables);
        }
    }
}

/// In-memory store serving every record type
///
/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> Result<R, StoreError> {
        let tables = self.tables.read().map_err(|e| StoreError::Backend {
            backend: BACKEND,
            message: format!("Failed to acquire read lock: {}", e),
        })?;
        Ok(f(&tables))
    }

    fn write<R>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let mut tables = self.tables.write().map_err(|e| StoreError::Backend {
            backend: BACKEND,
            message: format!("Failed to acquire write lock: {}", e),
        })?;
        f(&mut tables)
    }
}

fn checked<T: StoredRecord>(record: &T, tables: &Tables) -> Result<(), StoreError> {
    let errors = record.check_constraints(tables);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConstraintViolation::new(errors).into())
    }
}

#[async_trait]
impl<T: StoredRecord> DataService<T> for InMemoryStore {
    async fn create(&self, record: T) -> Result<T, StoreError> {
        self.write(|tables| {
            checked(&record, tables)?;
            T::table_mut(tables).insert(record.id(), record.clone());
            Ok(record)
        })
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>, StoreError> {
        self.read(|tables| T::table(tables).get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.read(|tables| T::table(tables).values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, record: T) -> Result<T, StoreError> {
        self.write(|tables| {
            if !T::table(tables).contains_key(id) {
                return Err(StoreError::not_found::<T>(*id));
            }
            checked(&record, tables)?;
            // Position is kept, so list order stays stable across updates
            if let Some(slot) = T::table_mut(tables).get_mut(id) {
                *slot = record.clone();
            }
            Ok(record)
        })
    }

    async fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        self.write(|tables| {
            T::table_mut(tables)
                .shift_remove(id)
                .ok_or_else(|| StoreError::not_found::<T>(*id))?;
            T::on_delete(*id, tables);
            Ok(())
        })
    }
}
