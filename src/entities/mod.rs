//! Maintenance domain entities
//!
//! Each entity module follows the same layout:
//! - `model`: the stored record and its read view
//! - `wire`: the write payload and its checks
//! - `handlers`: the REST resource definition and custom actions
//! - `descriptor`: route registration and access policy

#[macro_use]
pub mod macros;

pub mod client;
pub mod equipment;
pub mod plan;
pub mod technician;
pub mod user;
pub mod work_order;

pub use client::{Client, ClientDescriptor};
pub use equipment::{Equipment, EquipmentDescriptor, EquipmentType};
pub use plan::{Frequency, MaintenancePlan, PlanDescriptor};
pub use technician::{Specialty, Technician, TechnicianDescriptor};
pub use user::{User, UserDescriptor};
pub use work_order::{Priority, Status, WorkOrder, WorkOrderDescriptor};
