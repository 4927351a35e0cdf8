//! Maintenance plan entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod wire;

pub use descriptor::PlanDescriptor;
pub use handlers::PlanResource;
pub use model::{Frequency, MaintenancePlan, PlanView};
pub use wire::PlanPayload;
