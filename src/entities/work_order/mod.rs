//! Work order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod rules;
pub mod wire;

pub use descriptor::WorkOrderDescriptor;
pub use handlers::WorkOrderResource;
pub use model::{Priority, Status, WorkOrder, WorkOrderView};
pub use wire::WorkOrderPayload;
