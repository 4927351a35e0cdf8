//! Equipment entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod wire;

pub use descriptor::EquipmentDescriptor;
pub use handlers::EquipmentResource;
pub use model::{Equipment, EquipmentType, EquipmentView, TechnicalSheet};
pub use wire::EquipmentPayload;
