//! Technician entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod wire;

pub use descriptor::TechnicianDescriptor;
pub use handlers::TechnicianResource;
pub use model::{Specialty, Technician, TechnicianView};
pub use wire::TechnicianPayload;
