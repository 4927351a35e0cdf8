//! Client entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod wire;

pub use descriptor::ClientDescriptor;
pub use handlers::ClientResource;
pub use model::Client;
pub use wire::ClientPayload;
