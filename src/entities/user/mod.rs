//! User identity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::UserDescriptor;
pub use handlers::UserResource;
pub use model::User;
