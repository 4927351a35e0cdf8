//! Server module for building the HTTP service
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for every maintenance resource
//! - Custom actions (technical sheet, status change)
//! - Health and index routes

pub mod builder;
pub mod crud;
pub mod entity_registry;
pub mod exposure;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use state::AppState;
