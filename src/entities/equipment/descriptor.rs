//! Entity descriptor for Equipment

use super::handlers::{EquipmentResource, technical_sheet};
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Descriptor for the Equipment entity
pub struct EquipmentDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl EquipmentDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for EquipmentDescriptor {
    fn entity_type(&self) -> &str {
        "equipment"
    }

    fn plural(&self) -> &str {
        "equipos"
    }

    fn build_routes(&self) -> Router {
        let guard = AccessGuard::new(self.auth.clone(), AccessPolicy::OPEN_READ);

        crud::crud_routes::<EquipmentResource>()
            .route("/equipos/{id}/ficha_tecnica", get(technical_sheet))
            .route_layer(middleware::from_fn_with_state(guard, enforce_access))
            .with_state(self.state.clone())
    }
}
