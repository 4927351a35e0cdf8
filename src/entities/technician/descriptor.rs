//! Entity descriptor for Technician

use super::handlers::TechnicianResource;
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;

pub struct TechnicianDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl TechnicianDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for TechnicianDescriptor {
    fn entity_type(&self) -> &str {
        "technician"
    }

    fn plural(&self) -> &str {
        "tecnicos"
    }

    fn build_routes(&self) -> Router {
        let guard = AccessGuard::new(self.auth.clone(), AccessPolicy::OPEN_READ);

        crud::crud_routes::<TechnicianResource>()
            .route_layer(middleware::from_fn_with_state(guard, enforce_access))
            .with_state(self.state.clone())
    }
}
