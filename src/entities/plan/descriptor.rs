//! Entity descriptor for Maintenance Plan

use super::handlers::PlanResource;
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;

pub struct PlanDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl PlanDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for PlanDescriptor {
    fn entity_type(&self) -> &str {
        "maintenance_plan"
    }

    fn plural(&self) -> &str {
        "planes"
    }

    fn build_routes(&self) -> Router {
        let guard = AccessGuard::new(self.auth.clone(), AccessPolicy::OPEN_READ);

        crud::crud_routes::<PlanResource>()
            .route_layer(middleware::from_fn_with_state(guard, enforce_access))
            .with_state(self.state.clone())
    }
}
