//! Entity descriptor for Client

use super::handlers::ClientResource;
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;

/// Descriptor for the Client entity
pub struct ClientDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl ClientDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for ClientDescriptor {
    fn entity_type(&self) -> &str {
        "client"
    }

    fn plural(&self) -> &str {
        "clientes"
    }

    fn build_routes(&self) -> Router {
        let guard = AccessGuard::new(self.auth.clone(), AccessPolicy::OPEN_READ);

        crud::crud_routes::<ClientResource>()
            .route_layer(middleware::from_fn_with_state(guard, enforce_access))
            .with_state(self.state.clone())
    }
}
