//! Entity descriptor for Work Order

use super::handlers::{WorkOrderResource, change_status};
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware, routing::post};
use std::sync::Arc;

/// Descriptor for the Work Order entity
///
/// CRUD routes are open for reading; the status-change action always
/// requires an authenticated caller.
pub struct WorkOrderDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl WorkOrderDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for WorkOrderDescriptor {
    fn entity_type(&self) -> &str {
        "work_order"
    }

    fn plural(&self) -> &str {
        "ordenes"
    }

    fn build_routes(&self) -> Router {
        let open_read = AccessGuard::new(self.auth.clone(), AccessPolicy::OPEN_READ);
        let authenticated = AccessGuard::new(self.auth.clone(), AccessPolicy::AUTHENTICATED);

        let actions = Router::new()
            .route("/ordenes/{id}/cambiar_estado", post(change_status))
            .route_layer(middleware::from_fn_with_state(authenticated, enforce_access));

        crud::crud_routes::<WorkOrderResource>()
            .route_layer(middleware::from_fn_with_state(open_read, enforce_access))
            .merge(actions)
            .with_state(self.state.clone())
    }
}
