//! Entity descriptor for User identities

use super::handlers::UserResource;
use crate::core::{AccessGuard, AccessPolicy, AuthProvider, enforce_access};
use crate::server::crud;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;

/// Descriptor for the User entity; every route requires authentication
pub struct UserDescriptor {
    pub state: AppState,
    pub auth: Arc<dyn AuthProvider>,
}

impl UserDescriptor {
    pub fn new(state: AppState, auth: Arc<dyn AuthProvider>) -> Self {
        Self { state, auth }
    }
}

impl EntityDescriptor for UserDescriptor {
    fn entity_type(&self) -> &str {
        "user"
    }

    fn plural(&self) -> &str {
        "usuarios"
    }

    fn build_routes(&self) -> Router {
        let guard = AccessGuard::new(self.auth.clone(), AccessPolicy::AUTHENTICATED);

        crud::read_routes::<UserResource>()
            .route_layer(middleware::from_fn_with_state(guard, enforce_access))
            .with_state(self.state.clone())
    }
}
