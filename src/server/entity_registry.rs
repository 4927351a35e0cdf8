//! Registry of the resources mounted under `/api`

use axum::Router;
use std::collections::BTreeMap;

/// A resource's routes, already bound to state and access policy
pub trait EntityDescriptor: Send + Sync {
    /// Singular type name, e.g. `work_order`
    fn entity_type(&self) -> &str;

    /// Collection path segment, e.g. `ordenes`
    fn plural(&self) -> &str;

    /// Collection and item routes for this resource
    fn build_routes(&self) -> Router;
}

/// Resources keyed by collection path, so the `/api` index lists them in order
#[derive(Default)]
pub struct EntityRegistry {
    by_path: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource; a later descriptor for the same path replaces the earlier one
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        tracing::debug!(
            entity_type = descriptor.entity_type(),
            path = descriptor.plural(),
            "resource registered"
        );
        self.by_path.insert(descriptor.plural().to_string(), descriptor);
    }

    /// Merge every resource's routes into one router
    pub fn build_routes(&self) -> Router {
        self.by_path
            .values()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    /// Collection path segments, sorted
    pub fn plurals(&self) -> Vec<&str> {
        self.by_path.keys().map(String::as_str).collect()
    }
}
