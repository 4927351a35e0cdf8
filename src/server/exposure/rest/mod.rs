//! REST API exposure
//!
//! Mounts every registered resource under `/api`, adds health checks and an
//! index of resource paths, and wraps the result in request tracing and CORS.

use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Map, Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Prefix every resource is mounted under
pub const API_PREFIX: &str = "/api";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from the entity registry
    ///
    /// # Returns
    ///
    /// A router with:
    /// - Health check routes (`/health`, `/healthz`)
    /// - `GET /api` listing every resource path
    /// - Entity routes under `/api`
    /// - Custom routes, also under `/api`
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
        let index = Self::index(registry);

        let mut api = registry
            .build_routes()
            .route("/", get(move || async move { Json(index) }));

        for custom_router in custom_routes {
            api = api.merge(custom_router);
        }

        Self::health_routes().nest(API_PREFIX, api).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    /// `{"clientes": "/api/clientes", ...}`
    fn index(registry: &EntityRegistry) -> Value {
        let entries: Map<String, Value> = registry
            .plurals()
            .into_iter()
            .map(|plural| {
                (
                    plural.to_string(),
                    Value::String(format!("{}/{}", API_PREFIX, plural)),
                )
            })
            .collect();
        Value::Object(entries)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME")
        }))
    }
}
