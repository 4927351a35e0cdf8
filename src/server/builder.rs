//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::state::AppState;
use crate::config::{AppConfig, StorageBackend};
use crate::core::{AuthProvider, DataService, NoAuthProvider, TokenAuthProvider};
use crate::entities::{
    Client, ClientDescriptor, Equipment, EquipmentDescriptor, MaintenancePlan, PlanDescriptor,
    Technician, TechnicianDescriptor, User, UserDescriptor, WorkOrder, WorkOrderDescriptor,
};
use crate::storage::{InMemoryStore, seed_users};
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the maintenance API server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_state(AppState::new(InMemoryStore::new(), 10))
///     .with_auth(TokenAuthProvider::new().with_token("secret", user.id, "admin"))
///     .build()?;
/// ```
pub struct ServerBuilder {
    state: Option<AppState>,
    auth: Arc<dyn AuthProvider>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder; every caller is anonymous until
    /// [`with_auth`](Self::with_auth) is called
    pub fn new() -> Self {
        Self {
            state: None,
            auth: Arc::new(NoAuthProvider),
            custom_routes: Vec::new(),
        }
    }

    /// Set the handler state (required)
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set how callers are identified
    pub fn with_auth(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth = Arc::new(provider);
        self
    }

    /// Add routes mounted under `/api` next to the resources
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Open the configured storage, seed the configured users and wire
    /// their tokens into a [`TokenAuthProvider`]
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => Self::prepare(InMemoryStore::new(), config).await,
            StorageBackend::Postgres => Self::from_postgres(config).await,
        }
    }

    #[cfg(feature = "postgres")]
    async fn from_postgres(config: &AppConfig) -> Result<Self> {
        let url = config
            .storage
            .database_url
            .as_deref()
            .ok_or_else(|| anyhow!("storage.database_url is required for the postgres backend"))?;
        let store = crate::storage::PostgresStore::connect(url).await?;
        Self::prepare(store, config).await
    }

    #[cfg(not(feature = "postgres"))]
    async fn from_postgres(_config: &AppConfig) -> Result<Self> {
        Err(anyhow!(
            "the postgres backend requires building with the `postgres` feature"
        ))
    }

    async fn prepare<S>(store: S, config: &AppConfig) -> Result<Self>
    where
        S: DataService<Client>
            + DataService<Equipment>
            + DataService<Technician>
            + DataService<MaintenancePlan>
            + DataService<WorkOrder>
            + DataService<User>
            + Clone
            + 'static,
    {
        let state = AppState::new(store, config.pagination.page_size);

        let users = config.auth.users.iter().map(|u| u.to_user()).collect();
        let seeded = seed_users(state.users.as_ref(), users).await?;

        let mut auth = TokenAuthProvider::new();
        for (user, entry) in seeded.iter().zip(&config.auth.users) {
            auth = auth.with_token(entry.token.clone(), user.id, &user.username);
        }
        tracing::info!(users = seeded.len(), "user identities seeded");

        Ok(Self::new().with_state(state).with_auth(auth))
    }

    /// Register a descriptor for every resource
    fn registry(state: &AppState, auth: &Arc<dyn AuthProvider>) -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(ClientDescriptor::new(state.clone(), auth.clone())));
        registry.register(Box::new(EquipmentDescriptor::new(state.clone(), auth.clone())));
        registry.register(Box::new(TechnicianDescriptor::new(state.clone(), auth.clone())));
        registry.register(Box::new(PlanDescriptor::new(state.clone(), auth.clone())));
        registry.register(Box::new(WorkOrderDescriptor::new(state.clone(), auth.clone())));
        registry.register(Box::new(UserDescriptor::new(state.clone(), auth.clone())));
        registry
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let state = self
            .state
            .ok_or_else(|| anyhow!("AppState is required. Call .with_state()"))?;
        let registry = Self::registry(&state, &self.auth);
        Ok(RestExposure::build_router(&registry, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
