//! Per-resource access policy enforced as router middleware
//!
//! Runs before body extraction, so an unauthenticated write is refused
//! before any validation happens.

use crate::core::auth::{AuthContext, AuthPolicy, AuthProvider};
use crate::core::error::{ApiError, RequestError};
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Read and write postures for one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub read: AuthPolicy,
    pub write: AuthPolicy,
}

impl AccessPolicy {
    /// Anyone may read; writes need an authenticated caller
    pub const OPEN_READ: AccessPolicy = AccessPolicy {
        read: AuthPolicy::Public,
        write: AuthPolicy::Authenticated,
    };

    /// Every operation needs an authenticated caller
    pub const AUTHENTICATED: AccessPolicy = AccessPolicy {
        read: AuthPolicy::Authenticated,
        write: AuthPolicy::Authenticated,
    };

    /// Policy that applies to a given HTTP method
    pub fn for_method(&self, method: &Method) -> AuthPolicy {
        if method == Method::GET || method == Method::HEAD || method == Method::OPTIONS {
            self.read
        } else {
            self.write
        }
    }
}

/// State carried by the access middleware
#[derive(Clone)]
pub struct AccessGuard {
    pub provider: Arc<dyn AuthProvider>,
    pub policy: AccessPolicy,
}

impl AccessGuard {
    pub fn new(provider: Arc<dyn AuthProvider>, policy: AccessPolicy) -> Self {
        Self { provider, policy }
    }
}

/// Middleware: resolve the caller, check the policy, stash the context
///
/// Install with `axum::middleware::from_fn_with_state(guard, enforce_access)`.
/// Handlers can read the caller through `Extension<AuthContext>`.
pub async fn enforce_access(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    let context = match guard.provider.extract_context(req.headers()).await {
        Ok(context) => context,
        Err(err) => return err.into_response(),
    };

    let policy = guard.policy.for_method(req.method());
    if !policy.check(&context) {
        tracing::debug!(method = %req.method(), uri = %req.uri(), "access denied");
        return denied(&context).into_response();
    }

    req.extensions_mut().insert(context);
    next.run(req).await
}

fn denied(context: &AuthContext) -> ApiError {
    if context.is_authenticated() {
        RequestError::Forbidden {
            message: "You do not have permission to perform this action.".to_string(),
        }
        .into()
    } else {
        RequestError::Unauthorized {
            message: "Authentication credentials were not provided.".to_string(),
        }
        .into()
    }
}
