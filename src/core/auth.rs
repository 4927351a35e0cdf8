//! Authentication for the maintenance API
//!
//! Callers are identified by an opaque bearer token that maps to one of the
//! configured user identities. No header means an anonymous caller; a header
//! that does not resolve is rejected outright.

use crate::core::error::{ApiResult, RequestError};
use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use std::collections::HashMap;
use uuid::Uuid;

/// Authorization context extracted from a request
#[derive(Debug, Clone, PartialEq)]
pub enum AuthContext {
    /// Authenticated user
    User { user_id: Uuid, username: String },

    /// No authentication (public access)
    Anonymous,
}

impl AuthContext {
    /// Get user_id if available
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            AuthContext::User { user_id, .. } => Some(*user_id),
            AuthContext::Anonymous => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            AuthContext::User { username, .. } => Some(username),
            AuthContext::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, AuthContext::Anonymous)
    }
}

/// Authorization policy for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Public access (no auth required)
    Public,

    /// Any authenticated user
    Authenticated,
}

impl AuthPolicy {
    /// Check if auth context satisfies this policy
    pub fn check(&self, context: &AuthContext) -> bool {
        match self {
            AuthPolicy::Public => true,
            AuthPolicy::Authenticated => context.is_authenticated(),
        }
    }

    /// Parse policy from string (for YAML config)
    pub fn parse_policy(s: &str) -> Self {
        match s {
            "public" => AuthPolicy::Public,
            _ => AuthPolicy::Authenticated, // Default
        }
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Extract auth context from the request headers
    async fn extract_context(&self, headers: &HeaderMap) -> ApiResult<AuthContext>;
}

/// Default no-auth provider (for development)
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn extract_context(&self, _headers: &HeaderMap) -> ApiResult<AuthContext> {
        Ok(AuthContext::Anonymous)
    }
}

/// Static token table built from configured users
///
/// Accepts `Authorization: Bearer <token>` and `Authorization: Token <token>`.
#[derive(Debug, Clone, Default)]
pub struct TokenAuthProvider {
    tokens: HashMap<String, AuthContext>,
}

impl TokenAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user identity
    pub fn with_token(mut self, token: impl Into<String>, user_id: Uuid, username: &str) -> Self {
        self.tokens.insert(
            token.into(),
            AuthContext::User {
                user_id,
                username: username.to_string(),
            },
        );
        self
    }

    /// Resolve a raw `Authorization` header value
    pub fn resolve(&self, header: &str) -> ApiResult<AuthContext> {
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("Token "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RequestError::Unauthorized {
                message: "Invalid token header.".to_string(),
            })?;

        self.tokens.get(token).cloned().ok_or_else(|| {
            RequestError::Unauthorized {
                message: "Invalid token.".to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl AuthProvider for TokenAuthProvider {
    async fn extract_context(&self, headers: &HeaderMap) -> ApiResult<AuthContext> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Ok(AuthContext::Anonymous);
        };
        let header = value.to_str().map_err(|_| RequestError::Unauthorized {
            message: "Invalid token header.".to_string(),
        })?;
        self.resolve(header)
    }
}
