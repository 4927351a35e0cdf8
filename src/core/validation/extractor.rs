//! Axum extractors for write payloads
//!
//! `Payload<T>` parses the JSON body into `T`, works out the write mode
//! from the HTTP method, and runs [`WritePayload::validate_for`] before the
//! handler sees anything. `RawPayload` carries the same body unparsed, for
//! handlers that must resolve the target record first.

use super::{WriteMode, WritePayload};
use crate::core::error::{ApiError, ValidationError};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::Method,
};
use serde_json::Value;

/// Axum extractor that deserializes and validates a write payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_client(
///     State(state): State<AppState>,
///     Payload { payload, .. }: Payload<ClientPayload>,
/// ) -> ApiResult<(StatusCode, Json<Client>)> {
///     // payload already passed field and cross-field checks
/// }
/// ```
pub struct Payload<T> {
    pub payload: T,
    pub mode: WriteMode,
}

/// A write body whose parsing is left to the handler
///
/// ```rust,ignore
/// let mut record = fetch(&service, id).await?;
/// let payload: ClientPayload = raw.parse()?;
/// ```
pub struct RawPayload {
    pub body: Bytes,
    pub mode: WriteMode,
}

impl RawPayload {
    /// Deserialize the body as a JSON object and run every check for `mode`
    pub fn parse<T: WritePayload>(&self) -> Result<T, ApiError> {
        let body: Value =
            serde_json::from_slice(&self.body).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })?;

        if !body.is_object() {
            return Err(ValidationError::InvalidJson {
                message: "Expected a JSON object".to_string(),
            }
            .into());
        }

        let payload: T =
            serde_json::from_value(body).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })?;

        payload.validate_for(self.mode)?;
        Ok(payload)
    }
}

impl<S> FromRequest<S> for RawPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mode = match *req.method() {
            Method::PUT => WriteMode::Replace,
            Method::PATCH => WriteMode::Partial,
            _ => WriteMode::Create,
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::InvalidJson {
                message: e.body_text(),
            })?;

        Ok(RawPayload { body, mode })
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: WritePayload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawPayload::from_request(req, state).await?;
        let payload = raw.parse()?;
        Ok(Payload {
            payload,
            mode: raw.mode,
        })
    }
}
