//! Generic REST handlers shared by every resource
//!
//! ```text
//! GET    /{path}        → list
//! POST   /{path}        → create
//! GET    /{path}/{id}   → retrieve
//! PUT    /{path}/{id}   → update (full)
//! PATCH  /{path}/{id}   → update (partial)
//! DELETE /{path}/{id}   → destroy
//! ```

use super::state::AppState;
use crate::core::{
    ApiError, ApiResult, DataService, ListParams, ListSpec, Listable, PaginatedResponse, Payload,
    RawPayload, Record, WritePayload, error::RequestError,
};
use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{SubsecRound, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// A resource that can be listed and retrieved
#[async_trait]
pub trait ReadResource: Send + Sync + 'static {
    type Record: Record;

    /// Read representation, including derived fields
    type View: Serialize + Listable + Send + 'static;

    /// Collection path, e.g. `/clientes`
    const PATH: &'static str;

    const LIST: ListSpec;

    fn service(state: &AppState) -> Arc<dyn DataService<Self::Record>>;

    /// Map stored records to their read representation
    async fn present(state: &AppState, records: Vec<Self::Record>) -> ApiResult<Vec<Self::View>>;

    async fn present_one(state: &AppState, record: Self::Record) -> ApiResult<Self::View> {
        let id = record.id();
        Self::present(state, vec![record])
            .await?
            .pop()
            .ok_or_else(|| ApiError::Internal(format!("no representation for {}", id)))
    }
}

/// A resource that also accepts writes
pub trait Resource: ReadResource {
    type Payload: WritePayload<Record = Self::Record>;
}

/// Parse a path id, rejecting anything that is not a UUID
pub fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        RequestError::InvalidEntityId {
            id: raw.to_string(),
        }
        .into()
    })
}

/// Fetch a record or fail with 404
pub async fn fetch<T: Record>(service: &Arc<dyn DataService<T>>, id: Uuid) -> ApiResult<T> {
    service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(T::entity_type(), id))
}

pub async fn list<R: ReadResource>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<PaginatedResponse<R::View>>> {
    let records = R::service(&state).list().await?;
    let views = R::present(&state, records).await?;
    Ok(Json(R::LIST.apply(views, &params, state.page_size)?))
}

pub async fn retrieve<R: ReadResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<R::View>> {
    let id = parse_id(&id)?;
    let record = fetch(&R::service(&state), id).await?;
    Ok(Json(R::present_one(&state, record).await?))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Payload { payload, .. }: Payload<R::Payload>,
) -> ApiResult<(StatusCode, Json<R::View>)> {
    // Microseconds, the finest precision every backend keeps
    let record = payload.build(Uuid::new_v4(), Utc::now().trunc_subsecs(6));
    let record = R::service(&state).create(record).await?;
    tracing::info!(
        entity_type = R::Record::entity_type(),
        id = %record.id(),
        "record created"
    );
    let view = R::present_one(&state, record).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Serves both PUT and PATCH; the extractor picks the write mode
///
/// The record is resolved before the body is parsed, so an unknown id is a
/// 404 whatever the body holds.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    raw: RawPayload,
) -> ApiResult<Json<R::View>> {
    let id = parse_id(&id)?;
    let service = R::service(&state);
    let mut record = fetch(&service, id).await?;
    let payload: R::Payload = raw.parse()?;
    let mode = raw.mode;
    payload.apply(&mut record);
    let record = service.update(&id, record).await?;
    tracing::info!(
        entity_type = R::Record::entity_type(),
        %id,
        partial = mode.is_partial(),
        "record updated"
    );
    Ok(Json(R::present_one(&state, record).await?))
}

pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    R::service(&state).delete(&id).await?;
    tracing::info!(entity_type = R::Record::entity_type(), %id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Read-only routes: list and retrieve
pub fn read_routes<R: ReadResource>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(list::<R>))
        .route(&format!("{}/{{id}}", R::PATH), get(retrieve::<R>))
}

/// Full CRUD routes
pub fn crud_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(list::<R>).post(create::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(retrieve::<R>)
                .put(update::<R>)
                .patch(update::<R>)
                .delete(destroy::<R>),
        )
}
