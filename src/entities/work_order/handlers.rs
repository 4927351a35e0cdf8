//! Work order resource wiring and the status-change action

use super::{
    model::{Status, WorkOrder, WorkOrderView},
    rules::{self, Candidate},
    wire::WorkOrderPayload,
};
use crate::core::{
    ApiError, ApiResult, Choice, DataService, ListSpec, error::ValidationError,
};
use crate::server::crud::{self, ReadResource, Resource};
use crate::server::state::AppState;
use async_trait::async_trait;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// `/ordenes`
pub struct WorkOrderResource;

/// Display values pulled from related records
struct Related {
    equipment_codes: HashMap<Uuid, String>,
    technician_names: HashMap<Uuid, String>,
    plan_names: HashMap<Uuid, String>,
}

impl Related {
    async fn load(state: &AppState) -> ApiResult<Self> {
        let users: HashMap<_, _> = state
            .users
            .list()
            .await?
            .into_iter()
            .map(|u| (u.id, u.full_name()))
            .collect();

        let technician_names = state
            .technicians
            .list()
            .await?
            .into_iter()
            .map(|t| (t.id, users.get(&t.user_id).cloned().unwrap_or_default()))
            .collect();

        let equipment_codes = state
            .equipment
            .list()
            .await?
            .into_iter()
            .map(|e| (e.id, e.code))
            .collect();

        let plan_names = state
            .plans
            .list()
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        Ok(Self {
            equipment_codes,
            technician_names,
            plan_names,
        })
    }

    fn view(&self, order: WorkOrder) -> WorkOrderView {
        WorkOrderView {
            equipo_codigo: self
                .equipment_codes
                .get(&order.equipment_id)
                .cloned()
                .unwrap_or_default(),
            tecnico_nombre: order
                .technician_id
                .and_then(|id| self.technician_names.get(&id).cloned()),
            plan_nombre: order
                .plan_id
                .and_then(|id| self.plan_names.get(&id).cloned()),
            order,
        }
    }
}

#[async_trait]
impl ReadResource for WorkOrderResource {
    type Record = WorkOrder;
    type View = WorkOrderView;

    const PATH: &'static str = "/ordenes";

    const LIST: ListSpec = ListSpec {
        filters: &["equipo", "tecnico", "estado", "prioridad"],
        search: &["codigo", "descripcion", "equipo__codigo"],
        ordering: &["fecha_solicitud", "fecha_programada", "prioridad"],
        default_ordering: &["-fecha_solicitud"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<WorkOrder>> {
        state.work_orders.clone()
    }

    async fn present(state: &AppState, records: Vec<WorkOrder>) -> ApiResult<Vec<WorkOrderView>> {
        let related = Related::load(state).await?;
        Ok(records.into_iter().map(|o| related.view(o)).collect())
    }

    async fn present_one(state: &AppState, order: WorkOrder) -> ApiResult<WorkOrderView> {
        let equipo_codigo = state
            .equipment
            .get(&order.equipment_id)
            .await?
            .map(|e| e.code)
            .unwrap_or_default();

        let tecnico_nombre = match order.technician_id {
            Some(id) => match state.technicians.get(&id).await? {
                Some(technician) => Some(
                    state
                        .users
                        .get(&technician.user_id)
                        .await?
                        .map(|u| u.full_name())
                        .unwrap_or_default(),
                ),
                None => None,
            },
            None => None,
        };

        let plan_nombre = match order.plan_id {
            Some(id) => state.plans.get(&id).await?.map(|p| p.name),
            None => None,
        };

        Ok(WorkOrderView {
            order,
            equipo_codigo,
            tecnico_nombre,
            plan_nombre,
        })
    }
}

impl Resource for WorkOrderResource {
    type Payload = WorkOrderPayload;
}

/// Read the requested status from a `{"estado": "<code>"}` body
fn requested_status(body: &[u8]) -> ApiResult<Status> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ValidationError::InvalidJson {
        message: e.to_string(),
    })?;

    let code = value.get("estado").and_then(Value::as_str).unwrap_or_default();
    Status::from_code(code).ok_or_else(|| {
        ValidationError::InvalidChoice {
            field: "estado".to_string(),
            value: code.to_string(),
            allowed: Status::CODES.to_vec(),
        }
        .into()
    })
}

/// POST /ordenes/{id}/cambiar_estado
///
/// Only `estado` changes. Moving to `FIN` still requires a stored `fecha_fin`.
pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<WorkOrderView>> {
    let id = crud::parse_id(&id)?;
    let mut order = crud::fetch(&state.work_orders, id).await?;
    let status = requested_status(&body)?;

    let errors = rules::check(&Candidate {
        status: Some(status),
        finished_at: order.finished_at,
        ..Default::default()
    });
    if !errors.is_empty() {
        return Err(ApiError::from(errors));
    }

    let previous = order.status;
    order.status = status;
    let order = state.work_orders.update(&id, order).await?;
    tracing::info!(%id, from = %previous, to = %status, "work order status changed");

    Ok(Json(WorkOrderResource::present_one(&state, order).await?))
}
