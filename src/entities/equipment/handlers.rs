//! Equipment resource wiring and the technical-sheet action

use super::{
    model::{Equipment, EquipmentView, TechnicalSheet},
    wire::EquipmentPayload,
};
use crate::core::{ApiResult, DataService, ListSpec};
use crate::server::crud::{self, ReadResource, Resource};
use crate::server::state::AppState;
use async_trait::async_trait;
use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::HashMap;
use std::sync::Arc;

/// `/equipos`
pub struct EquipmentResource;

#[async_trait]
impl ReadResource for EquipmentResource {
    type Record = Equipment;
    type View = EquipmentView;

    const PATH: &'static str = "/equipos";

    const LIST: ListSpec = ListSpec {
        filters: &["cliente", "tipo", "activo"],
        search: &["codigo", "nombre", "marca", "numero_serie"],
        ordering: &["codigo", "fecha_instalacion"],
        default_ordering: &["codigo"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<Equipment>> {
        state.equipment.clone()
    }

    async fn present(state: &AppState, records: Vec<Equipment>) -> ApiResult<Vec<EquipmentView>> {
        let client_names: HashMap<_, _> = state
            .clients
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.legal_name))
            .collect();

        Ok(records
            .into_iter()
            .map(|equipment| EquipmentView {
                cliente_nombre: client_names
                    .get(&equipment.client_id)
                    .cloned()
                    .unwrap_or_default(),
                equipment,
            })
            .collect())
    }

    async fn present_one(state: &AppState, equipment: Equipment) -> ApiResult<EquipmentView> {
        let client = state.clients.get(&equipment.client_id).await?;
        Ok(EquipmentView {
            cliente_nombre: client.map(|c| c.legal_name).unwrap_or_default(),
            equipment,
        })
    }
}

impl Resource for EquipmentResource {
    type Payload = EquipmentPayload;
}

/// GET /equipos/{id}/ficha_tecnica
pub async fn technical_sheet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TechnicalSheet>> {
    let id = crud::parse_id(&id)?;
    let equipment = crud::fetch(&state.equipment, id).await?;
    Ok(Json(equipment.into()))
}
