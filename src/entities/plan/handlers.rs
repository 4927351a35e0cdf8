//! Maintenance plan resource wiring

use super::{
    model::{MaintenancePlan, PlanView},
    wire::PlanPayload,
};
use crate::core::{ApiResult, DataService, ListSpec};
use crate::server::crud::{ReadResource, Resource};
use crate::server::state::AppState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// `/planes`
pub struct PlanResource;

#[async_trait]
impl ReadResource for PlanResource {
    type Record = MaintenancePlan;
    type View = PlanView;

    const PATH: &'static str = "/planes";

    const LIST: ListSpec = ListSpec {
        filters: &["equipo", "frecuencia", "activo"],
        search: &["nombre", "equipo__codigo"],
        ordering: &["nombre", "frecuencia"],
        default_ordering: &["nombre"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<MaintenancePlan>> {
        state.plans.clone()
    }

    async fn present(state: &AppState, records: Vec<MaintenancePlan>) -> ApiResult<Vec<PlanView>> {
        let codes: HashMap<_, _> = state
            .equipment
            .list()
            .await?
            .into_iter()
            .map(|e| (e.id, e.code))
            .collect();

        Ok(records
            .into_iter()
            .map(|plan| PlanView {
                equipo_codigo: codes.get(&plan.equipment_id).cloned().unwrap_or_default(),
                plan,
            })
            .collect())
    }

    async fn present_one(state: &AppState, plan: MaintenancePlan) -> ApiResult<PlanView> {
        let equipment = state.equipment.get(&plan.equipment_id).await?;
        Ok(PlanView {
            equipo_codigo: equipment.map(|e| e.code).unwrap_or_default(),
            plan,
        })
    }
}

impl Resource for PlanResource {
    type Payload = PlanPayload;
}
