//! Technician resource wiring

use super::{
    model::{Technician, TechnicianView},
    wire::TechnicianPayload,
};
use crate::core::{ApiResult, DataService, ListSpec};
use crate::entities::user::User;
use crate::server::crud::{ReadResource, Resource};
use crate::server::state::AppState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// `/tecnicos`
pub struct TechnicianResource;

fn view(technician: Technician, user: Option<&User>) -> TechnicianView {
    match user {
        Some(user) => TechnicianView {
            usuario_nombre: user.full_name(),
            usuario_email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            technician,
        },
        None => TechnicianView {
            usuario_nombre: String::new(),
            usuario_email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            technician,
        },
    }
}

#[async_trait]
impl ReadResource for TechnicianResource {
    type Record = Technician;
    type View = TechnicianView;

    const PATH: &'static str = "/tecnicos";

    const LIST: ListSpec = ListSpec {
        filters: &["especialidad", "activo"],
        search: &["usuario__last_name", "usuario__first_name", "rut"],
        ordering: &["usuario__last_name", "fecha_contratacion"],
        default_ordering: &["usuario__last_name"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<Technician>> {
        state.technicians.clone()
    }

    async fn present(
        state: &AppState,
        records: Vec<Technician>,
    ) -> ApiResult<Vec<TechnicianView>> {
        let users: HashMap<_, _> = state
            .users
            .list()
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(records
            .into_iter()
            .map(|t| {
                let user = users.get(&t.user_id);
                view(t, user)
            })
            .collect())
    }

    async fn present_one(state: &AppState, technician: Technician) -> ApiResult<TechnicianView> {
        let user = state.users.get(&technician.user_id).await?;
        Ok(view(technician, user.as_ref()))
    }
}

impl Resource for TechnicianResource {
    type Payload = TechnicianPayload;
}
