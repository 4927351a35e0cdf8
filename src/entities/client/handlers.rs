//! Client resource wiring

use super::{model::Client, wire::ClientPayload};
use crate::core::{ApiResult, DataService, ListSpec};
use crate::server::crud::{ReadResource, Resource};
use crate::server::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;

/// `/clientes`
pub struct ClientResource;

#[async_trait]
impl ReadResource for ClientResource {
    type Record = Client;
    type View = Client;

    const PATH: &'static str = "/clientes";

    const LIST: ListSpec = ListSpec {
        filters: &["activo"],
        search: &["razon_social", "rut", "email"],
        ordering: &["razon_social", "fecha_registro"],
        default_ordering: &["razon_social"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<Client>> {
        state.clients.clone()
    }

    async fn present(_state: &AppState, records: Vec<Client>) -> ApiResult<Vec<Client>> {
        Ok(records)
    }
}

impl Resource for ClientResource {
    type Payload = ClientPayload;
}
