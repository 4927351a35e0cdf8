//! User identity resource (read-only)

use super::model::User;
use crate::core::{ApiResult, DataService, ListSpec};
use crate::server::crud::ReadResource;
use crate::server::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;

/// `/usuarios`
pub struct UserResource;

#[async_trait]
impl ReadResource for UserResource {
    type Record = User;
    type View = User;

    const PATH: &'static str = "/usuarios";

    const LIST: ListSpec = ListSpec {
        filters: &[],
        search: &["username", "email", "first_name", "last_name"],
        ordering: &["username", "date_joined"],
        default_ordering: &["username"],
    };

    fn service(state: &AppState) -> Arc<dyn DataService<User>> {
        state.users.clone()
    }

    async fn present(_state: &AppState, records: Vec<User>) -> ApiResult<Vec<User>> {
        Ok(records)
    }
}
