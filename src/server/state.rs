//! Shared handler state

use crate::core::DataService;
use crate::entities::{Client, Equipment, MaintenancePlan, Technician, User, WorkOrder};
use std::sync::Arc;

/// One service handle per record type, plus list page size
///
/// Every handle usually points at the same backend, so relations and
/// cascades stay consistent across resources.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn DataService<Client>>,
    pub equipment: Arc<dyn DataService<Equipment>>,
    pub technicians: Arc<dyn DataService<Technician>>,
    pub plans: Arc<dyn DataService<MaintenancePlan>>,
    pub work_orders: Arc<dyn DataService<WorkOrder>>,
    pub users: Arc<dyn DataService<User>>,
    pub page_size: usize,
}

impl AppState {
    /// Build the state from a single backend serving every record type
    pub fn new<S>(store: S, page_size: usize) -> Self
    where
        S: DataService<Client>
            + DataService<Equipment>
            + DataService<Technician>
            + DataService<MaintenancePlan>
            + DataService<WorkOrder>
            + DataService<User>
            + Clone
            + 'static,
    {
        Self {
            clients: Arc::new(store.clone()),
            equipment: Arc::new(store.clone()),
            technicians: Arc::new(store.clone()),
            plans: Arc::new(store.clone()),
            work_orders: Arc::new(store.clone()),
            users: Arc::new(store),
            page_size: page_size.max(1),
        }
    }
}
