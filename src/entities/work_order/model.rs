//! Work order record

use crate::choice_enum;
use crate::core::{FieldValue, Listable, Record};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

choice_enum! {
    /// Work order lifecycle state; any state may follow any other
    pub enum Status {
        #[default]
        Pending => "PEN",
        InProgress => "PRO",
        Finished => "FIN",
        Cancelled => "CAN",
    }
}

choice_enum! {
    pub enum Priority {
        Low => "BAJ",
        #[default]
        Medium => "MED",
        High => "ALT",
        Urgent => "URG",
    }
}

/// A unit of maintenance work against one piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: Uuid,

    #[serde(rename = "equipo")]
    pub equipment_id: Uuid,

    /// Cleared when the technician is deleted
    #[serde(rename = "tecnico")]
    pub technician_id: Option<Uuid>,

    /// Cleared when the plan is deleted
    #[serde(rename = "plan_mantencion")]
    pub plan_id: Option<Uuid>,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    /// Set once at creation
    #[serde(rename = "fecha_solicitud")]
    pub requested_at: DateTime<Utc>,

    #[serde(rename = "fecha_programada")]
    pub scheduled_on: NaiveDate,

    #[serde(rename = "fecha_inicio")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(rename = "fecha_fin")]
    pub finished_at: Option<DateTime<Utc>>,

    #[serde(rename = "estado")]
    pub status: Status,

    #[serde(rename = "prioridad")]
    pub priority: Priority,

    #[serde(rename = "observaciones")]
    pub notes: String,

    #[serde(rename = "costo_estimado")]
    pub estimated_cost: Decimal,

    #[serde(rename = "costo_real")]
    pub actual_cost: Option<Decimal>,
}

impl Record for WorkOrder {
    fn entity_type() -> &'static str {
        "work_order"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl WorkOrder {
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "equipo" => Some(self.equipment_id.into()),
            "tecnico" => Some(self.technician_id.into()),
            "plan_mantencion" => Some(self.plan_id.into()),
            "codigo" => Some(self.code.as_str().into()),
            "descripcion" => Some(self.description.as_str().into()),
            "fecha_solicitud" => Some(self.requested_at.into()),
            "fecha_programada" => Some(self.scheduled_on.into()),
            "estado" => Some(self.status.into()),
            "prioridad" => Some(self.priority.into()),
            "costo_estimado" => Some(self.estimated_cost.into()),
            _ => None,
        }
    }
}

/// Read representation with equipment code and optional technician and plan names
#[derive(Debug, Clone, Serialize)]
pub struct WorkOrderView {
    #[serde(flatten)]
    pub order: WorkOrder,

    pub equipo_codigo: String,
    pub tecnico_nombre: Option<String>,
    pub plan_nombre: Option<String>,
}

impl Listable for WorkOrderView {
    fn row_id(&self) -> Uuid {
        self.order.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "equipo_codigo" | "equipo__codigo" => Some(self.equipo_codigo.as_str().into()),
            "tecnico_nombre" => Some(self.tecnico_nombre.as_deref().into()),
            "plan_nombre" => Some(self.plan_nombre.as_deref().into()),
            _ => self.order.field_value(field),
        }
    }
}
