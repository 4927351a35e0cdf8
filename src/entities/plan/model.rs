//! Maintenance plan record

use crate::choice_enum;
use crate::core::{FieldValue, Listable, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

choice_enum! {
    /// How often a plan recurs
    pub enum Frequency {
        Daily => "DIA",
        Weekly => "SEM",
        #[default]
        Monthly => "MEN",
        Bimonthly => "BIM",
        Quarterly => "TRI",
        Semiannual => "SES",
        Annual => "ANU",
    }
}

/// A recurring preventive procedure for one piece of equipment
///
/// `(equipment_id, name)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub id: Uuid,

    #[serde(rename = "equipo")]
    pub equipment_id: Uuid,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "frecuencia")]
    pub frequency: Frequency,

    /// Hours, at least 1
    #[serde(rename = "duracion_estimada")]
    pub estimated_hours: i32,

    #[serde(rename = "procedimiento")]
    pub procedure: String,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Record for MaintenancePlan {
    fn entity_type() -> &'static str {
        "maintenance_plan"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl MaintenancePlan {
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "equipo" => Some(self.equipment_id.into()),
            "nombre" => Some(self.name.as_str().into()),
            "frecuencia" => Some(self.frequency.into()),
            "duracion_estimada" => Some(i64::from(self.estimated_hours).into()),
            "activo" => Some(self.active.into()),
            _ => None,
        }
    }
}

/// Read representation with the owning equipment's code
#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    #[serde(flatten)]
    pub plan: MaintenancePlan,

    pub equipo_codigo: String,
}

impl Listable for PlanView {
    fn row_id(&self) -> Uuid {
        self.plan.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "equipo_codigo" | "equipo__codigo" => Some(self.equipo_codigo.as_str().into()),
            _ => self.plan.field_value(field),
        }
    }
}
