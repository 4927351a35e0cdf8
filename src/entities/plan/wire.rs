//! Maintenance plan write payload

use super::model::{Frequency, MaintenancePlan};
use crate::core::Choice;
use crate::core::validation::{FieldErrors, WriteMode, WritePayload};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PlanPayload {
    #[serde(rename = "equipo")]
    pub equipment_id: Option<Uuid>,

    #[serde(rename = "nombre")]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub name: Option<String>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,

    #[serde(rename = "frecuencia")]
    pub frequency: Option<String>,

    #[serde(rename = "duracion_estimada")]
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub estimated_hours: Option<i32>,

    #[serde(rename = "procedimiento")]
    pub procedure: Option<String>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl WritePayload for PlanPayload {
    type Record = MaintenancePlan;

    fn check(&self, mode: WriteMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("equipo", self.equipment_id.as_ref(), mode);
        errors.required_text("nombre", self.name.as_ref(), mode);
        errors.required_text("descripcion", self.description.as_ref(), mode);
        errors.choice::<Frequency>("frecuencia", self.frequency.as_deref());
        errors.require("duracion_estimada", self.estimated_hours.as_ref(), mode);
        errors.required_text("procedimiento", self.procedure.as_ref(), mode);
        errors
    }

    fn wire_name(field: &str) -> &str {
        match field {
            "name" => "nombre",
            "estimated_hours" => "duracion_estimada",
            other => other,
        }
    }

    fn blank_record(id: Uuid, _now: DateTime<Utc>) -> MaintenancePlan {
        MaintenancePlan {
            id,
            equipment_id: Uuid::nil(),
            name: String::new(),
            description: String::new(),
            frequency: Frequency::default(),
            estimated_hours: 1,
            procedure: String::new(),
            active: true,
        }
    }

    fn apply(self, record: &mut MaintenancePlan) {
        if let Some(equipment_id) = self.equipment_id {
            record.equipment_id = equipment_id;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(frequency) = self.frequency.as_deref().and_then(Frequency::from_code) {
            record.frequency = frequency;
        }
        if let Some(hours) = self.estimated_hours {
            record.estimated_hours = hours;
        }
        if let Some(procedure) = self.procedure {
            record.procedure = procedure;
        }
        if let Some(active) = self.active {
            record.active = active;
        }
    }
}
