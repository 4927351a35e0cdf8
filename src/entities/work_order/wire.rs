//! Work order write payload

use super::model::{Priority, Status, WorkOrder};
use super::rules::{self, Candidate};
use crate::core::Choice;
use crate::core::validation::{
    FieldErrors, WriteMode, WritePayload, double_option, validators::to_scale,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// NUMERIC(10, 2)
const COST_DIGITS: u32 = 10;
const COST_PLACES: u32 = 2;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct WorkOrderPayload {
    #[serde(rename = "equipo")]
    pub equipment_id: Option<Uuid>,

    #[serde(rename = "tecnico", default, deserialize_with = "double_option")]
    pub technician_id: Option<Option<Uuid>>,

    #[serde(rename = "plan_mantencion", default, deserialize_with = "double_option")]
    pub plan_id: Option<Option<Uuid>>,

    #[serde(rename = "codigo")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub code: Option<String>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,

    #[serde(rename = "fecha_programada")]
    pub scheduled_on: Option<NaiveDate>,

    #[serde(rename = "fecha_inicio", default, deserialize_with = "double_option")]
    pub started_at: Option<Option<DateTime<Utc>>>,

    #[serde(rename = "fecha_fin", default, deserialize_with = "double_option")]
    pub finished_at: Option<Option<DateTime<Utc>>>,

    #[serde(rename = "estado")]
    pub status: Option<String>,

    #[serde(rename = "prioridad")]
    pub priority: Option<String>,

    #[serde(rename = "observaciones")]
    pub notes: Option<String>,

    #[serde(rename = "costo_estimado")]
    pub estimated_cost: Option<Decimal>,

    #[serde(rename = "costo_real", default, deserialize_with = "double_option")]
    pub actual_cost: Option<Option<Decimal>>,
}

impl WorkOrderPayload {
    fn candidate(&self) -> Candidate {
        Candidate {
            started_at: self.started_at.flatten(),
            finished_at: self.finished_at.flatten(),
            status: self.status.as_deref().and_then(Status::from_code),
            actual_cost: self.actual_cost.flatten(),
        }
    }
}

impl WritePayload for WorkOrderPayload {
    type Record = WorkOrder;

    fn check(&self, mode: WriteMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("equipo", self.equipment_id.as_ref(), mode);
        errors.required_text("codigo", self.code.as_ref(), mode);
        errors.required_text("descripcion", self.description.as_ref(), mode);
        errors.require("fecha_programada", self.scheduled_on.as_ref(), mode);
        errors.choice::<Status>("estado", self.status.as_deref());
        errors.choice::<Priority>("prioridad", self.priority.as_deref());
        errors.decimal(
            "costo_estimado",
            self.estimated_cost.as_ref(),
            COST_DIGITS,
            COST_PLACES,
        );
        errors.decimal(
            "costo_real",
            self.actual_cost.flatten().as_ref(),
            COST_DIGITS,
            COST_PLACES,
        );
        errors.extend(rules::check(&self.candidate()));
        errors
    }

    fn wire_name(field: &str) -> &str {
        match field {
            "code" => "codigo",
            other => other,
        }
    }

    fn blank_record(id: Uuid, now: DateTime<Utc>) -> WorkOrder {
        WorkOrder {
            id,
            equipment_id: Uuid::nil(),
            technician_id: None,
            plan_id: None,
            code: String::new(),
            description: String::new(),
            requested_at: now,
            scheduled_on: NaiveDate::default(),
            started_at: None,
            finished_at: None,
            status: Status::default(),
            priority: Priority::default(),
            notes: String::new(),
            estimated_cost: to_scale(Decimal::ZERO, COST_PLACES),
            actual_cost: None,
        }
    }

    fn apply(self, record: &mut WorkOrder) {
        if let Some(equipment_id) = self.equipment_id {
            record.equipment_id = equipment_id;
        }
        if let Some(technician_id) = self.technician_id {
            record.technician_id = technician_id;
        }
        if let Some(plan_id) = self.plan_id {
            record.plan_id = plan_id;
        }
        if let Some(code) = self.code {
            record.code = code;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(scheduled_on) = self.scheduled_on {
            record.scheduled_on = scheduled_on;
        }
        if let Some(started_at) = self.started_at {
            record.started_at = started_at;
        }
        if let Some(finished_at) = self.finished_at {
            record.finished_at = finished_at;
        }
        if let Some(status) = self.status.as_deref().and_then(Status::from_code) {
            record.status = status;
        }
        if let Some(priority) = self.priority.as_deref().and_then(Priority::from_code) {
            record.priority = priority;
        }
        if let Some(notes) = self.notes {
            record.notes = notes;
        }
        if let Some(cost) = self.estimated_cost {
            record.estimated_cost = to_scale(cost, COST_PLACES);
        }
        if let Some(cost) = self.actual_cost {
            record.actual_cost = cost.map(|c| to_scale(c, COST_PLACES));
        }
    }
}
