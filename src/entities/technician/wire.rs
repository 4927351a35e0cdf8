//! Technician write payload

use super::model::{Specialty, Technician};
use crate::core::Choice;
use crate::core::validation::{FieldErrors, WriteMode, WritePayload};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct TechnicianPayload {
    #[serde(rename = "usuario")]
    pub user_id: Option<Uuid>,

    #[serde(rename = "rut")]
    #[validate(length(max = 12, message = "Ensure this field has no more than 12 characters."))]
    pub tax_id: Option<String>,

    #[serde(rename = "especialidad")]
    pub specialty: Option<String>,

    #[serde(rename = "telefono")]
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,

    #[serde(rename = "fecha_contratacion")]
    pub hired_on: Option<NaiveDate>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl WritePayload for TechnicianPayload {
    type Record = Technician;

    fn check(&self, mode: WriteMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("usuario", self.user_id.as_ref(), mode);
        errors.required_text("rut", self.tax_id.as_ref(), mode);
        errors.choice::<Specialty>("especialidad", self.specialty.as_deref());
        errors.required_text("telefono", self.phone.as_ref(), mode);
        errors.require("fecha_contratacion", self.hired_on.as_ref(), mode);
        errors
    }

    fn wire_name(field: &str) -> &str {
        match field {
            "tax_id" => "rut",
            "phone" => "telefono",
            other => other,
        }
    }

    fn blank_record(id: Uuid, _now: DateTime<Utc>) -> Technician {
        Technician {
            id,
            user_id: Uuid::nil(),
            tax_id: String::new(),
            specialty: Specialty::default(),
            phone: String::new(),
            hired_on: NaiveDate::default(),
            active: true,
        }
    }

    fn apply(self, record: &mut Technician) {
        if let Some(user_id) = self.user_id {
            record.user_id = user_id;
        }
        if let Some(tax_id) = self.tax_id {
            record.tax_id = tax_id;
        }
        if let Some(specialty) = self.specialty.as_deref().and_then(Specialty::from_code) {
            record.specialty = specialty;
        }
        if let Some(phone) = self.phone {
            record.phone = phone;
        }
        if let Some(hired_on) = self.hired_on {
            record.hired_on = hired_on;
        }
        if let Some(active) = self.active {
            record.active = active;
        }
    }
}
