//! Technician record

use crate::choice_enum;
use crate::core::{FieldValue, Listable, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

choice_enum! {
    /// Technician trade
    pub enum Specialty {
        Mechanical => "MEC",
        Electrical => "ELE",
        Electronic => "ELN",
        Systems => "SIS",
        #[default]
        General => "GEN",
    }
}

/// Staff member that can be assigned to work orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: Uuid,

    /// Linked user identity, one technician per user
    #[serde(rename = "usuario")]
    pub user_id: Uuid,

    #[serde(rename = "rut")]
    pub tax_id: String,

    #[serde(rename = "especialidad")]
    pub specialty: Specialty,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "fecha_contratacion")]
    pub hired_on: NaiveDate,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Record for Technician {
    fn entity_type() -> &'static str {
        "technician"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Technician {
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "usuario" => Some(self.user_id.into()),
            "rut" => Some(self.tax_id.as_str().into()),
            "especialidad" => Some(self.specialty.into()),
            "fecha_contratacion" => Some(self.hired_on.into()),
            "activo" => Some(self.active.into()),
            _ => None,
        }
    }
}

/// Read representation with the linked user's name and email
#[derive(Debug, Clone, Serialize)]
pub struct TechnicianView {
    #[serde(flatten)]
    pub technician: Technician,

    pub usuario_nombre: String,
    pub usuario_email: String,

    #[serde(skip)]
    pub first_name: String,
    #[serde(skip)]
    pub last_name: String,
}

impl Listable for TechnicianView {
    fn row_id(&self) -> Uuid {
        self.technician.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "usuario_nombre" => Some(self.usuario_nombre.as_str().into()),
            "usuario_email" => Some(self.usuario_email.as_str().into()),
            "usuario__first_name" => Some(self.first_name.as_str().into()),
            "usuario__last_name" => Some(self.last_name.as_str().into()),
            _ => self.technician.field_value(field),
        }
    }
}
