//! Client record

use crate::core::{FieldValue, Listable, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company that owns equipment and is billed for maintenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,

    /// Tax ID, unique across clients
    #[serde(rename = "rut")]
    pub tax_id: String,

    #[serde(rename = "razon_social")]
    pub legal_name: String,

    #[serde(rename = "giro")]
    pub business_line: String,

    #[serde(rename = "direccion")]
    pub address: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    pub email: String,

    /// Set once at creation
    #[serde(rename = "fecha_registro")]
    pub registered_at: DateTime<Utc>,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Record for Client {
    fn entity_type() -> &'static str {
        "client"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Listable for Client {
    fn row_id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "rut" => Some(self.tax_id.as_str().into()),
            "razon_social" => Some(self.legal_name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "fecha_registro" => Some(self.registered_at.into()),
            "activo" => Some(self.active.into()),
            _ => None,
        }
    }
}
