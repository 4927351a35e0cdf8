//! Equipment record

use crate::choice_enum;
use crate::core::{FieldValue, Listable, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

choice_enum! {
    /// Equipment category
    pub enum EquipmentType {
        #[default]
        Machine => "MAQ",
        Electronic => "EQU",
        System => "SIS",
        Vehicle => "VEH",
        Other => "OTR",
    }
}

/// An asset owned by a client and subject to maintenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,

    /// Owning client; deleting it deletes this record
    #[serde(rename = "cliente")]
    pub client_id: Uuid,

    /// Unique inventory code
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "tipo")]
    pub kind: EquipmentType,

    #[serde(rename = "marca")]
    pub brand: String,

    #[serde(rename = "modelo")]
    pub model: String,

    /// Unique manufacturer serial number
    #[serde(rename = "numero_serie")]
    pub serial_number: String,

    #[serde(rename = "fecha_instalacion")]
    pub installed_on: NaiveDate,

    #[serde(rename = "ubicacion")]
    pub location: String,

    /// Free-text technical sheet, may be empty
    #[serde(rename = "ficha_tecnica")]
    pub technical_sheet: String,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Record for Equipment {
    fn entity_type() -> &'static str {
        "equipment"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Equipment {
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "cliente" => Some(self.client_id.into()),
            "codigo" => Some(self.code.as_str().into()),
            "nombre" => Some(self.name.as_str().into()),
            "tipo" => Some(self.kind.into()),
            "marca" => Some(self.brand.as_str().into()),
            "numero_serie" => Some(self.serial_number.as_str().into()),
            "fecha_instalacion" => Some(self.installed_on.into()),
            "activo" => Some(self.active.into()),
            _ => None,
        }
    }
}

/// Read representation with the owning client's display name
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentView {
    #[serde(flatten)]
    pub equipment: Equipment,

    pub cliente_nombre: String,
}

impl Listable for EquipmentView {
    fn row_id(&self) -> Uuid {
        self.equipment.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "cliente_nombre" => Some(self.cliente_nombre.as_str().into()),
            _ => self.equipment.field_value(field),
        }
    }
}

/// Fixed projection served by `GET /equipos/{id}/ficha_tecnica`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSheet {
    pub codigo: String,
    pub nombre: String,
    pub marca: String,
    pub modelo: String,
    pub numero_serie: String,
    pub tipo: EquipmentType,
    pub ficha_tecnica: String,
    pub fecha_instalacion: NaiveDate,
    pub ubicacion: String,
}

impl From<Equipment> for TechnicalSheet {
    fn from(equipment: Equipment) -> Self {
        Self {
            codigo: equipment.code,
            nombre: equipment.name,
            marca: equipment.brand,
            modelo: equipment.model,
            numero_serie: equipment.serial_number,
            tipo: equipment.kind,
            ficha_tecnica: equipment.technical_sheet,
            fecha_instalacion: equipment.installed_on,
            ubicacion: equipment.location,
        }
    }
}
