//! Equipment write payload

use super::model::{Equipment, EquipmentType};
use crate::core::Choice;
use crate::core::validation::{FieldErrors, WriteMode, WritePayload};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EquipmentPayload {
    #[serde(rename = "cliente")]
    pub client_id: Option<Uuid>,

    #[serde(rename = "codigo")]
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    pub code: Option<String>,

    #[serde(rename = "nombre")]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub name: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: Option<String>,

    #[serde(rename = "marca")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub brand: Option<String>,

    #[serde(rename = "modelo")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub model: Option<String>,

    #[serde(rename = "numero_serie")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub serial_number: Option<String>,

    #[serde(rename = "fecha_instalacion")]
    pub installed_on: Option<NaiveDate>,

    #[serde(rename = "ubicacion")]
    #[validate(length(max = 300, message = "Ensure this field has no more than 300 characters."))]
    pub location: Option<String>,

    #[serde(rename = "ficha_tecnica")]
    pub technical_sheet: Option<String>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl WritePayload for EquipmentPayload {
    type Record = Equipment;

    fn check(&self, mode: WriteMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("cliente", self.client_id.as_ref(), mode);
        errors.required_text("codigo", self.code.as_ref(), mode);
        errors.required_text("nombre", self.name.as_ref(), mode);
        errors.choice::<EquipmentType>("tipo", self.kind.as_deref());
        errors.required_text("marca", self.brand.as_ref(), mode);
        errors.required_text("modelo", self.model.as_ref(), mode);
        errors.required_text("numero_serie", self.serial_number.as_ref(), mode);
        errors.require("fecha_instalacion", self.installed_on.as_ref(), mode);
        errors.required_text("ubicacion", self.location.as_ref(), mode);
        errors
    }

    fn wire_name(field: &str) -> &str {
        match field {
            "code" => "codigo",
            "name" => "nombre",
            "brand" => "marca",
            "model" => "modelo",
            "serial_number" => "numero_serie",
            "location" => "ubicacion",
            other => other,
        }
    }

    fn blank_record(id: Uuid, _now: DateTime<Utc>) -> Equipment {
        Equipment {
            id,
            client_id: Uuid::nil(),
            code: String::new(),
            name: String::new(),
            kind: EquipmentType::default(),
            brand: String::new(),
            model: String::new(),
            serial_number: String::new(),
            installed_on: NaiveDate::default(),
            location: String::new(),
            technical_sheet: String::new(),
            active: true,
        }
    }

    fn apply(self, record: &mut Equipment) {
        if let Some(client_id) = self.client_id {
            record.client_id = client_id;
        }
        if let Some(code) = self.code {
            record.code = code;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(kind) = self.kind.as_deref().and_then(EquipmentType::from_code) {
            record.kind = kind;
        }
        if let Some(brand) = self.brand {
            record.brand = brand;
        }
        if let Some(model) = self.model {
            record.model = model;
        }
        if let Some(serial_number) = self.serial_number {
            record.serial_number = serial_number;
        }
        if let Some(installed_on) = self.installed_on {
            record.installed_on = installed_on;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
        if let Some(technical_sheet) = self.technical_sheet {
            record.technical_sheet = technical_sheet;
        }
        if let Some(active) = self.active {
            record.active = active;
        }
    }
}
