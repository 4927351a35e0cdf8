//! Client write payload

use super::model::Client;
use crate::core::validation::{FieldErrors, WriteMode, WritePayload};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ClientPayload {
    #[serde(rename = "rut")]
    #[validate(length(max = 12, message = "Ensure this field has no more than 12 characters."))]
    pub tax_id: Option<String>,

    #[serde(rename = "razon_social")]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub legal_name: Option<String>,

    #[serde(rename = "giro")]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub business_line: Option<String>,

    #[serde(rename = "direccion")]
    #[validate(length(max = 300, message = "Ensure this field has no more than 300 characters."))]
    pub address: Option<String>,

    #[serde(rename = "telefono")]
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl WritePayload for ClientPayload {
    type Record = Client;

    fn check(&self, mode: WriteMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.required_text("rut", self.tax_id.as_ref(), mode);
        errors.required_text("razon_social", self.legal_name.as_ref(), mode);
        errors.required_text("giro", self.business_line.as_ref(), mode);
        errors.required_text("direccion", self.address.as_ref(), mode);
        errors.required_text("telefono", self.phone.as_ref(), mode);
        errors.required_text("email", self.email.as_ref(), mode);
        errors
    }

    fn wire_name(field: &str) -> &str {
        match field {
            "tax_id" => "rut",
            "legal_name" => "razon_social",
            "business_line" => "giro",
            "address" => "direccion",
            "phone" => "telefono",
            other => other,
        }
    }

    fn blank_record(id: Uuid, now: DateTime<Utc>) -> Client {
        Client {
            id,
            tax_id: String::new(),
            legal_name: String::new(),
            business_line: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            registered_at: now,
            active: true,
        }
    }

    fn apply(self, record: &mut Client) {
        if let Some(tax_id) = self.tax_id {
            record.tax_id = tax_id;
        }
        if let Some(legal_name) = self.legal_name {
            record.legal_name = legal_name;
        }
        if let Some(business_line) = self.business_line {
            record.business_line = business_line;
        }
        if let Some(address) = self.address {
            record.address = address;
        }
        if let Some(phone) = self.phone {
            record.phone = phone;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(active) = self.active {
            record.active = active;
        }
    }
}
