//! User identity record

use crate::core::{FieldValue, Listable, Record};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A login identity, seeded from configuration and read-only over HTTP
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Ordering key only
    #[serde(skip_serializing)]
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, email: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_joined: Utc::now(),
        }
    }

    /// "First Last", trimmed; empty when both parts are empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for User {
    fn entity_type() -> &'static str {
        "user"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Listable for User {
    fn row_id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "username" => Some(self.username.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "first_name" => Some(self.first_name.as_str().into()),
            "last_name" => Some(self.last_name.as_str().into()),
            "date_joined" => Some(self.date_joined.into()),
            _ => None,
        }
    }
}
