//! Validation of write payloads
//!
//! A write goes through three checks before it reaches storage: the
//! payload's own field and cross-field checks ([`WritePayload::check`]),
//! the `validator` derive constraints, and finally the store's unique and
//! foreign-key rules. The first two are merged into one [`FieldErrors`]
//! list so the caller sees every problem at once.

pub mod extractor;
pub mod validators;

pub use extractor::{Payload, RawPayload};

use crate::core::Choice;
use crate::core::entity::Record;
use crate::core::error::{ApiError, FieldValidationError, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

/// Which write operation a payload is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// POST: all required fields must be present
    Create,
    /// PUT: same requirements as create, applied to an existing record
    Replace,
    /// PATCH: only supplied fields are checked and applied
    Partial,
}

impl WriteMode {
    pub fn is_partial(&self) -> bool {
        matches!(self, WriteMode::Partial)
    }
}

/// Accumulates per-field errors in the order they are found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<FieldValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldValidationError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// Names of the fields with at least one error
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        fields.dedup();
        fields
    }

    /// Message for the first error on a field
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_inner(self) -> Vec<FieldValidationError> {
        self.0
    }

    /// Ok when nothing was recorded
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(self.0).into())
        }
    }

    /// Record a missing value unless the write is partial
    pub fn require<T>(&mut self, field: &str, value: Option<&T>, mode: WriteMode) {
        if value.is_none() && !mode.is_partial() {
            self.push(field, validators::REQUIRED);
        }
    }

    /// Reject an empty or whitespace-only string
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) {
        if value.is_some_and(validators::is_blank) {
            self.push(field, validators::BLANK);
        }
    }

    /// A required text field: present (unless partial) and not blank
    pub fn required_text(&mut self, field: &str, value: Option<&String>, mode: WriteMode) {
        self.require(field, value, mode);
        self.not_blank(field, value.map(String::as_str));
    }

    /// Check a code against an enumerated set
    pub fn choice<C: Choice>(&mut self, field: &str, value: Option<&str>) {
        if let Some(code) = value {
            if C::from_code(code).is_none() {
                self.push(field, validators::invalid_choice(code, C::CODES));
            }
        }
    }

    /// Check a decimal against a NUMERIC(digits, places) column
    pub fn decimal(&mut self, field: &str, value: Option<&Decimal>, digits: u32, places: u32) {
        if let Some(value) = value {
            if let Err(message) = validators::fits_numeric(value, digits, places) {
                self.push(field, message);
            }
        }
    }
}

impl FieldErrors {
    /// Collect `validator` derive errors, reporting each under its wire name
    ///
    /// The derive keys errors by Rust field name and ignores serde renames,
    /// so `wire_name` maps them back to the keys the caller sent.
    pub fn from_derived(
        errors: validator::ValidationErrors,
        wire_name: impl Fn(&str) -> &str,
    ) -> Self {
        let mut by_field: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = wire_name(&*field).to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.clone(), message)
                })
            })
            .collect();
        by_field.sort();

        FieldErrors(
            by_field
                .into_iter()
                .map(|(field, message)| FieldValidationError { field, message })
                .collect(),
        )
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(ValidationError::FieldErrors(errors.0))
    }
}

/// A caller-supplied change set for one record type
///
/// Payload structs hold every writable field as an `Option` so that one
/// type serves create, replace and partial update. Nullable fields use
/// `Option<Option<T>>` with [`double_option`] so an explicit `null` clears
/// the value while an absent key leaves it untouched.
pub trait WritePayload: DeserializeOwned + Validate + Send + 'static {
    type Record: Record;

    /// Field-level and cross-field checks not covered by `validator` attributes
    fn check(&self, mode: WriteMode) -> FieldErrors;

    /// A record with model defaults and system-assigned fields set
    fn blank_record(id: Uuid, now: DateTime<Utc>) -> Self::Record;

    /// Copy every supplied field onto `record`
    fn apply(self, record: &mut Self::Record);

    /// Wire key of a Rust field carrying a `validator` attribute
    fn wire_name(field: &str) -> &str {
        field
    }

    /// Build a new record from a checked create payload
    fn build(self, id: Uuid, now: DateTime<Utc>) -> Self::Record {
        let mut record = Self::blank_record(id, now);
        self.apply(&mut record);
        record
    }

    /// Run both check layers and merge their errors
    fn validate_for(&self, mode: WriteMode) -> Result<(), ApiError> {
        let mut errors = self.check(mode);
        if let Err(derived) = self.validate() {
            errors.extend(FieldErrors::from_derived(derived, Self::wire_name));
        }
        errors.into_result()
    }
}

/// Deserialize a present key as `Some(value)`, keeping `null` distinct from absent
///
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
