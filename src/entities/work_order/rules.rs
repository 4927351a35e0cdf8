//! Cross-field rules for work orders
//!
//! Every rule looks only at the values it is given, so a partial update is
//! judged on what it supplies. All violations are reported together.

use super::model::Status;
use crate::core::validation::FieldErrors;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub const END_BEFORE_START: &str = "End date cannot be earlier than start date.";
pub const FINISHED_WITHOUT_END: &str = "A finished order must have an end date.";
pub const NEGATIVE_COST: &str = "Actual cost cannot be negative.";

/// The candidate values the rules inspect
#[derive(Debug, Clone, Copy, Default)]
pub struct Candidate {
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: Option<Status>,
    pub actual_cost: Option<Decimal>,
}

/// Check the three rules in order, collecting every violation
pub fn check(candidate: &Candidate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let (Some(start), Some(end)) = (candidate.started_at, candidate.finished_at) {
        if end < start {
            errors.push("fecha_fin", END_BEFORE_START);
        }
    }

    if candidate.status == Some(Status::Finished) && candidate.finished_at.is_none() {
        errors.push("estado", FINISHED_WITHOUT_END);
    }

    if candidate.actual_cost.is_some_and(|c| c.is_sign_negative() && !c.is_zero()) {
        errors.push("costo_real", NEGATIVE_COST);
    }

    errors
}
