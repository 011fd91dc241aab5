//! Validation utilities shared by the form layer.
//!
//! Form input arrives as raw text. A field that is blank or cannot be
//! parsed counts as missing, and every missing required field is
//! accumulated before any error is surfaced, so the caller sees the
//! whole set of violations at once.

use crate::{FieldError, SalesDeskError};
use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

/// Message recorded for a required field that is missing or unusable.
pub const REQUIRED_MESSAGE: &str = "Field can't be empty";

/// Date format accepted by form input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the violation recorded for a missing required field.
#[must_use]
pub fn required_violation() -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(REQUIRED_MESSAGE.into());
    error
}

/// Records a required-field violation against `field`.
pub fn add_required(errors: &mut ValidationErrors, field: &'static str) {
    errors.add(field.into(), required_violation());
}

/// Returns the input unchanged when it holds any non-blank text.
///
/// Blankness is judged on the trimmed value, but the original spacing
/// is preserved in the returned string.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => None,
    }
}

/// Parses a monetary amount, yielding `None` when the input is not a number.
#[must_use]
pub fn try_parse_amount(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Parses an ISO date, yielding `None` when the input is not a date.
#[must_use]
pub fn try_parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Converts `validator::ValidationErrors` into field-level errors.
#[must_use]
pub fn validation_errors_to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to a `SalesDeskError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> SalesDeskError {
    SalesDeskError::Validation(validation_errors_to_field_errors(&errors))
}
