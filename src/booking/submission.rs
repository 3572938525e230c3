//! Booking submission contract
//!
//! The engine does not talk to the booking API itself; it defines the
//! payload shape and prepares the `customer_info` bag from the resolved
//! form and the submitted values. Field names the form does not know are
//! forwarded verbatim as custom fields.

use crate::core::condition::is_visible;
use crate::core::error::{FieldValidationError, FormResult, ValidationError};
use crate::core::field::{FieldValue, FormValues};
use crate::resolve::ResolvedForm;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered bag of per-guest form values sent inside the booking request
pub type CustomerInfo = IndexMap<String, FieldValue>;

/// Payload POSTed to the external booking-creation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub activity_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<Uuid>,

    pub booking_date: NaiveDate,

    pub number_of_people: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub customer_info: CustomerInfo,
}

/// Terminal outcome of a booking submission as reported by the booking API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    Confirmed { reference: String },
    Rejected { message: String },
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }
}

/// Gather submitted values for exactly the resolved-and-visible field set.
///
/// - hidden-by-condition fields are skipped even if a value was submitted
/// - null values are skipped
/// - submitted names the form does not know are forwarded verbatim, in
///   sorted order so the payload is deterministic
pub fn collect_customer_info(form: &ResolvedForm, values: &FormValues) -> CustomerInfo {
    let mut info = CustomerInfo::new();

    for field in form.visible_fields(values) {
        if let Some(value) = values.get(&field.name) {
            if !value.is_null() {
                info.insert(field.name.clone(), value.clone());
            }
        }
    }

    let mut custom: Vec<&String> = values
        .keys()
        .filter(|name| form.field(name.as_str()).is_none())
        .collect();
    custom.sort();
    for name in custom {
        if let Some(value) = values.get(name) {
            if !value.is_null() {
                info.insert(name.clone(), value.clone());
            }
        }
    }

    info
}

/// Check submitted values against the resolved form.
///
/// A field hidden by its display condition is exempt from every check.
/// Visible required fields must carry a non-empty value; present values
/// must satisfy their kind's format, their constraints, and, for select
/// and radio kinds, the allowed options. All violations are collected and
/// returned together.
pub fn validate_submission(form: &ResolvedForm, values: &FormValues) -> FormResult<()> {
    let mut errors: Vec<FieldValidationError> = Vec::new();

    for field in form.fields() {
        if !is_visible(field, values) {
            continue;
        }

        let value = match values.get(&field.name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                if field.required {
                    errors.push(FieldValidationError {
                        field: field.name.clone(),
                        message: "is required".to_string(),
                    });
                }
                continue;
            }
        };

        if let Err(message) = field.kind.validate(value) {
            errors.push(FieldValidationError {
                field: field.name.clone(),
                message,
            });
            continue;
        }
        if let Some(constraints) = &field.validation {
            if let Err(message) = constraints.validate(&field.name, value) {
                errors.push(FieldValidationError {
                    field: field.name.clone(),
                    message,
                });
                continue;
            }
        }
        if let Some(options) = &field.options {
            let allowed = value
                .as_str()
                .map(|s| options.iter().any(|o| o == s))
                .unwrap_or(false);
            if !allowed {
                errors.push(FieldValidationError {
                    field: field.name.clone(),
                    message: format!("must be one of: {}", options.join(", ")),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors).into())
    }
}
