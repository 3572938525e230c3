//! Conditional field display
//!
//! Fields can depend on the current value of another field, e.g. a
//! "purpose (other)" free-text input that only appears when the purpose
//! select equals `other`. Evaluation is total: a missing or null dependency
//! value never satisfies a condition and never produces an error, since
//! this runs on every form value change.

use crate::core::field::{FieldDefinition, FieldValue, FormValues};
use serde::{Deserialize, Serialize};

/// Predicate applied to the depended-on field's current value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    /// The dependency's value equals the expected value
    Equals(FieldValue),
    /// The dependency has a non-empty value
    NotEmpty,
}

impl Predicate {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Predicate::Equals(expected) => value == expected,
            Predicate::NotEmpty => !value.is_empty(),
        }
    }
}

/// A visibility condition referencing another field by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayCondition {
    /// Name of the field this condition depends on
    pub field: String,

    pub predicate: Predicate,
}

impl DisplayCondition {
    /// Whether the condition holds for the given form values.
    ///
    /// An absent dependency value is treated as not satisfied.
    pub fn is_satisfied(&self, values: &FormValues) -> bool {
        match values.get(&self.field) {
            Some(value) => self.predicate.matches(value),
            None => false,
        }
    }
}

/// Whether a field should currently be shown.
///
/// A field with no condition is always visible (static resolution decides
/// whether it is part of the form at all).
pub fn is_visible(field: &FieldDefinition, values: &FormValues) -> bool {
    match &field.depends_on {
        Some(condition) => condition.is_satisfied(values),
        None => true,
    }
}
