//! Constraint-based value validation
//!
//! A field definition may carry optional constraints beyond its kind's
//! format: numeric bounds, a length cap, a regex pattern. Constraints are
//! checked at submission time, never while the form is being filled.

pub mod validators;

use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use validators::{max_length, max_value, min_value, pattern};

/// Optional validation constraints attached to a field definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConstraints {
    /// Minimum numeric value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum numeric value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Maximum string length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regex the string value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldConstraints {
    /// Check a value against every constraint that is set.
    ///
    /// Returns the first violation's message.
    pub fn validate(&self, field: &str, value: &FieldValue) -> Result<(), String> {
        if let Some(min) = self.min {
            min_value(min)(field, value)?;
        }
        if let Some(max) = self.max {
            max_value(max)(field, value)?;
        }
        if let Some(max) = self.max_length {
            max_length(max)(field, value)?;
        }
        if let Some(source) = &self.pattern {
            pattern(source.clone())(field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_constraints_accept_anything() {
        let constraints = FieldConstraints::default();
        assert!(constraints.validate("any", &FieldValue::Null).is_ok());
        assert!(constraints.validate("any", &FieldValue::from("x")).is_ok());
    }

    #[test]
    fn test_numeric_range() {
        let constraints = FieldConstraints {
            min: Some(1.0),
            max: Some(10.0),
            ..Default::default()
        };
        assert!(constraints
            .validate("number_of_rooms", &FieldValue::Integer(3))
            .is_ok());
        assert!(constraints
            .validate("number_of_rooms", &FieldValue::Integer(0))
            .is_err());
        assert!(constraints
            .validate("number_of_rooms", &FieldValue::Integer(11))
            .is_err());
    }

    #[test]
    fn test_pattern_constraint() {
        let constraints = FieldConstraints {
            pattern: Some(r"^([01][0-9]|2[0-3]):[0-5][0-9]$".to_string()),
            ..Default::default()
        };
        assert!(constraints
            .validate("pickup_time", &FieldValue::from("09:30"))
            .is_ok());
        assert!(constraints
            .validate("pickup_time", &FieldValue::from("9h30"))
            .is_err());
    }

    #[test]
    fn test_first_violation_wins() {
        let constraints = FieldConstraints {
            min: Some(5.0),
            max: Some(1.0),
            ..Default::default()
        };
        let err = constraints
            .validate("count", &FieldValue::Integer(3))
            .unwrap_err();
        assert!(err.contains("at least 5"));
    }

    #[test]
    fn test_constraints_serde_roundtrip() {
        let constraints = FieldConstraints {
            min: Some(0.0),
            max: Some(20.0),
            max_length: None,
            pattern: None,
        };
        let json = serde_json::to_string(&constraints).unwrap();
        let restored: FieldConstraints = serde_json::from_str(&json).unwrap();
        assert_eq!(constraints, restored);
    }
}
