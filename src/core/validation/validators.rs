//! Reusable field validators
//!
//! These validators are composed by `FieldConstraints` to check submitted
//! booking values. A validator only judges values of the type it targets;
//! other types pass through so that kind-level format checks stay the
//! single source of type errors.

use crate::core::field::FieldValue;

/// Validator: number must not be below minimum
pub fn min_value(min: f64) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num < min {
                Err(format!(
                    "'{}' must be at least {} (value: {})",
                    field, min, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: f64) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num > max {
                Err(format!(
                    "'{}' must not exceed {} (value: {})",
                    field, max, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string length must not exceed maximum
pub fn max_length(
    max: usize,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len > max {
                Err(format!(
                    "'{}' must not exceed {} characters (currently: {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a regex pattern
pub fn pattern(
    source: String,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        match regex::Regex::new(&source) {
            Ok(regex) if regex.is_match(s) => Ok(()),
            Ok(_) => Err(format!(
                "'{}' does not match the expected format (value: {})",
                field, s
            )),
            Err(_) => Err(format!("'{}' has an invalid validation pattern", field)),
        }
    }
}
