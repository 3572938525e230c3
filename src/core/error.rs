//! Typed error handling for the booking-field engine
//!
//! This module provides a typed error hierarchy so callers can handle
//! misconfigurations specifically rather than dealing with generic
//! `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`CatalogError`]: a referenced field name is not known
//! - [`ConfigError`]: a stored or authored config cannot be read
//! - [`ResolveError`]: a field group references a field that cannot be resolved
//! - [`ValidationError`]: submitted values violate the resolved form
//!
//! All of these indicate defects in vendor-authored configuration or in a
//! submission, never transient conditions; there is nothing to retry.

use serde::Serialize;
use std::fmt;

/// The main error type for the booking-field engine
#[derive(Debug)]
pub enum FormError {
    /// Field catalog lookups
    Catalog(CatalogError),

    /// Configuration loading errors
    Config(ConfigError),

    /// Field resolution errors
    Resolve(ResolveError),

    /// Submission validation errors
    Validation(ValidationError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Catalog(e) => write!(f, "{}", e),
            FormError::Config(e) => write!(f, "{}", e),
            FormError::Resolve(e) => write!(f, "{}", e),
            FormError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Catalog(e) => Some(e),
            FormError::Config(e) => Some(e),
            FormError::Resolve(e) => Some(e),
            FormError::Validation(e) => Some(e),
        }
    }
}

impl FormError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Catalog(e) => e.error_code(),
            FormError::Config(e) => e.error_code(),
            FormError::Resolve(e) => e.error_code(),
            FormError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Get structured details for diagnostics, if any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            FormError::Catalog(CatalogError::UnknownField { field }) => {
                Some(serde_json::json!({ "field": field }))
            }
            FormError::Resolve(ResolveError::UnresolvedField { group, field }) => {
                Some(serde_json::json!({ "group": group, "field": field }))
            }
            FormError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors from field catalog lookups
#[derive(Debug)]
pub enum CatalogError {
    /// The field name is in neither the global catalog nor the
    /// config's extra fields
    UnknownField { field: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownField { field } => {
                write!(f, "Unknown field '{}'", field)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

impl From<CatalogError> for FormError {
    fn from(err: CatalogError) -> Self {
        FormError::Catalog(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a stored or authored config
    Parse {
        file: Option<String>,
        message: String,
    },

    /// Booking type tag not recognized
    UnknownBookingType { value: String },

    /// IO error while reading a config file
    Io { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::UnknownBookingType { value } => {
                write!(f, "Unknown booking type: {}", value)
            }
            ConfigError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::UnknownBookingType { .. } => "UNKNOWN_BOOKING_TYPE",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<ConfigError> for FormError {
    fn from(err: ConfigError) -> Self {
        FormError::Config(err)
    }
}

// =============================================================================
// Resolve Errors
// =============================================================================

/// Errors from turning an effective config into a render plan
#[derive(Debug)]
pub enum ResolveError {
    /// A field group references a name that resolves to no definition.
    ///
    /// Names both the group and the field so the override's author can
    /// find the offending entry.
    UnresolvedField { group: String, field: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvedField { group, field } => {
                write!(
                    f,
                    "Field '{}' in group '{}' does not resolve to any definition",
                    field, group
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl ResolveError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ResolveError::UnresolvedField { .. } => "UNRESOLVED_FIELD",
        }
    }
}

impl From<ResolveError> for FormError {
    fn from(err: ResolveError) -> Self {
        FormError::Resolve(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to submitted booking values
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Config(ConfigError::Parse {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for FormError {
    fn from(err: serde_yaml::Error) -> Self {
        FormError::Config(ConfigError::Parse {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::Config(ConfigError::Io {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for booking-field operations
pub type FormResult<T> = Result<T, FormError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = CatalogError::UnknownField {
            field: "loyalty_number".to_string(),
        };
        assert!(err.to_string().contains("loyalty_number"));
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_unresolved_field_names_group_and_field() {
        let err = ResolveError::UnresolvedField {
            group: "Stay".to_string(),
            field: "nonexistent_field".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("nonexistent_field"));
        assert!(display.contains("Stay"));
    }

    #[test]
    fn test_form_error_conversion() {
        let err: FormError = CatalogError::UnknownField {
            field: "x".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
        assert_eq!(
            err.details(),
            Some(serde_json::json!({ "field": "x" }))
        );
    }

    #[test]
    fn test_unresolved_details() {
        let err: FormError = ResolveError::UnresolvedField {
            group: "Stay".to_string(),
            field: "nonexistent_field".to_string(),
        }
        .into();
        assert_eq!(
            err.details(),
            Some(serde_json::json!({ "group": "Stay", "field": "nonexistent_field" }))
        );
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "email".to_string(),
                message: "must be a valid email address".to_string(),
            },
            FieldValidationError {
                field: "check_in_date".to_string(),
                message: "is required".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("email"));
        assert!(display.contains("check_in_date"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            file: Some("override.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("override.yaml"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: FormError = json_err.into();
        assert!(matches!(
            err,
            FormError::Config(ConfigError::Parse { .. })
        ));
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }
}
