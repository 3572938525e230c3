//! Field metadata and form value types

use crate::core::condition::{DisplayCondition, Predicate};
use crate::core::validation::FieldConstraints;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A polymorphic form value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float if possible (integers widen)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Check if the value is null or a blank string.
    ///
    /// This is the notion of "empty" used by `not_empty` display conditions
    /// and by required-field checks at submission time.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

/// The current set of submitted or in-progress form values, keyed by field name
pub type FormValues = HashMap<String, FieldValue>;

/// The input kind of a booking field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    Textarea,
    Select,
    Radio,
    Hidden,
}

impl FieldKind {
    /// Validate a submitted value against this kind's expected format.
    ///
    /// Kinds without a wire format (text, textarea, select, radio, hidden)
    /// accept any value.
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            FieldKind::Email => match value.as_str() {
                Some(s) if Self::is_valid_email(s) => Ok(()),
                _ => Err("must be a valid email address".to_string()),
            },
            FieldKind::Tel => match value.as_str() {
                Some(s) if Self::is_valid_phone(s) => Ok(()),
                _ => Err("must be a valid phone number".to_string()),
            },
            FieldKind::Date => match value.as_str() {
                Some(s) if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => Ok(()),
                _ => Err("must be a date in YYYY-MM-DD format".to_string()),
            },
            FieldKind::Number => match value {
                FieldValue::Integer(_) | FieldValue::Float(_) => Ok(()),
                FieldValue::String(s) if s.trim().parse::<f64>().is_ok() => Ok(()),
                _ => Err("must be a number".to_string()),
            },
            _ => Ok(()),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // At least 8 digits, max 15 (E.164 standard)
            Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
        });
        regex.is_match(phone)
    }
}

/// Metadata for one booking input.
///
/// `label`, `placeholder` and `help_text` are display keys resolved by the
/// presentation layer; the engine only carries them through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    /// Unique key, e.g. `check_in_date`
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Whether the field must be filled by default; a config's
    /// `required_fields` can promote this per context
    #[serde(default)]
    pub required: bool,

    /// Allowed values for select/radio kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldConstraints>,

    /// Condition on another field's value gating this field's visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DisplayCondition>,
}

impl FieldDefinition {
    /// Create a definition with the default display keys derived from the name
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: format!("booking.field.{}", name),
            placeholder: None,
            help_text: None,
            required: false,
            options: None,
            validation: None,
            depends_on: None,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn validation(mut self, constraints: FieldConstraints) -> Self {
        self.validation = Some(constraints);
        self
    }

    pub fn depends_on(mut self, field: &str, predicate: Predicate) -> Self {
        self.depends_on = Some(DisplayCondition {
            field: field.to_string(),
            predicate,
        });
        self
    }
}
