//! Core module containing the fundamental types of the engine

pub mod condition;
pub mod error;
pub mod field;
pub mod validation;

pub use condition::{is_visible, DisplayCondition, Predicate};
pub use error::{
    CatalogError, ConfigError, FieldValidationError, FormError, FormResult, ResolveError,
    ValidationError,
};
pub use field::{FieldDefinition, FieldKind, FieldValue, FormValues};
pub use validation::FieldConstraints;
